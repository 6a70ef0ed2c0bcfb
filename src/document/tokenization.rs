use crate::types::TokenSequence;

/// Whitespace characters that separate plaintext tokens. Unicode spaces such
/// as U+00A0 stay inside tokens.
fn is_token_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Splits running text into tokens on ASCII whitespace, dropping empty pieces.
pub fn split_plaintext(text: &str) -> TokenSequence {
    text.split(is_token_separator)
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_produces_no_tokens() {
        assert!(split_plaintext("").is_empty());
        assert!(split_plaintext(" \n\t ").is_empty());
    }

    #[test]
    fn runs_of_whitespace_are_collapsed() {
        let seq = split_plaintext("  De  kat\n\tzat,\r\nniet.  ");
        assert_eq!(seq.as_slice(), ["De", "kat", "zat,", "niet."]);
    }

    #[test]
    fn vertical_tab_and_form_feed_separate_tokens() {
        let seq = split_plaintext("a\x0bb\x0cc");
        assert_eq!(seq.as_slice(), ["a", "b", "c"]);
    }

    #[test]
    fn non_breaking_space_is_kept_inside_token() {
        let seq = split_plaintext("10\u{a0}km weg");
        assert_eq!(seq.as_slice(), ["10\u{a0}km", "weg"]);
    }

    #[test]
    fn punctuation_stays_attached() {
        let seq = split_plaintext("„Ja!” zei hij…");
        assert_eq!(seq.as_slice(), ["„Ja!”", "zei", "hij…"]);
    }
}
