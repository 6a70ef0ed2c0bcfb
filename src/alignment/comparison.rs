use crate::config::MatchConfig;

/// Characters ignored at the edges of a token when comparing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunctuationSet {
    chars: Vec<char>,
}

impl PunctuationSet {
    pub fn new(chars: &str) -> Self {
        let mut chars: Vec<char> = chars.chars().collect();
        chars.sort_unstable();
        chars.dedup();
        Self { chars }
    }

    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(&config.punctuation)
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.binary_search(&c).is_ok()
    }

    pub fn strip<'a>(&self, token: &'a str) -> &'a str {
        token.trim_matches(|c| self.contains(c))
    }

    /// True when nothing is left of `token` after stripping.
    pub fn is_only_punctuation(&self, token: &str) -> bool {
        self.strip(token).is_empty()
    }

    /// Case-sensitive equality of both tokens with edge punctuation removed.
    pub fn text_matches(&self, truth: &str, predicted: &str) -> bool {
        self.strip(truth) == self.strip(predicted)
    }
}

impl Default for PunctuationSet {
    fn default() -> Self {
        Self::new(MatchConfig::DEFAULT_PUNCTUATION)
    }
}
