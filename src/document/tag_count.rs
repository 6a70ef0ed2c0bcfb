const CLOSING_TAGS: [&str; 2] = ["</w>", "</pc>"];

/// Counts literal `</w>` and `</pc>` occurrences in a raw document.
///
/// Works on the unparsed text, so it also counts documents that fail to
/// parse as XML. Prefixed forms such as `</tei:w>` are not counted.
pub fn count_closing_tags(text: &str) -> usize {
    CLOSING_TAGS
        .iter()
        .map(|tag| text.matches(tag).count())
        .sum()
}
