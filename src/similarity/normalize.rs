// Label normalization: lower-case, strip punctuation, split on whitespace.
//
// Punctuation is deleted, not replaced with a space, so "o'brien" becomes the
// single token "obrien". Downstream scores depend on this merging behavior.

/// Lower-case a raw label, delete ASCII punctuation and split it into tokens.
///
/// Any input is accepted. Empty or punctuation-only labels yield no tokens.
pub fn normalize(raw: &str) -> Vec<String> {
    let cleaned: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Re-join a token sequence into a single space-separated label.
pub fn join_tokens(tokens: &[String]) -> String {
    tokens.join(" ")
}
