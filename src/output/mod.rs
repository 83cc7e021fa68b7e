// Output formatting: terminal display and JSON reports.

pub mod json;
pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Counts characters rather than bytes, so multi-byte labels (Thai names,
/// accented letters) never split mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// One line of the plain similarity listing.
///
/// Indices are shown 1-based, scores to two decimal places:
/// `Similarity between item 1 and item 2: 0.80`.
pub fn similarity_line(noun: &str, i: usize, j: usize, score: f64) -> String {
    format!("Similarity between {noun} {} and {noun} {}: {score:.2}", i + 1, j + 1)
}
