// Term-frequency vectorization against a shared vocabulary.

use std::collections::HashMap;

use super::vocabulary::Vocabulary;

/// Count vector with one entry per vocabulary term, in vocabulary order.
pub type TermVector = Vec<u32>;

/// Project a token sequence onto the vocabulary as term counts.
///
/// Counts tokens once into a frequency map, then reads the map in axis
/// order, so the cost is linear in tokens plus vocabulary size. Tokens the
/// vocabulary does not contain are ignored.
pub fn vectorize(tokens: &[String], vocabulary: &Vocabulary) -> TermVector {
    let mut counts: HashMap<&str, u32> = HashMap::with_capacity(tokens.len());
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    vocabulary
        .iter()
        .map(|term| counts.get(term.as_str()).copied().unwrap_or(0))
        .collect()
}
