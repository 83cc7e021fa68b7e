// Shared vocabulary: the axis mapping every term vector is built against.
//
// Terms are held in first-seen order across the corpus. A Vocabulary has no
// mutating methods once built, so vectors produced from it stay aligned.

use std::collections::HashMap;

/// Ordered set of distinct tokens observed across a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Union every token of every sequence into one ordered vocabulary.
    pub fn build<S: AsRef<[String]>>(token_sequences: &[S]) -> Self {
        let mut terms = Vec::new();
        let mut index = HashMap::new();

        for tokens in token_sequences {
            for token in tokens.as_ref() {
                if !index.contains_key(token) {
                    index.insert(token.clone(), terms.len());
                    terms.push(token.clone());
                }
            }
        }

        Self { terms, index }
    }

    /// Number of axes (distinct terms).
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Axis position of a term, if it was seen in the corpus.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Terms in axis order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.terms.iter()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
