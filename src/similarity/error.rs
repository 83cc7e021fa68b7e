// Error conditions raised by the similarity core.
//
// Degenerate input (empty labels, empty corpora, zero vectors) is not an
// error; those cases have defined results. Only a missing label and a vector
// length mismatch are reported.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimilarityError {
    /// A label slot held no text (a missing or null row).
    #[error("invalid label at index {index}: no text present")]
    InvalidLabel { index: usize },

    /// Two vectors built against different vocabularies were compared.
    #[error("vector dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
}
