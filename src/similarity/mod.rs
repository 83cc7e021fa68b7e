// Lexical similarity: bag-of-words vectors and pairwise cosine scoring.
//
// The pipeline runs leaf-first: normalize each label into tokens, build one
// shared vocabulary over the whole corpus, project every label onto that
// vocabulary as a term-frequency vector, then score every unordered pair.

pub mod corpus;
pub mod cosine;
pub mod error;
pub mod normalize;
pub mod pairwise;
pub mod vectorize;
pub mod vocabulary;

pub use corpus::VectorizedCorpus;
pub use cosine::cosine_similarity;
pub use error::SimilarityError;
pub use normalize::normalize;
pub use pairwise::{compare_all, compare_optional, rank, SimilarityResult};
pub use vectorize::{vectorize, TermVector};
pub use vocabulary::Vocabulary;
