// Namesake: near-duplicate detection for short text labels
//
// This is the library root. `similarity` is the pure scoring core; `corpus`
// loads labels for it and `output` presents what it produces.

pub mod config;
pub mod corpus;
pub mod output;
pub mod similarity;
