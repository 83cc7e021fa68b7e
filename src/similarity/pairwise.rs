// All-pairs comparison over a label corpus.
//
// Every unordered pair (i, j) with i < j is scored exactly once, in
// nested-loop order: ascending i, then ascending j. An n-label corpus yields
// n * (n - 1) / 2 results; empty and single-label corpora yield none.

use serde::Serialize;
use tracing::debug;

use super::corpus::VectorizedCorpus;
use super::error::SimilarityError;

/// Similarity score for one unordered pair of labels (`i < j`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityResult {
    pub i: usize,
    pub j: usize,
    /// Cosine similarity in [0.0, 1.0]
    pub score: f64,
}

/// Score every unordered pair of labels in the corpus.
pub fn compare_all<S: AsRef<str>>(
    labels: &[S],
) -> Result<Vec<SimilarityResult>, SimilarityError> {
    VectorizedCorpus::new(labels).pairs()
}

/// Like `compare_all`, for input that may contain missing rows.
///
/// Fails with `InvalidLabel` on the first missing entry before any scoring is
/// done, so a partial result is never produced.
pub fn compare_optional<S: AsRef<str>>(
    labels: &[Option<S>],
) -> Result<Vec<SimilarityResult>, SimilarityError> {
    let present = labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            label
                .as_ref()
                .map(|s| s.as_ref())
                .ok_or(SimilarityError::InvalidLabel { index })
        })
        .collect::<Result<Vec<&str>, _>>()?;

    compare_all(&present)
}

/// Order results by score, highest first.
///
/// The sort is stable, so equal scores keep their (i, j) order.
pub fn rank(mut results: Vec<SimilarityResult>) -> Vec<SimilarityResult> {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    debug!(pairs = results.len(), "Ranked similarity results");
    results
}
