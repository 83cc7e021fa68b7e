// Cosine similarity between two term-count vectors.
//
//   dot(a, b) / (|a| * |b|)
//
// Count vectors are non-negative, so the score lands in [0, 1]. A vector with
// no magnitude (a label with no tokens) scores 0.0 against anything.

use super::error::SimilarityError;

/// Cosine similarity of two equal-length count vectors.
///
/// Returns `DimensionMismatch` when the lengths differ; vectors built against
/// the same vocabulary never do.
pub fn cosine_similarity(a: &[u32], b: &[u32]) -> Result<f64, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let dot: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| f64::from(x) * f64::from(y))
        .sum();
    let sq_a = squared_norm(a);
    let sq_b = squared_norm(b);

    if sq_a == 0.0 || sq_b == 0.0 {
        return Ok(0.0);
    }

    // One sqrt of the product keeps identical vectors at exactly 1.0
    Ok((dot / (sq_a * sq_b).sqrt()).clamp(0.0, 1.0))
}

fn squared_norm(v: &[u32]) -> f64 {
    v.iter().map(|&x| f64::from(x).powi(2)).sum()
}
