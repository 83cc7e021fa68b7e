// JSON report: machine-readable dump of one comparison run.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::similarity::SimilarityResult;

#[derive(Debug, Serialize)]
pub struct SimilarityReport<'a> {
    pub generated_at: DateTime<Utc>,
    /// Where the labels came from (path or URL)
    pub source: String,
    pub labels: &'a [String],
    pub vocabulary_size: usize,
    pub results: &'a [SimilarityResult],
}

impl<'a> SimilarityReport<'a> {
    pub fn new(
        source: String,
        labels: &'a [String],
        vocabulary_size: usize,
        results: &'a [SimilarityResult],
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            source,
            labels,
            vocabulary_size,
            results,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
