// Local CSV file source.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

use super::records::{parse_labels, CsvOptions};
use super::traits::LabelSource;

/// Reads labels from a delimited text file on disk.
pub struct CsvFileSource {
    path: PathBuf,
    options: CsvOptions,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>, options: CsvOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }
}

#[async_trait]
impl LabelSource for CsvFileSource {
    async fn load(&self) -> Result<Vec<String>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read corpus file {}", self.path.display()))?;

        let labels = parse_labels(&bytes, &self.options)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        info!(
            path = %self.path.display(),
            labels = labels.len(),
            "Loaded labels from file"
        );
        Ok(labels)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
