// HTTP CSV source: an unauthenticated GET of a published CSV file.
//
// Thin reqwest wrapper: fetch the raw bytes, then hand them to the shared
// record parser so decoding and column selection match the file source.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info};

use super::records::{parse_labels, CsvOptions};
use super::traits::LabelSource;

/// Developer-name sample corpus used when no source is configured.
pub const DEFAULT_CORPUS_URL: &str =
    "https://raw.githubusercontent.com/manhanton/DDE/main/dev_name.csv";

/// Fetches labels from a CSV file served over HTTP.
pub struct HttpCsvSource {
    client: reqwest::Client,
    url: String,
    options: CsvOptions,
}

impl HttpCsvSource {
    pub fn new(url: &str, options: CsvOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("namesake/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_client(client, url, options))
    }

    /// Use an already-configured client (custom proxy or timeout settings).
    pub fn with_client(client: reqwest::Client, url: &str, options: CsvOptions) -> Self {
        Self {
            client,
            url: url.to_string(),
            options,
        }
    }
}

#[async_trait]
impl LabelSource for HttpCsvSource {
    async fn load(&self) -> Result<Vec<String>> {
        debug!(url = %self.url, "Fetching corpus");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("Corpus request failed: {}", self.url))?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("Corpus fetch from {} returned {status}", self.url);
        }

        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read corpus body from {}", self.url))?;

        let labels = parse_labels(&bytes, &self.options)
            .with_context(|| format!("Failed to parse corpus from {}", self.url))?;

        info!(url = %self.url, labels = labels.len(), "Loaded labels over HTTP");
        Ok(labels)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
