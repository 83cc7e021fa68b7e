use std::env;

use anyhow::{Context, Result};

use crate::corpus::{CsvOptions, DEFAULT_CORPUS_URL};

/// Central configuration loaded from environment variables.
///
/// Every value has a default, so `namesake compare` works with no setup.
/// The .env file is loaded automatically at startup via dotenvy, and CLI
/// flags override whatever is set here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Corpus URL used when neither --file nor --url is given
    pub corpus_url: String,
    /// Zero-based CSV column holding the labels
    pub column: usize,
    /// WHATWG encoding label for the corpus bytes
    pub encoding: String,
    /// Noun used in printed lines ("item", "developer", "defect")
    pub item_noun: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_url: DEFAULT_CORPUS_URL.to_string(),
            column: 0,
            encoding: "utf-8".to_string(),
            item_noun: "item".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let column = match env::var("NAMESAKE_COLUMN") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("NAMESAKE_COLUMN must be a column index, got {raw:?}"))?,
            Err(_) => defaults.column,
        };

        Ok(Self {
            corpus_url: env::var("NAMESAKE_CORPUS_URL").unwrap_or(defaults.corpus_url),
            column,
            encoding: env::var("NAMESAKE_ENCODING").unwrap_or(defaults.encoding),
            item_noun: env::var("NAMESAKE_ITEM_NOUN").unwrap_or(defaults.item_noun),
        })
    }

    /// Build CSV ingestion options from this config.
    ///
    /// Fails on an encoding label encoding_rs doesn't recognise.
    pub fn csv_options(&self, has_header: bool) -> Result<CsvOptions> {
        Ok(CsvOptions {
            column: self.column,
            has_header,
            encoding: CsvOptions::encoding_for_label(&self.encoding)?,
            ..CsvOptions::default()
        })
    }
}
