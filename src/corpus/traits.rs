// Label source trait: where a corpus comes from.
//
// The similarity core only ever sees a list of strings. Whether those came
// from a local file, a URL or a test fixture is decided by the caller, which
// picks a LabelSource and hands its output to the comparator.

use anyhow::Result;
use async_trait::async_trait;

/// Trait for loading a corpus of raw labels.
#[async_trait]
pub trait LabelSource: Send + Sync {
    /// Load every label in corpus order.
    async fn load(&self) -> Result<Vec<String>>;

    /// Short human-readable description of where labels come from.
    fn describe(&self) -> String;
}

/// A fixed in-memory corpus.
pub struct StaticSource {
    labels: Vec<String>,
}

impl StaticSource {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl LabelSource for StaticSource {
    async fn load(&self) -> Result<Vec<String>> {
        Ok(self.labels.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory labels", self.labels.len())
    }
}
