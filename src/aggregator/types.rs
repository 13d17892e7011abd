use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Articles returned by one upstream source, passed through as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceArticles {
    pub source: String,
    pub articles: Vec<Value>,
}

impl SourceArticles {
    pub fn new(source: impl Into<String>, articles: Vec<Value>) -> Self {
        Self {
            source: source.into(),
            articles,
        }
    }

    pub fn empty(source: impl Into<String>) -> Self {
        Self::new(source, Vec::new())
    }
}

/// One entry per configured source, in configuration order.
pub type AggregatedNews = Vec<SourceArticles>;
