use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::aggregator::{
    config::NewsSource, error::AggregatorError, normalize::extract_articles,
    types::SourceArticles,
};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
}

impl UpstreamClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self, AggregatorError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(AggregatorError::Client)?;
        Ok(Self { client })
    }

    pub async fn fetch(&self, source: &NewsSource) -> Result<SourceArticles, AggregatorError> {
        debug!("fetching articles from {}", source.name);

        // URLs carry API keys; keep them out of error messages.
        let upstream = |e: reqwest::Error| AggregatorError::Upstream {
            name: source.name.clone(),
            source: e.without_url(),
        };

        let response = self
            .client
            .get(&source.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(upstream)?;
        let bytes = response.bytes().await.map_err(upstream)?;

        let articles = match serde_json::from_slice::<Value>(&bytes) {
            Ok(payload) => extract_articles(payload),
            Err(e) => {
                warn!("{} returned a non-JSON body: {}", source.name, e);
                Vec::new()
            }
        };

        debug!("{} returned {} articles", source.name, articles.len());
        Ok(SourceArticles::new(source.name.clone(), articles))
    }
}
