pub mod client;
pub mod config;
pub mod error;
pub mod normalize;
pub mod types;

use std::sync::Arc;

use futures::future::{join_all, try_join_all};
use moka::future::Cache;
use tracing::{debug, info, warn};

use crate::aggregator::{client::UpstreamClient, error::AggregatorError};

pub use config::{
    default_sources, AggregatorConfig, Credentials, FailurePolicy, NewsSource, DEFAULT_CACHE_TTL,
};
pub use types::{AggregatedNews, SourceArticles};

/// Cache key for the combined result. There is exactly one.
pub const AGGREGATED_NEWS_KEY: &str = "aggregatedNews";

/// Fans out to every configured source and caches the combined result.
///
/// Concurrent callers that miss the cache share a single fan-out: the first
/// caller runs it, the others wait for its outcome. A failed fan-out is not
/// cached.
#[derive(Clone)]
pub struct Aggregator {
    client: UpstreamClient,
    sources: Arc<Vec<NewsSource>>,
    failure_policy: FailurePolicy,
    cache: Cache<&'static str, Arc<AggregatedNews>>,
}

impl Aggregator {
    pub fn new(config: AggregatorConfig) -> Result<Self, AggregatorError> {
        let client = UpstreamClient::new(config.upstream_timeout)?;
        let cache = Cache::builder().time_to_live(config.cache_ttl).build();

        info!(
            "aggregating {} sources, cache ttl {:?}, policy {:?}",
            config.sources.len(),
            config.cache_ttl,
            config.failure_policy
        );

        Ok(Self {
            client,
            sources: Arc::new(config.sources),
            failure_policy: config.failure_policy,
            cache,
        })
    }

    pub async fn fetch_aggregated(&self) -> Result<Arc<AggregatedNews>, Arc<AggregatorError>> {
        self.cache
            .try_get_with(AGGREGATED_NEWS_KEY, async {
                debug!("aggregated news not cached, fetching from upstream");
                self.fan_out().await.map(Arc::new)
            })
            .await
    }

    async fn fan_out(&self) -> Result<AggregatedNews, AggregatorError> {
        let requests = self.sources.iter().map(|source| self.client.fetch(source));

        match self.failure_policy {
            FailurePolicy::AllOrNothing => try_join_all(requests).await,
            FailurePolicy::Isolated => {
                let responses = join_all(requests).await;
                Ok(responses
                    .into_iter()
                    .zip(self.sources.iter())
                    .map(|(response, source)| {
                        response.unwrap_or_else(|e| {
                            warn!("dropping {} from aggregation: {:?}", source.name, e);
                            SourceArticles::empty(source.name.clone())
                        })
                    })
                    .collect())
            }
        }
    }
}
