use std::time::Duration;

use tracing::warn;

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(600);

const NEWS_API_URL: &str = "https://newsapi.org/v2/top-headlines?country=us&apiKey=";
const NYT_URL: &str = "https://api.nytimes.com/svc/topstories/v2/home.json?api-key=";
const GUARDIAN_URL: &str = "https://content.guardianapis.com/search?api-key=";

/// API keys for the upstream sources. Missing keys are kept as empty strings;
/// the upstream rejects the request and the fetch fails like any other error.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub news_api_key: String,
    pub nyt_api_key: String,
    pub guardian_api_key: String,
}

impl Credentials {
    /// Reads keys from the process environment; `.env` is loaded by the binary.
    pub fn from_env() -> Self {
        Self {
            news_api_key: env_or_empty("NEWS_API_KEY"),
            nyt_api_key: env_or_empty("NYT_API_KEY"),
            guardian_api_key: env_or_empty("GUARDIAN_API_KEY"),
        }
    }

    pub fn new(news_api_key: String, nyt_api_key: String, guardian_api_key: String) -> Self {
        Self {
            news_api_key,
            nyt_api_key,
            guardian_api_key,
        }
    }
}

fn env_or_empty(key: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| {
        warn!("{key} not set, requests to that source will be sent without a key");
        String::new()
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsSource {
    pub name: String,
    pub url: String,
}

impl NewsSource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// NewsAPI, NYTimes and Guardian, in that order.
pub fn default_sources(credentials: &Credentials) -> Vec<NewsSource> {
    vec![
        NewsSource::new("NewsAPI", format!("{NEWS_API_URL}{}", credentials.news_api_key)),
        NewsSource::new("NYTimes", format!("{NYT_URL}{}", credentials.nyt_api_key)),
        NewsSource::new(
            "Guardian",
            format!("{GUARDIAN_URL}{}", credentials.guardian_api_key),
        ),
    ]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Any failing source fails the whole aggregation.
    #[default]
    AllOrNothing,
    /// A failing source contributes an empty article list.
    Isolated,
}

#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    pub sources: Vec<NewsSource>,
    pub cache_ttl: Duration,
    pub upstream_timeout: Option<Duration>,
    pub failure_policy: FailurePolicy,
}

impl AggregatorConfig {
    pub fn new(sources: Vec<NewsSource>) -> Self {
        Self {
            sources,
            cache_ttl: DEFAULT_CACHE_TTL,
            upstream_timeout: None,
            failure_policy: FailurePolicy::default(),
        }
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_upstream_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.upstream_timeout = timeout;
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sources_order_and_keys() {
        let credentials = Credentials::new("news".into(), "nyt".into(), "guardian".into());
        let sources = default_sources(&credentials);

        let names: Vec<_> = sources.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["NewsAPI", "NYTimes", "Guardian"]);
        assert!(sources[0].url.ends_with("apiKey=news"));
        assert!(sources[1].url.ends_with("api-key=nyt"));
        assert!(sources[2].url.ends_with("api-key=guardian"));
    }

    #[test]
    fn test_missing_key_leaves_empty_parameter() {
        let sources = default_sources(&Credentials::default());
        assert!(sources[0].url.ends_with("apiKey="));
    }
}
