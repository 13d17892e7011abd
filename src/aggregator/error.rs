use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregatorError {
    #[error("Error constructing HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("Request to upstream source '{name}' failed")]
    Upstream {
        name: String,
        #[source]
        source: reqwest::Error,
    },
}
