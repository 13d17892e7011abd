use std::{error::Error, sync::Arc};

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

use crate::{aggregator::error::AggregatorError, store::error::StoreError};

#[derive(Debug, Error)]
pub enum RestError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Invalid request body")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Error fetching news")]
    Aggregation(#[from] Arc<AggregatorError>),

    #[error("Route not found")]
    RouteNotFound,
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = match &self {
            RestError::Store(StoreError::MissingFields) => StatusCode::BAD_REQUEST,
            RestError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            RestError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RestError::Aggregation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RestError::RouteNotFound => StatusCode::NOT_FOUND,
        };

        match &self {
            RestError::Aggregation(e) => {
                error!("Error fetching external news: {}: {:?}", e, e.source())
            }
            other => debug!("{}: {:?}", other, other.source()),
        }

        let payload = Json(json!({"error": self.to_string()}));

        (status, payload).into_response()
    }
}
