use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::info;

use crate::{
    aggregator::AggregatedNews,
    api::{
        body::decode_or_default,
        params::{parse_id, PageQuery},
        state::AppState,
    },
    error::RestError,
    store::{error::StoreError, Article, ArticlePatch, NewArticle, Page},
};

pub async fn list_articles(State(state): State<AppState>) -> Json<Vec<Article>> {
    let store = state.store.lock().await;
    Json(store.list().to_vec())
}

pub async fn get_article(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Article>, RestError> {
    let store = state.store.lock().await;
    let article = parse_id(&id)
        .and_then(|id| store.get(id))
        .cloned()
        .ok_or(StoreError::NotFound)?;

    Ok(Json(article))
}

pub async fn create_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, RestError> {
    let new: NewArticle = decode_or_default(&headers, &body)?;
    let article = state.store.lock().await.create(new)?;

    info!("Created article {}", article.id);
    Ok((StatusCode::CREATED, Json(article)))
}

pub async fn update_article(
    Path(id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Article>, RestError> {
    let id = parse_id(&id).ok_or(StoreError::NotFound)?;
    let mut store = state.store.lock().await;
    // An unknown id wins over a malformed body.
    if store.get(id).is_none() {
        return Err(StoreError::NotFound.into());
    }

    let patch: ArticlePatch = decode_or_default(&headers, &body)?;
    let article = store.update(id, patch)?;

    Ok(Json(article))
}

pub async fn delete_article(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    if let Some(id) = parse_id(&id) {
        state.store.lock().await.delete(id);
    }

    Json(json!({"message": "Deleted successfully"}))
}

pub async fn external_news(
    State(state): State<AppState>,
) -> Result<Json<AggregatedNews>, RestError> {
    let news = state.aggregator.fetch_aggregated().await?;
    Ok(Json(Vec::clone(&news)))
}

pub async fn paginate_articles(
    Query(query): Query<PageQuery>,
    State(state): State<AppState>,
) -> Json<Page> {
    let (page, limit) = query.resolve();
    let store = state.store.lock().await;

    Json(store.paginate(page, limit))
}

pub async fn route_not_found() -> RestError {
    RestError::RouteNotFound
}
