use std::path::Path;

use axum::{handler::HandlerWithoutStateExt, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::api::{handlers, state::AppState};

/// API routes with a JSON 404 for everything else.
pub fn router(state: AppState) -> Router {
    api_routes()
        .fallback(handlers::route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Like [`router`], but paths outside the API are first looked up in
/// `public_dir` (so `/` serves its `index.html`).
pub fn router_with_assets(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    let assets = ServeDir::new(public_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(handlers::route_not_found.into_service());

    api_routes()
        .fallback_service(assets)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

// Static segments take precedence over `{id}`, so /external and /paginate
// never reach the id handlers.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/news",
            get(handlers::list_articles)
                .post(handlers::create_article)
                .fallback(handlers::route_not_found),
        )
        .route(
            "/api/news/external",
            get(handlers::external_news).fallback(handlers::route_not_found),
        )
        .route(
            "/api/news/paginate",
            get(handlers::paginate_articles).fallback(handlers::route_not_found),
        )
        .route(
            "/api/news/{id}",
            get(handlers::get_article)
                .put(handlers::update_article)
                .delete(handlers::delete_article)
                .fallback(handlers::route_not_found),
        )
}
