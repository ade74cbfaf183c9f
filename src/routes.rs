//! Router assembly: API surface plus static front-end fallback.

use crate::handlers::{chats, users};
use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

async fn greeting() -> &'static str {
    "Hello from API!"
}

/// The `/api` routes: greeting plus user and chat CRUD.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api", get(greeting))
        .route("/api/users", get(users::list).post(users::create))
        .route(
            "/api/users/:id",
            get(users::read).put(users::update).delete(users::delete),
        )
        .route("/api/chats", get(chats::list).post(chats::create))
        .route("/api/chats/:id", put(chats::update).delete(chats::delete))
        .with_state(state)
}

/// Full application: API routes with request tracing, and every unmatched
/// path served from the front-end asset directory. Paths with no matching
/// file fall back to `index.html` so client-side routes resolve.
pub fn app(state: AppState, assets_dir: &Path) -> Router {
    let assets = ServeDir::new(assets_dir).fallback(ServeFile::new(assets_dir.join("index.html")));
    api_routes(state)
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}
