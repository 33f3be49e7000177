//! The query mount point: `/graphql/books` and the contract document.

use crate::handlers::books::{get_books, post_books};
use crate::openapi::ApiDoc;
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use tower_http::limit::RequestBodyLimitLayer;
use utoipa::OpenApi;

/// Request bodies are a handful of ids and a search string.
const MAX_BODY_BYTES: usize = 64 * 1024;

async fn schema() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET/POST /books and GET /schema; nest under `/graphql`.
pub fn books_routes(state: AppState) -> Router {
    Router::new()
        .route("/books", get(get_books).post(post_books))
        .route("/schema", get(schema))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}
