//! Routers: common (health, ready, version) and the books mount point.

mod books;
mod common;
pub use books::books_routes;
pub use common::common_routes_with_ready;

use crate::state::AppState;
use axum::Router;

/// Full application router: common routes at the root, books under `/graphql`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .nest("/graphql", books_routes(state))
}
