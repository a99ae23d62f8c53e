// HTTP API modules and the `/api` route tree

use axum::Router;

use crate::config::state::AppState;

pub mod hello;

/// All API routes, mounted under `/api`
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/api", hello::routes::hello_routes())
}
