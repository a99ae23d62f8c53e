// Start of file: /src/api/hello/routes.rs

/*
    * Registers GET /hello, which calls `hello_handler`.
    * Mounted under `/api` by `api::api_routes`.
*/

use axum::{routing::get, Router};

use crate::api::hello::handler::hello_handler;
use crate::config::state::AppState;

pub fn hello_routes() -> Router<AppState> {
    Router::new().route("/hello", get(hello_handler))
}

// End of file: /src/api/hello/routes.rs
