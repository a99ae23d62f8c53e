// Start of file: /src/api/hello/handler.rs

/*
    * Handler for GET /api/hello.
    * Reads the optional `name` query parameter and responds with a JSON greeting.
*/

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{info, instrument};

use crate::config::state::AppState;
use crate::models::greeting::Greeting;

const DEFAULT_NAME: &str = "World";
const NAME_PARAM: &str = "name";

/// Resolves the `name` parameter from raw query pairs.
/// Repeated values are joined with `,`; an explicit `?name=` stays empty.
/// Only a missing key falls back to "World".
pub fn resolve_name(pairs: &[(String, String)]) -> String {
    let values: Vec<&str> = pairs
        .iter()
        .filter(|(key, _)| key == NAME_PARAM)
        .map(|(_, value)| value.as_str())
        .collect();

    if values.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        values.join(",")
    }
}

#[instrument(skip(state))]
pub async fn hello_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Greeting> {
    info!("Hello endpoint called");

    let name: String = resolve_name(&pairs);
    Json(state.greeting_service.greet(&name))
}


// End of file: /src/api/hello/handler.rs
