// Global error handling for HTTP middleware layers

use axum::{
    BoxError,
    http::StatusCode,
    response::IntoResponse,
};
use std::error::Error;
use tracing::warn;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
// Axum uses http_body_util for length-limiting
use http_body_util::LengthLimitError;

/// Maps errors raised by the middleware stack to HTTP responses.
/// The plain-text body is moved into `messages` by `response_wrapper`.
pub async fn handle_global_error(err: BoxError) -> impl IntoResponse {
    let (status, message) = classify_error(&err);
    warn!(%status, "Middleware error: {}", err);
    (status, message)
}

fn classify_error(err: &BoxError) -> (StatusCode, String) {
    // 413 if the body was too large
    if let Some(e) = find_cause::<LengthLimitError>(&**err) {
        return (StatusCode::PAYLOAD_TOO_LARGE, format!("Request body too large: {}", e));
    }

    // 408 if the request took too long
    if let Some(e) = err.downcast_ref::<Elapsed>() {
        return (StatusCode::REQUEST_TIMEOUT, format!("Request timeout: {}", e));
    }

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Unhandled internal error: {}", err),
    )
}

/// Finds an error of type `T` in the error itself or anywhere in its source chain
pub fn find_cause<'a, T: Error + 'static>(err: &'a (dyn Error + 'static)) -> Option<&'a T> {
    let mut current: Option<&'a (dyn Error + 'static)> = Some(err);

    while let Some(e) = current {
        if let Some(typed) = e.downcast_ref::<T>() {
            return Some(typed);
        }
        current = e.source();
    }

    None
}
