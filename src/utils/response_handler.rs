// Uniform JSON envelope for error responses
// Successful responses pass through untouched; everything else is wrapped in ResponseFormat

use axum::{
    body::{Body, Bytes},
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        HeaderValue, Request, Response, StatusCode,
        response::Parts,
    },
    middleware::Next,
};
use chrono::Utc;
use http_body_util::BodyExt;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::convert::Infallible;
use tracing::{debug, error, warn};

/// JSON envelope for non-success responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseFormat {
    pub status: String,          // HTTP status text (e.g. "NOT_FOUND")
    pub code: u16,               // HTTP status code
    pub data: Value,             // JSON payload of the original body, if any
    pub messages: Vec<String>,   // Plain-text payload of the original body, if any
    pub date: String,            // ISO timestamp
}

/// "Not Found" -> "NOT_FOUND"
fn format_status(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN STATUS")
        .to_uppercase()
        .replace(' ', "_")
}

/// Splits the original body into envelope `data` and `messages`
fn split_body(raw: &[u8]) -> (Value, Vec<String>) {
    if raw.is_empty() {
        return (Value::Null, Vec::new());
    }

    match serde_json::from_slice::<Value>(raw) {
        Ok(json) => (json, Vec::new()),
        Err(_) => (Value::Null, vec![String::from_utf8_lossy(raw).trim().to_string()]),
    }
}

/// Logs the envelope as two-space-indented JSON
fn log_formatted_response(wrapped: &ResponseFormat) {
    match serde_json::to_string_pretty(wrapped) {
        Ok(spaced_json) => warn!("\nError response:\n{}", spaced_json),
        Err(err) => error!("Failed to format response JSON: {:?}", err),
    }
}

fn build_final_response(mut parts: Parts, wrapped: &ResponseFormat) -> Response<Body> {
    let json_body: Vec<u8> = match serde_json::to_vec(wrapped) {
        Ok(body) => body,
        Err(err) => {
            error!("Failed to serialize wrapped response: {err}");
            parts.status = StatusCode::INTERNAL_SERVER_ERROR;
            b"{}".to_vec()
        }
    };

    parts.headers.remove(CONTENT_LENGTH);
    parts.headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Response::from_parts(parts, Body::from(json_body))
}

/// Middleware that wraps every non-2xx response in the ResponseFormat structure
pub async fn response_wrapper(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, Infallible> {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response: Response<Body> = next.run(req).await;

    if response.status().is_success() {
        debug!(%method, %uri, status = %response.status(), "Request completed");
        return Ok(response);
    }

    let (parts, body) = response.into_parts();

    let raw_bytes: Bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) => {
            error!("Failed to collect response body: {err}");
            Bytes::new()
        }
    };

    let (data, messages) = split_body(&raw_bytes);

    let wrapped: ResponseFormat = ResponseFormat {
        status: format_status(parts.status),
        code: parts.status.as_u16(),
        data,
        messages,
        date: Utc::now().to_rfc3339(),
    };

    warn!(%method, %uri, status = %parts.status, "Request failed");
    log_formatted_response(&wrapped);

    Ok(build_final_response(parts, &wrapped))
}
