//! tests/global_errors/405.rs
//! Ensures that the greeting route only answers GET.

use reqwest::StatusCode;
use serde_json::Value;

use crate::common;

#[tokio::test]
async fn returns_405_for_post_to_hello() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/api/hello", base_url))
        .body("name=Alice")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(resp.headers()["content-type"], "application/json");

    let body: String = resp.text().await.unwrap();
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "METHOD_NOT_ALLOWED");
    assert_eq!(json["code"], 405);
}
