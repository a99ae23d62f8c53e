//! tests/global_errors/404.rs
//! Ensures that hitting an unknown route returns an enveloped HTTP 404.

use reqwest::StatusCode;
use serde_json::Value;

use crate::common;

#[tokio::test]
async fn returns_404_for_nonexistent_route() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/does-not-exist", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(resp.headers()["content-type"], "application/json");

    let body: String = resp.text().await.unwrap();
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(json["status"], "NOT_FOUND");
    assert_eq!(json["code"], 404);
    assert_eq!(json["data"], Value::Null);
    assert_eq!(json["messages"][0], "The requested route does not exist");
    assert!(json["date"].is_string());
}

#[tokio::test]
async fn returns_404_for_hello_outside_api_prefix() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/hello", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
