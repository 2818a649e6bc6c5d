//! tests/global_errors/405.rs
//! Ensures that using an unsupported method on a defined route
//! returns HTTP 405.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn returns_405_for_post_on_get_route() {
    let base_url: String = common::spawn_app();

    // Only GET is registered for /hello.
    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/hello", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let body: String = resp.text().await.unwrap();
    assert_ne!(body, "Hello, World from Spring Boot!");
}
