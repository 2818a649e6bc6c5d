//! tests/greeting/concurrency.rs
//! Ensures concurrent requests see no cross-request interference.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn concurrent_hello_requests_all_return_identical_responses() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = reqwest::Client::new();

    // Fire 100 concurrent requests against /hello.
    let mut handles: Vec<tokio::task::JoinHandle<(StatusCode, String)>> = Vec::new();

    for _ in 0..100 {
        let client: reqwest::Client = client.clone();
        let url: String = format!("{}/hello", base_url);

        handles.push(tokio::spawn(async move {
            let resp: reqwest::Response = client
                .get(&url)
                .send()
                .await
                .expect("Failed to execute request.");

            let status: StatusCode = resp.status();
            let body: String = resp.text().await.unwrap();

            (status, body)
        }));
    }

    // Every response must be identical, no state accumulation between them.
    for handle in handles {
        let (status, body) = handle.await.expect("Request task panicked.");

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Hello, World from Spring Boot!");
    }
}
