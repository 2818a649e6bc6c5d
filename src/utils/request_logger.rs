// Request logging middleware: records timing for each request and logs
// method, path, status, and latency once the inner service has run.

use std::convert::Infallible;
use std::time::Instant;
use axum::{
    body::Body,
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use tracing::info;

pub async fn request_logger(
    req: Request<Body>,
    next: Next,
) -> Result<Response, Infallible> {
    let method: Method = req.method().clone();
    let path: String = req.uri().path().to_owned();
    let start: Instant = Instant::now();

    // Pass the request down the chain
    let response: Response = next.run(req).await;

    info!(
        "{} {} -> {} in {:?}",
        method,
        path,
        response.status(),
        start.elapsed()
    );

    Ok(response)
}
