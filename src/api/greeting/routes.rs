// Greeting route definitions

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

/// Creates router with the two greeting endpoints
pub fn greeting_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::home_handler))
        .route("/hello", get(handler::hello_handler))
}
