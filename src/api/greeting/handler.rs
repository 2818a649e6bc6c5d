// Handlers for the greeting endpoints

use axum::extract::State;
use tracing::{info, instrument};

use crate::config::state::AppState;

/// Fixed body returned by `GET /hello`.
pub const HELLO_TEXT: &str = "Hello, World from Spring Boot!";

/// Fixed body returned by `GET /`.
pub const HOME_TEXT: &str = "Welcome to Spring Boot Hello App!";

/// Root endpoint returning the fixed welcome text
#[instrument(skip(_state))]
pub async fn home_handler(State(_state): State<AppState>) -> &'static str {
    info!("Home endpoint called");

    HOME_TEXT
}

/// Hello endpoint returning the fixed greeting text
#[instrument(skip(_state))]
pub async fn hello_handler(State(_state): State<AppState>) -> &'static str {
    info!("Hello endpoint called");

    HELLO_TEXT
}
