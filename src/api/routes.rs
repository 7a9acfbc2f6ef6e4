//! API route configuration.

use crate::api::handlers::{hello_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /hello`               - Greeting
/// - `POST /shorturl`            - Register or fetch a short URL (form field `url`)
/// - `GET  /shorturl/{shorturl}` - Redirect to the original URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello_handler))
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/{shorturl}", get(redirect_handler))
}
