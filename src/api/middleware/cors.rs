//! Cross-origin resource sharing policy.

use tower_http::cors::{Any, CorsLayer};

/// Allows any origin, method, and header.
///
/// The shortener has no credentials or sessions, so browser clients on other
/// origins may call it freely.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
