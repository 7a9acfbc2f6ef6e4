//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{shorturl}`
///
/// # Response
///
/// `302 Found` with `Location` set to the original URL.
///
/// # Errors
///
/// Returns 404 Not Found if the id is unknown or is not a positive integer.
/// Returns 503 or 500 if the database fails.
pub async fn redirect_handler(
    Path(shorturl): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let short_url = parse_short_id(&shorturl)?;

    let mapping = state.shortener.resolve(short_url).await?;

    tracing::debug!(short_url, target = %mapping.original_url, "Redirecting");

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, mapping.original_url)],
    ))
}

/// Parses the path segment into a short id.
///
/// Ids are positive, so anything else cannot match a mapping.
fn parse_short_id(segment: &str) -> Result<i64, AppError> {
    segment
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "short_url": segment })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_id() {
        assert_eq!(parse_short_id("1").unwrap(), 1);
        assert_eq!(parse_short_id("42").unwrap(), 42);
    }

    #[test]
    fn test_parse_short_id_rejects_non_positive_and_garbage() {
        for segment in ["0", "-3", "abc", "1.5", "", "99999999999999999999"] {
            assert!(
                matches!(parse_short_id(segment), Err(AppError::NotFound { .. })),
                "segment {segment:?} should be rejected"
            );
        }
    }
}
