//! Handler for the URL shortening endpoint.

use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenForm, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the short id for a URL, registering it on first use.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// `application/x-www-form-urlencoded` with a single field:
///
/// ```text
/// url=https%3A%2F%2Fexample.com
/// ```
///
/// # Response
///
/// ```json
/// { "original_url": "https://example.com", "short_url": 1 }
/// ```
///
/// Submitting the same URL again returns the same `short_url`. A URL that
/// fails validation yields `200 OK` with `{ "error": "Invalid URL" }`, as
/// does a request without a form body.
///
/// # Errors
///
/// Returns 503 or 500 if the database fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Ok(Form(form)) = form else {
        tracing::debug!("Rejected request without a form body");
        return Ok(Json(ShortenResponse::invalid_url()));
    };

    if form.validate().is_err() {
        tracing::debug!(url = %form.url, "Rejected invalid URL");
        return Ok(Json(ShortenResponse::invalid_url()));
    }

    let mapping = state.shortener.register_or_fetch(&form.url).await?;

    Ok(Json(mapping.into()))
}
