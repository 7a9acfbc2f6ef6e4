//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlMapping;
use crate::utils::url_validator::validate_url;

/// Error text returned when the submitted URL fails validation.
pub const INVALID_URL: &str = "Invalid URL";

/// Form-encoded request to shorten a URL.
///
/// A missing `url` field deserializes to an empty string and fails validation.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenForm {
    #[serde(default)]
    #[validate(custom(function = "validate_url"))]
    pub url: String,
}

/// Result of a shortening request.
///
/// An invalid URL is a normal response, not an HTTP error.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ShortenResponse {
    Created { original_url: String, short_url: i64 },
    Invalid { error: &'static str },
}

impl ShortenResponse {
    pub fn invalid_url() -> Self {
        Self::Invalid { error: INVALID_URL }
    }
}

impl From<UrlMapping> for ShortenResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self::Created {
            original_url: mapping.original_url,
            short_url: mapping.short_url,
        }
    }
}
