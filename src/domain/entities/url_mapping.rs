//! URL mapping entity.

use chrono::{DateTime, Utc};

/// A shortened URL: the original URL and the sequential id it was given.
///
/// Both `original_url` and `short_url` are unique across all mappings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub original_url: String,
    pub short_url: i64,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(original_url: String, short_url: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            original_url,
            short_url,
            created_at,
        }
    }
}

/// Input data for storing a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub original_url: String,
    pub short_url: i64,
}

impl NewUrlMapping {
    pub fn new(original_url: impl Into<String>, short_url: i64) -> Self {
        Self {
            original_url: original_url.into(),
            short_url,
        }
    }
}
