//! URL registration and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{MappingStore, SequenceAllocator};
use crate::error::AppError;
use serde_json::json;

/// Upper bound on allocate-and-insert rounds that end in an id collision.
const MAX_INSERT_ATTEMPTS: usize = 5;

/// Service for shortening URLs to sequential ids and resolving them back.
///
/// Holds no state besides the store handles it was built with. Duplicate
/// detection relies on the store rejecting the insert, never on a pre-check.
pub struct ShortenerService {
    allocator: Arc<dyn SequenceAllocator>,
    store: Arc<dyn MappingStore>,
}

impl ShortenerService {
    /// Creates a new shortener service.
    pub fn new(allocator: Arc<dyn SequenceAllocator>, store: Arc<dyn MappingStore>) -> Self {
        Self { allocator, store }
    }

    /// Returns the mapping for `url`, creating one if it does not exist yet.
    ///
    /// `url` must already have passed the validity check.
    ///
    /// # Concurrency
    ///
    /// Concurrent calls for the same URL race on the insert. The loser gets a
    /// conflict, re-reads the winner's mapping and returns it. Its allocated
    /// id is abandoned, which leaves a gap in the sequence.
    ///
    /// # Errors
    ///
    /// Store failures are returned unchanged. Returns [`AppError::Internal`]
    /// if every attempt collided on the short id.
    pub async fn register_or_fetch(&self, url: &str) -> Result<UrlMapping, AppError> {
        if let Some(existing) = self.store.find_by_url(url).await? {
            return Ok(existing);
        }

        for attempt in 1..=MAX_INSERT_ATTEMPTS {
            let short_url = self.allocator.allocate().await?;

            match self.store.insert(NewUrlMapping::new(url, short_url)).await {
                Ok(mapping) => {
                    tracing::info!(short_url, url, "Created short URL");
                    return Ok(mapping);
                }
                Err(e) if e.is_conflict() => {
                    if let Some(existing) = self.store.find_by_url(url).await? {
                        tracing::debug!(
                            abandoned = short_url,
                            short_url = existing.short_url,
                            "URL registered concurrently"
                        );
                        return Ok(existing);
                    }

                    tracing::warn!(short_url, attempt, "Short id already taken, allocating again");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to allocate a unique short URL",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Looks up the mapping for a short id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping has this id.
    /// Store failures are returned unchanged.
    pub async fn resolve(&self, short_url: i64) -> Result<UrlMapping, AppError> {
        self.store
            .find_by_short_id(short_url)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "short_url": short_url }))
            })
    }

    /// Returns the last allocated sequence value.
    pub async fn current_sequence(&self) -> Result<i64, AppError> {
        self.allocator.current().await
    }

    /// Returns the number of stored mappings.
    pub async fn mapping_count(&self) -> Result<i64, AppError> {
        self.store.count().await
    }
}
