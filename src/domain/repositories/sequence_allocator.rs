//! Repository trait for the short id sequence.

use crate::error::AppError;
use async_trait::async_trait;

/// Logical key of the single counter record.
pub const COUNTER_ID: &str = "counterid";

/// Source of unique, increasing short ids.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSequenceAllocator`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SequenceAllocator: Send + Sync {
    /// Increments the counter and returns the new value.
    ///
    /// The first call ever made creates the counter and returns `1`. Every
    /// call returns a value strictly greater than all values returned before,
    /// including under concurrent calls.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] when the
    /// store fails. Callers must not retry internally.
    async fn allocate(&self) -> Result<i64, AppError>;

    /// Returns the last allocated value without changing it.
    ///
    /// Returns `0` if nothing has been allocated yet.
    async fn current(&self) -> Result<i64, AppError>;
}
