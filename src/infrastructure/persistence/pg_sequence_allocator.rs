//! PostgreSQL implementation of the sequence allocator.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::{COUNTER_ID, SequenceAllocator};
use crate::error::AppError;

/// Counter stored as a single row of the `counters` table.
///
/// Allocation is one `INSERT ... ON CONFLICT DO UPDATE` statement. PostgreSQL
/// takes a row lock for the update, so concurrent callers are serialized on
/// the counter row and the create-if-absent path cannot hand out `1` twice.
pub struct PgSequenceAllocator {
    pool: Arc<PgPool>,
    counter_id: String,
}

impl PgSequenceAllocator {
    /// Creates an allocator for the default `counterid` counter.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self::with_counter_id(pool, COUNTER_ID)
    }

    /// Creates an allocator for a named counter.
    pub fn with_counter_id(pool: Arc<PgPool>, counter_id: impl Into<String>) -> Self {
        Self {
            pool,
            counter_id: counter_id.into(),
        }
    }
}

#[async_trait]
impl SequenceAllocator for PgSequenceAllocator {
    async fn allocate(&self) -> Result<i64, AppError> {
        let value: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO counters (id, sequence_value)
            VALUES ($1, 1)
            ON CONFLICT (id)
            DO UPDATE SET sequence_value = counters.sequence_value + 1
            RETURNING sequence_value
            "#,
        )
        .bind(&self.counter_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        tracing::debug!(counter = %self.counter_id, value, "Allocated sequence value");

        Ok(value)
    }

    async fn current(&self) -> Result<i64, AppError> {
        let value: Option<i64> =
            sqlx::query_scalar("SELECT sequence_value FROM counters WHERE id = $1")
                .bind(&self.counter_id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(value.unwrap_or(0))
    }
}
