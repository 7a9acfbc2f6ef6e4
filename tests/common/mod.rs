#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use seq_shortener::api::routes::api_routes;
use seq_shortener::application::services::ShortenerService;
use seq_shortener::domain::entities::{NewUrlMapping, UrlMapping};
use seq_shortener::domain::repositories::{MappingStore, SequenceAllocator};
use seq_shortener::error::AppError;
use seq_shortener::infrastructure::persistence::{PgMappingStore, PgSequenceAllocator};
use seq_shortener::state::AppState;
use serde_json::json;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

/// In-memory counter with the same contract as the PostgreSQL allocator.
#[derive(Default)]
pub struct MemorySequence {
    value: AtomicI64,
    fail: AtomicBool,
}

impl MemorySequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following call fail as if the database were down.
    pub fn set_unavailable(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl SequenceAllocator for MemorySequence {
    async fn allocate(&self) -> Result<i64, AppError> {
        tokio::task::yield_now().await;
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::unavailable("Database unavailable", json!({})));
        }
        Ok(self.value.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn current(&self) -> Result<i64, AppError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::unavailable("Database unavailable", json!({})));
        }
        Ok(self.value.load(Ordering::SeqCst))
    }
}

#[derive(Default)]
struct Tables {
    by_id: HashMap<i64, UrlMapping>,
    by_url: HashMap<String, i64>,
}

/// In-memory mapping store enforcing uniqueness on both keys.
///
/// Every call yields to the scheduler first so concurrent requests
/// interleave between store calls.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<UrlMapping> {
        let tables = self.tables.lock().unwrap();
        let mut mappings: Vec<_> = tables.by_id.values().cloned().collect();
        mappings.sort_by_key(|m| m.short_url);
        mappings
    }

    pub fn preload(&self, url: &str, short_url: i64) {
        let mut tables = self.tables.lock().unwrap();
        tables.by_url.insert(url.to_string(), short_url);
        tables
            .by_id
            .insert(short_url, UrlMapping::new(url.to_string(), short_url, Utc::now()));
    }
}

#[async_trait]
impl MappingStore for MemoryStore {
    async fn find_by_url(&self, original_url: &str) -> Result<Option<UrlMapping>, AppError> {
        tokio::task::yield_now().await;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .by_url
            .get(original_url)
            .and_then(|id| tables.by_id.get(id))
            .cloned())
    }

    async fn find_by_short_id(&self, short_url: i64) -> Result<Option<UrlMapping>, AppError> {
        tokio::task::yield_now().await;
        Ok(self.tables.lock().unwrap().by_id.get(&short_url).cloned())
    }

    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        tokio::task::yield_now().await;
        let mut tables = self.tables.lock().unwrap();

        if tables.by_url.contains_key(&new_mapping.original_url)
            || tables.by_id.contains_key(&new_mapping.short_url)
        {
            return Err(AppError::conflict("Unique constraint violation", json!({})));
        }

        let mapping = UrlMapping::new(new_mapping.original_url, new_mapping.short_url, Utc::now());
        tables
            .by_url
            .insert(mapping.original_url.clone(), mapping.short_url);
        tables.by_id.insert(mapping.short_url, mapping.clone());

        Ok(mapping)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables.lock().unwrap().by_id.len() as i64)
    }
}

/// Shortener backed by in-memory doubles, plus handles to inspect them.
pub struct MemoryShortener {
    pub service: Arc<ShortenerService>,
    pub sequence: Arc<MemorySequence>,
    pub store: Arc<MemoryStore>,
}

pub fn create_memory_shortener() -> MemoryShortener {
    let sequence = Arc::new(MemorySequence::new());
    let store = Arc::new(MemoryStore::new());
    let service = Arc::new(ShortenerService::new(sequence.clone(), store.clone()));

    MemoryShortener {
        service,
        sequence,
        store,
    }
}

/// API router over in-memory doubles.
pub fn create_memory_app() -> (Router, MemoryShortener) {
    let shortener = create_memory_shortener();
    let app = Router::new()
        .nest("/api", api_routes())
        .with_state(AppState::new(shortener.service.clone()));

    (app, shortener)
}

pub fn create_pg_shortener(pool: PgPool) -> ShortenerService {
    let pool = Arc::new(pool);
    ShortenerService::new(
        Arc::new(PgSequenceAllocator::new(pool.clone())),
        Arc::new(PgMappingStore::new(pool)),
    )
}

pub async fn insert_test_mapping(pool: &PgPool, url: &str, short_url: i64) {
    sqlx::query("INSERT INTO short_urls (original_url, short_url) VALUES ($1, $2)")
        .bind(url)
        .bind(short_url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn set_counter(pool: &PgPool, value: i64) {
    sqlx::query(
        "INSERT INTO counters (id, sequence_value) VALUES ('counterid', $1)
         ON CONFLICT (id) DO UPDATE SET sequence_value = EXCLUDED.sequence_value",
    )
    .bind(value)
    .execute(pool)
    .await
    .unwrap();
}
