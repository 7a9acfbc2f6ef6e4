//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgMappingStore`] - URL mapping storage and lookups
//! - [`PgSequenceAllocator`] - Atomic counter for short ids

pub mod pg_mapping_store;
pub mod pg_sequence_allocator;

pub use pg_mapping_store::PgMappingStore;
pub use pg_sequence_allocator::PgSequenceAllocator;
