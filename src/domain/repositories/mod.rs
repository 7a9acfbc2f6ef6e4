//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the durable store. Implementations live in
//! `crate::infrastructure::persistence`; mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`SequenceAllocator`] - Persisted monotonic counter
//! - [`MappingStore`] - URL mapping storage with uniqueness on both keys
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod mapping_store;
pub mod sequence_allocator;

pub use mapping_store::MappingStore;
pub use sequence_allocator::{COUNTER_ID, SequenceAllocator};

#[cfg(test)]
pub use mapping_store::MockMappingStore;
#[cfg(test)]
pub use sequence_allocator::MockSequenceAllocator;
