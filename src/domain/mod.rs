//! Domain layer containing business entities and storage contracts.
//!
//! This module is independent of the HTTP layer and of PostgreSQL. It defines
//! the mapping entity and the two storage traits the shortener is built on.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
