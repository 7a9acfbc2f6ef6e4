//! Application layer services implementing business logic.
//!
//! Services orchestrate domain operations by coordinating repository calls.
//! They consume repository traits and provide a clean API for HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Register-or-fetch and resolve

pub mod services;
