//! Utility functions shared by the HTTP layer.
//!
//! - [`url_validator`] - Syntactic URL validity check
//! - [`shutdown`] - Graceful shutdown signal

pub mod shutdown;
pub mod url_validator;
