//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`UrlMapping`] - A stored URL to short id mapping
//!
//! Creation input uses a separate struct, [`NewUrlMapping`]. Mappings are
//! immutable once stored, so there is no update type.

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
