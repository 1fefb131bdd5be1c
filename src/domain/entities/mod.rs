//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A stored (short code → URL) association
//! - [`NewRecord`] - Input data for persisting an association

pub mod mapping;

pub use mapping::{NewRecord, UrlRecord};
