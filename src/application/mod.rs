//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating the code
//! generator and the mapping store. Services consume repository traits and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Shorten and resolve operations

pub mod services;
