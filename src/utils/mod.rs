//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Short code derivation from URLs

pub mod code_generator;
