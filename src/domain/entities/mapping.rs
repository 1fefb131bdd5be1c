//! Mapping entities: a short code bound to its original URL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored (short code → URL) association.
///
/// The code is derived from the URL, so for any code at most one record
/// exists and re-shortening the same URL rewrites an identical record.
/// The URL is kept exactly as submitted; no normalization is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlRecord {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(code: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            long_url,
            created_at,
        }
    }
}

/// Input data for persisting a mapping.
///
/// `created_at` is assigned by the store at write time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub code: String,
    pub long_url: String,
}
