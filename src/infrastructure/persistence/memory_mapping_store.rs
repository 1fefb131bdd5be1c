//! In-memory implementation of the mapping store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::domain::entities::{NewRecord, UrlRecord};
use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// Per-code entry held in the map.
#[derive(Debug, Clone)]
struct Entry {
    long_url: String,
    created_at: DateTime<Utc>,
}

/// In-process mapping store using DashMap.
///
/// DashMap shards its locks, so concurrent `put`s to distinct codes and
/// concurrent `put`/`get` on the same code proceed without a global lock
/// while each key stays atomic.
///
/// Not durable across restarts; intended for tests and local development,
/// and as the substitute store that keeps the HTTP layer testable without a
/// real backend.
#[derive(Debug, Default)]
pub struct MemoryMappingStore {
    entries: DashMap<String, Entry>,
}

impl MemoryMappingStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

#[async_trait]
impl MappingStore for MemoryMappingStore {
    async fn put(&self, record: NewRecord) -> Result<(), AppError> {
        let entry = Entry {
            long_url: record.long_url,
            created_at: Utc::now(),
        };
        self.entries.insert(record.code, entry);
        Ok(())
    }

    async fn get(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let Some(entry) = self.entries.get(code) else {
            return Ok(None);
        };

        Ok(Some(UrlRecord::new(
            code.to_string(),
            entry.long_url.clone(),
            entry.created_at,
        )))
    }

    async fn health_check(&self) -> bool {
        true
    }
}
