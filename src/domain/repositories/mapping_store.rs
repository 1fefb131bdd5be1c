//! Store trait for (short code → URL) mappings.

use crate::domain::entities::{NewRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable key-value store for short URL mappings.
///
/// Both operations act on a single key; no cross-key ordering or transaction
/// semantics are assumed beyond atomic per-key writes. Writes are durable
/// before `put` returns, so a subsequent `get` from another process observes
/// them.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingStore`] - PostgreSQL table keyed by code
/// - [`crate::infrastructure::persistence::RedisMappingStore`] - Redis-backed store
/// - [`crate::infrastructure::persistence::MemoryMappingStore`] - In-process store for tests and development
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Writes the record at its code, creating or overwriting.
    ///
    /// Callers cannot tell an insert from an overwrite; collision handling
    /// is a policy of the calling service, not the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on backend infrastructure
    /// failure.
    async fn put(&self, record: NewRecord) -> Result<(), AppError>;

    /// Retrieves the record stored at `code`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if present
    /// - `Ok(None)` for an unknown code; absence is an expected outcome,
    ///   never an error
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on backend infrastructure
    /// failure.
    async fn get(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Checks if the backend is reachable.
    ///
    /// Used by the health endpoint to report store status.
    async fn health_check(&self) -> bool;
}
