//! Shorten and resolve operations over the mapping store.

use std::future::Future;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{NewRecord, UrlRecord};
use crate::domain::repositories::MappingStore;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// What to do when a derived code is already occupied by a different URL.
///
/// Two distinct URLs can hash to the same 8-hex prefix. `Overwrite` keeps the
/// observed write-wins behavior; `Reject` reads before writing and refuses
/// the overwrite with a conflict error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    #[default]
    Overwrite,
    Reject,
}

impl FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overwrite" => Ok(Self::Overwrite),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "invalid collision policy '{}', expected 'overwrite' or 'reject'",
                other
            )),
        }
    }
}

/// Service for creating and resolving short URL mappings.
///
/// Derives codes with [`generate_code`] and persists them through an injected
/// [`MappingStore`]. Every store call is bounded by `op_timeout`; an elapsed
/// timeout surfaces as [`AppError::StoreUnavailable`] rather than hanging the
/// request.
pub struct ShortenerService {
    store: Arc<dyn MappingStore>,
    collision_policy: CollisionPolicy,
    op_timeout: Duration,
}

impl ShortenerService {
    /// Creates a new shortener service.
    pub fn new(
        store: Arc<dyn MappingStore>,
        collision_policy: CollisionPolicy,
        op_timeout: Duration,
    ) -> Self {
        Self {
            store,
            collision_policy,
            op_timeout,
        }
    }

    /// Shortens a URL, returning the stored record.
    ///
    /// The code is a pure function of the URL, so repeating the call for the
    /// same URL yields the same code and rewrites an identical record.
    ///
    /// Under [`CollisionPolicy::Reject`] the code is read before writing and
    /// an occupant with a different URL is refused. The check and the write
    /// are separate store operations; only per-key atomicity is assumed, so
    /// two concurrent first-writes of colliding URLs can still race.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `url` is empty
    /// - [`AppError::Conflict`] on a rejected collision
    /// - [`AppError::StoreUnavailable`] on backend failure or timeout
    pub async fn shorten(&self, url: &str) -> Result<UrlRecord, AppError> {
        if url.is_empty() {
            return Err(AppError::bad_request("url required", json!({})));
        }

        let code = generate_code(url);

        if self.collision_policy == CollisionPolicy::Reject
            && let Some(existing) = self.bounded(self.store.get(&code)).await?
            && existing.long_url != url
        {
            return Err(AppError::conflict(
                "Short code already maps to a different URL",
                json!({ "code": code }),
            ));
        }

        self.bounded(self.store.put(NewRecord {
            code: code.clone(),
            long_url: url.to_string(),
        }))
        .await?;

        Ok(UrlRecord::new(code, url.to_string(), Utc::now()))
    }

    /// Resolves a short code to its stored record.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the code is unknown
    /// - [`AppError::StoreUnavailable`] on backend failure or timeout
    pub async fn resolve(&self, code: &str) -> Result<UrlRecord, AppError> {
        self.bounded(self.store.get(code))
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Reports whether the underlying store is reachable.
    pub async fn store_healthy(&self) -> bool {
        tokio::time::timeout(self.op_timeout, self.store.health_check())
            .await
            .unwrap_or(false)
    }

    /// Bounds a store operation by the configured timeout.
    async fn bounded<T>(
        &self,
        op: impl Future<Output = Result<T, AppError>>,
    ) -> Result<T, AppError> {
        match tokio::time::timeout(self.op_timeout, op).await {
            Ok(result) => result,
            Err(_) => Err(AppError::store_unavailable(
                "Store operation timed out",
                json!({ "timeout_seconds": self.op_timeout.as_secs() }),
            )),
        }
    }
}
