//! Redis implementation of the mapping store.

use async_trait::async_trait;
use chrono::Utc;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::{NewRecord, UrlRecord};
use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// Wire format for a mapping stored under its code key.
#[derive(Serialize, Deserialize)]
struct StoredMapping {
    long_url: String,
    created_at: chrono::DateTime<Utc>,
}

/// Redis-backed mapping store.
///
/// Fills the managed key-value role: one JSON value per code key, written
/// with a plain SET so a repeated `put` overwrites in place. Entries carry
/// no TTL; mappings live until explicitly removed out of band.
pub struct RedisMappingStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisMappingStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> Result<Self, AppError> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: "map:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, code: &str) -> String {
        format!("{}{}", self.key_prefix, code)
    }
}

#[async_trait]
impl MappingStore for RedisMappingStore {
    async fn put(&self, record: NewRecord) -> Result<(), AppError> {
        let key = self.build_key(&record.code);
        let stored = StoredMapping {
            long_url: record.long_url,
            created_at: Utc::now(),
        };
        let payload = serde_json::to_string(&stored).map_err(|e| {
            AppError::internal(
                "Failed to encode mapping",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let mut conn = self.client.clone();
        conn.set::<_, _, ()>(&key, payload).await?;

        debug!("Stored mapping {} -> {}", record.code, stored.long_url);
        Ok(())
    }

    async fn get(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();

        let payload: Option<String> = conn.get(&key).await?;

        match payload {
            Some(raw) => {
                let stored: StoredMapping = serde_json::from_str(&raw).map_err(|e| {
                    AppError::internal(
                        "Failed to decode stored mapping",
                        json!({ "code": code, "reason": e.to_string() }),
                    )
                })?;

                Ok(Some(UrlRecord::new(
                    code.to_string(),
                    stored.long_url,
                    stored.created_at,
                )))
            }
            None => Ok(None),
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
