//! PostgreSQL implementation of the mapping store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::Row;
use std::sync::Arc;

use crate::domain::entities::{NewRecord, UrlRecord};
use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// PostgreSQL store backed by a single `mappings` table keyed by code.
///
/// Uses prepared statements for SQL injection protection. `put` is an upsert,
/// so a repeated write to the same code replaces the URL in place while the
/// original `created_at` is preserved.
pub struct PgMappingStore {
    pool: Arc<PgPool>,
}

impl PgMappingStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingStore for PgMappingStore {
    async fn put(&self, record: NewRecord) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO mappings (code, long_url)
            VALUES ($1, $2)
            ON CONFLICT (code) DO UPDATE SET long_url = EXCLUDED.long_url
            "#,
        )
        .bind(&record.code)
        .bind(&record.long_url)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn get(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT code, long_url, created_at
            FROM mappings
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(|r| -> Result<UrlRecord, AppError> {
            let code: String = r.try_get("code")?;
            let long_url: String = r.try_get("long_url")?;
            let created_at: DateTime<Utc> = r.try_get("created_at")?;
            Ok(UrlRecord::new(code, long_url, created_at))
        })
        .transpose()
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
