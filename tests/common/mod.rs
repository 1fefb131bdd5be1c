#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

use hexlink::application::services::{CollisionPolicy, ShortenerService};
use hexlink::domain::entities::{NewRecord, UrlRecord};
use hexlink::domain::repositories::MappingStore;
use hexlink::error::AppError;
use hexlink::infrastructure::persistence::MemoryMappingStore;
use hexlink::state::AppState;

pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

pub fn create_test_state() -> (AppState, Arc<MemoryMappingStore>) {
    create_test_state_with_policy(CollisionPolicy::Overwrite)
}

pub fn create_test_state_with_policy(
    policy: CollisionPolicy,
) -> (AppState, Arc<MemoryMappingStore>) {
    let store = Arc::new(MemoryMappingStore::new());
    let shortener = Arc::new(ShortenerService::new(store.clone(), policy, TEST_TIMEOUT));

    (AppState { shortener }, store)
}

pub async fn seed_mapping(store: &MemoryMappingStore, code: &str, url: &str) {
    store
        .put(NewRecord {
            code: code.to_string(),
            long_url: url.to_string(),
        })
        .await
        .unwrap();
}

/// Store whose every operation fails, for exercising 503 paths.
pub struct FailingStore;

#[async_trait]
impl MappingStore for FailingStore {
    async fn put(&self, _record: NewRecord) -> Result<(), AppError> {
        Err(AppError::store_unavailable("Store offline", json!({})))
    }

    async fn get(&self, _code: &str) -> Result<Option<UrlRecord>, AppError> {
        Err(AppError::store_unavailable("Store offline", json!({})))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_failing_state() -> AppState {
    let shortener = Arc::new(ShortenerService::new(
        Arc::new(FailingStore),
        CollisionPolicy::Overwrite,
        TEST_TIMEOUT,
    ));

    AppState { shortener }
}
