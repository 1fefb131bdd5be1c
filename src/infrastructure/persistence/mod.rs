//! Mapping store implementations.
//!
//! # Stores
//!
//! - [`PgMappingStore`] - PostgreSQL table keyed by code (default backend)
//! - [`RedisMappingStore`] - Redis-backed key-value store
//! - [`MemoryMappingStore`] - In-process store for tests and development

pub mod memory_mapping_store;
pub mod pg_mapping_store;
pub mod redis_mapping_store;

pub use memory_mapping_store::MemoryMappingStore;
pub use pg_mapping_store::PgMappingStore;
pub use redis_mapping_store::RedisMappingStore;
