//! Repository layer: typed document collections
//!
//! A single [`DocumentStore`] contract serves every record type. Backends
//! report outcomes as [`StoreError`] so callers see the same not-found and
//! conflict semantics whichever collection they touch.

pub mod memory;
pub mod postgres;
pub mod seed;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use sqlx::{Pool, Postgres};
use thiserror::Error;

use crate::{
    config::StorageConfig,
    models::{EquipmentItem, Order},
};

/// Marker for records that can live in a document collection
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {}

impl<T> Document for T where T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {}

/// Outcome of a failed store operation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("document {0} not found")]
    NotFound(String),

    #[error("document {0} already exists")]
    Conflict(String),

    /// Backend unavailable or the operation failed for infrastructure reasons
    #[error("{0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Backend(format!("document encoding failed: {}", e))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// CRUD over one named collection of `T`.
///
/// Every method is a single atomic document operation. Repeating a failing
/// call yields the same outcome (deleting an absent id is always `NotFound`).
#[async_trait]
pub trait DocumentStore<T: Document>: Send + Sync {
    /// Insert `record` under `id`; `Conflict` if the id is taken
    async fn create(&self, id: &str, record: &T) -> StoreResult<()>;

    async fn find(&self, id: &str) -> StoreResult<T>;

    /// All records in storage order; an empty collection is not an error
    async fn find_all(&self) -> StoreResult<Vec<T>>;

    /// Replace the whole record stored under `id`
    async fn update(&self, id: &str, record: &T) -> StoreResult<()>;

    async fn delete(&self, id: &str) -> StoreResult<()>;
}

/// One store per collection
#[derive(Clone)]
pub struct Repository {
    pub equipment: Arc<dyn DocumentStore<EquipmentItem>>,
    pub orders: Arc<dyn DocumentStore<Order>>,
}

impl Repository {
    /// Create a repository whose collections live in the given database pool
    pub fn new(pool: Pool<Postgres>, config: &StorageConfig) -> Self {
        Self {
            equipment: Arc::new(postgres::PgDocumentStore::new(
                pool.clone(),
                &config.equipment_collection,
            )),
            orders: Arc::new(postgres::PgDocumentStore::new(pool, &config.orders_collection)),
        }
    }

    /// Create a repository kept entirely in process memory
    pub fn in_memory(config: &StorageConfig) -> Self {
        Self {
            equipment: Arc::new(memory::MemoryStore::new(&config.equipment_collection)),
            orders: Arc::new(memory::MemoryStore::new(&config.orders_collection)),
        }
    }
}
