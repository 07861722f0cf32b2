//! In-process document store

use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::{Document, DocumentStore, StoreError, StoreResult};

/// Collection held in memory, in insertion order.
///
/// Used for local runs (`storage.backend = "memory"`) and as the test fixture.
#[derive(Clone)]
pub struct MemoryStore<T> {
    collection: String,
    documents: Arc<RwLock<IndexMap<String, T>>>,
}

impl<T> MemoryStore<T> {
    pub fn new(collection: &str) -> Self {
        Self {
            collection: collection.to_string(),
            documents: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Number of stored documents
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl<T: Document> DocumentStore<T> for MemoryStore<T> {
    async fn create(&self, id: &str, record: &T) -> StoreResult<()> {
        let mut documents = self.documents.write().await;
        if documents.contains_key(id) {
            return Err(StoreError::Conflict(id.to_string()));
        }
        documents.insert(id.to_string(), record.clone());
        Ok(())
    }

    async fn find(&self, id: &str) -> StoreResult<T> {
        self.documents
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn find_all(&self) -> StoreResult<Vec<T>> {
        Ok(self.documents.read().await.values().cloned().collect())
    }

    async fn update(&self, id: &str, record: &T) -> StoreResult<()> {
        let mut documents = self.documents.write().await;
        match documents.get_mut(id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        self.documents
            .write()
            .await
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
