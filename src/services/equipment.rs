//! Equipment service

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use super::{probe, store_error};
use crate::{
    error::AppResult,
    models::equipment::{CreateEquipment, EquipmentItem, UpdateEquipment},
    repository::DocumentStore,
};

#[derive(Clone)]
pub struct EquipmentService {
    store: Arc<dyn DocumentStore<EquipmentItem>>,
}

impl EquipmentService {
    pub fn new(store: Arc<dyn DocumentStore<EquipmentItem>>) -> Self {
        Self { store }
    }

    /// Check that the backing collection is reachable
    pub async fn ping(&self) -> AppResult<()> {
        probe(self.store.as_ref(), "Equipment").await
    }

    pub async fn list(&self) -> AppResult<Vec<EquipmentItem>> {
        self.store
            .find_all()
            .await
            .map_err(|e| store_error("Equipment", "retrieve", e))
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<EquipmentItem> {
        self.store
            .find(id)
            .await
            .map_err(|e| store_error("Equipment", "retrieve", e))
    }

    /// Create equipment with a fresh id, default status and derived next service date
    pub async fn create(&self, data: CreateEquipment) -> AppResult<EquipmentItem> {
        data.validate()?;

        let item = EquipmentItem::new(Uuid::new_v4().to_string(), data);
        self.store
            .create(&item.id, &item)
            .await
            .map_err(|e| store_error("Equipment", "create", e))?;

        tracing::info!("Created equipment {} ({})", item.id, item.serial_number);
        Ok(item)
    }

    /// Merge the supplied fields into the stored record and write it back
    pub async fn update(&self, id: &str, data: &UpdateEquipment) -> AppResult<EquipmentItem> {
        let mut item = self.get_by_id(id).await?;
        item.apply_update(data);

        // Last writer wins: no version check between the read and this write
        self.store
            .update(id, &item)
            .await
            .map_err(|e| store_error("Equipment", "update", e))?;

        tracing::info!("Updated equipment {}", id);
        Ok(item)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.store
            .delete(id)
            .await
            .map_err(|e| store_error("Equipment", "delete", e))?;
        tracing::info!("Deleted equipment {}", id);
        Ok(())
    }
}
