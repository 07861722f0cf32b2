//! Sample equipment for fresh installations

use super::{DocumentStore, StoreError, StoreResult};
use crate::models::EquipmentItem;

const SAMPLE_EQUIPMENT: &str = include_str!("../../data/sample_equipment.json");

pub fn sample_equipment() -> StoreResult<Vec<EquipmentItem>> {
    Ok(serde_json::from_str(SAMPLE_EQUIPMENT)?)
}

/// Insert the sample equipment when the collection is empty.
///
/// Returns the number of inserted records.
pub async fn seed_equipment(store: &dyn DocumentStore<EquipmentItem>) -> StoreResult<usize> {
    if !store.find_all().await?.is_empty() {
        tracing::debug!("Equipment collection already populated, skipping seed");
        return Ok(0);
    }

    let mut inserted = 0;
    for item in sample_equipment()? {
        match store.create(&item.id, &item).await {
            Ok(()) => inserted += 1,
            Err(StoreError::Conflict(id)) => {
                tracing::warn!("Sample equipment {} already exists, skipping", id);
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!("Seeded {} sample equipment records", inserted);
    Ok(inserted)
}
