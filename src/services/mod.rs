//! Business logic services

pub mod equipment;
pub mod orders;

use crate::{
    error::{AppError, AppResult},
    repository::{Document, DocumentStore, Repository, StoreError},
};

/// Id that is never generated, used to probe a collection
const PROBE_ID: &str = "__readiness_probe__";

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub orders: orders::OrdersService,
}

impl Services {
    /// Create all services, each bound to its own collection
    pub fn new(repository: Repository) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(repository.equipment),
            orders: orders::OrdersService::new(repository.orders),
        }
    }
}

/// Translate a store outcome into the API error for `resource` ("Equipment", "Order")
pub(crate) fn store_error(resource: &str, action: &str, err: StoreError) -> AppError {
    match err {
        StoreError::NotFound(_) => AppError::NotFound(format!("{} not found", resource)),
        StoreError::Conflict(_) => {
            AppError::Conflict(format!("{} with this ID already exists", resource))
        }
        StoreError::Backend(details) => AppError::Storage {
            message: format!("Failed to {} {}", action, resource.to_lowercase()),
            details,
        },
    }
}

/// Round-trip a point lookup; a missing document still proves the store answers
pub(crate) async fn probe<T: Document>(
    store: &dyn DocumentStore<T>,
    resource: &str,
) -> AppResult<()> {
    match store.find(PROBE_ID).await {
        Ok(_) | Err(StoreError::NotFound(_)) => Ok(()),
        Err(e) => Err(store_error(resource, "reach", e)),
    }
}
