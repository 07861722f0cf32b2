//! Restock order service

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::{probe, store_error};
use crate::{
    error::{AppError, AppResult},
    models::order::{CreateOrder, Order, OrderStatus, UpdateOrder},
    repository::DocumentStore,
};

const INVALID_STATUS: &str = "Invalid status. Must be: pending, delivered, or cancelled";

#[derive(Clone)]
pub struct OrdersService {
    store: Arc<dyn DocumentStore<Order>>,
}

impl OrdersService {
    pub fn new(store: Arc<dyn DocumentStore<Order>>) -> Self {
        Self { store }
    }

    /// Check that the backing collection is reachable
    pub async fn ping(&self) -> AppResult<()> {
        probe(self.store.as_ref(), "Order").await
    }

    pub async fn list(&self) -> AppResult<Vec<Order>> {
        self.store
            .find_all()
            .await
            .map_err(|e| store_error("Order", "retrieve", e))
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Order> {
        self.store
            .find(id)
            .await
            .map_err(|e| store_error("Order", "retrieve", e))
    }

    /// Create a pending order; a status sent by the client is ignored
    pub async fn create(&self, data: CreateOrder) -> AppResult<Order> {
        if data.requested_by.is_empty() {
            return Err(AppError::Validation("RequestedBy is required".to_string()));
        }
        if data.items.is_empty() {
            return Err(AppError::Validation("At least one item is required".to_string()));
        }

        let order = Order::new(Uuid::new_v4().to_string(), data, Utc::now());
        self.store
            .create(&order.id, &order)
            .await
            .map_err(|e| store_error("Order", "create", e))?;

        tracing::info!("Created order {} for {}", order.id, order.requested_by);
        Ok(order)
    }

    /// Set the status (always required) and merge any other supplied fields.
    ///
    /// Any status may follow any other; only membership in the enum is checked.
    pub async fn update(&self, id: &str, data: UpdateOrder) -> AppResult<Order> {
        let status: OrderStatus = data
            .status
            .parse()
            .map_err(|_| AppError::Validation(INVALID_STATUS.to_string()))?;

        let mut order = self.get_by_id(id).await?;
        let previous = order.status;
        order.apply_update(status, data, Utc::now());

        self.store
            .update(id, &order)
            .await
            .map_err(|e| store_error("Order", "update", e))?;

        tracing::info!("Updated order {} ({} -> {})", id, previous, order.status);
        Ok(order)
    }

    /// Cancel an order by deleting it; no cancelled record is kept
    pub async fn cancel(&self, id: &str) -> AppResult<()> {
        self.store
            .delete(id)
            .await
            .map_err(|e| store_error("Order", "cancel", e))?;
        tracing::info!("Cancelled order {}", id);
        Ok(())
    }
}
