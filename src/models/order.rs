//! Restock order model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(format!("unknown order status '{}'", other)),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn default_quantity() -> u32 {
    1
}

/// Reference to an equipment item being restocked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub equipment_id: String,
    /// Display name at the time of ordering
    pub name: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Order record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Server-assigned identifier (UUID)
    pub id: String,
    pub items: Vec<OrderItem>,
    pub requested_by: String,
    pub requestor_department: Option<String>,
    pub status: OrderStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create order request
///
/// Any status sent by the client is ignored; new orders are always pending.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub requested_by: String,
    pub requestor_department: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Update order request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrder {
    /// Required: pending, delivered or cancelled
    #[serde(default)]
    pub status: String,
    pub requested_by: Option<String>,
    pub requestor_department: Option<String>,
    pub notes: Option<String>,
    /// Replaces the whole item list when present
    pub items: Option<Vec<OrderItem>>,
}

impl Order {
    /// Build a pending order stamped with `now`
    pub fn new(id: String, data: CreateOrder, now: DateTime<Utc>) -> Self {
        Self {
            id,
            items: data.items,
            requested_by: data.requested_by,
            requestor_department: data.requestor_department,
            status: OrderStatus::Pending,
            notes: data.notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge an update whose status has already been validated
    pub fn apply_update(&mut self, status: OrderStatus, data: UpdateOrder, now: DateTime<Utc>) {
        if let Some(requested_by) = data.requested_by.filter(|v| !v.is_empty()) {
            self.requested_by = requested_by;
        }
        if let Some(department) = data.requestor_department.filter(|v| !v.is_empty()) {
            self.requestor_department = Some(department);
        }
        if let Some(notes) = data.notes.filter(|v| !v.is_empty()) {
            self.notes = Some(notes);
        }
        if let Some(items) = data.items {
            self.items = items;
        }
        self.status = status;
        self.updated_at = now;
    }
}
