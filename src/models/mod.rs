//! Data models for equipment inventory and restock orders

pub mod equipment;
pub mod order;

// Re-export commonly used types
pub use equipment::{CreateEquipment, EquipmentItem, UpdateEquipment};
pub use order::{CreateOrder, Order, OrderItem, OrderStatus, UpdateOrder};
