//! Restock order API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::AppJson;
use crate::{
    error::AppResult,
    models::order::{CreateOrder, Order, UpdateOrder},
    AppState,
};

/// List all orders
#[utoipa::path(
    get,
    path = "/orders",
    tag = "orders",
    responses(
        (status = 200, description = "Order list", body = Vec<Order>),
        (status = 500, description = "Storage failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    let orders = state.services.orders.list().await?;
    Ok(Json(orders))
}

/// Get order by ID
#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    tag = "orders",
    params(("order_id" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order details", body = Order),
        (status = 404, description = "Order not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state.services.orders.get_by_id(&order_id).await?;
    Ok(Json(order))
}

/// Create an order (always starts as pending)
#[utoipa::path(
    post,
    path = "/orders",
    tag = "orders",
    request_body = CreateOrder,
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 400, description = "Missing requester or items", body = crate::error::ErrorResponse),
        (status = 409, description = "Order ID already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    AppJson(data): AppJson<CreateOrder>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let order = state.services.orders.create(data).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Update an order's status and details
#[utoipa::path(
    put,
    path = "/orders/{order_id}",
    tag = "orders",
    params(("order_id" = String, Path, description = "Order ID")),
    request_body = UpdateOrder,
    responses(
        (status = 200, description = "Order updated", body = Order),
        (status = 400, description = "Invalid status", body = crate::error::ErrorResponse),
        (status = 404, description = "Order not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    AppJson(data): AppJson<UpdateOrder>,
) -> AppResult<Json<Order>> {
    let order = state.services.orders.update(&order_id, data).await?;
    Ok(Json(order))
}

/// Cancel an order (the order is deleted)
#[utoipa::path(
    delete,
    path = "/orders/{order_id}",
    tag = "orders",
    params(("order_id" = String, Path, description = "Order ID")),
    responses(
        (status = 204, description = "Order cancelled"),
        (status = 404, description = "Order not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.orders.cancel(&order_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
