//! OpenAPI documentation

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, health, orders};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storage Equipment API",
        version = "1.0.0",
        description = "Hospital storage equipment inventory and restock orders"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Orders
        orders::list_orders,
        orders::get_order,
        orders::create_order,
        orders::update_order,
        orders::cancel_order,
    ),
    components(
        schemas(
            crate::models::equipment::EquipmentItem,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            crate::models::order::Order,
            crate::models::order::OrderItem,
            crate::models::order::OrderStatus,
            crate::models::order::CreateOrder,
            crate::models::order::UpdateOrder,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Storage equipment inventory"),
        (name = "orders", description = "Restock orders")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .route("/openapi", get(|| async { Json(ApiDoc::openapi()) }))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
