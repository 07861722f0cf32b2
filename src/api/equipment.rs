//! Equipment API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::AppJson;
use crate::{
    error::AppResult,
    models::equipment::{CreateEquipment, EquipmentItem, UpdateEquipment},
    AppState,
};

/// List all equipment
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    responses(
        (status = 200, description = "Equipment list", body = Vec<EquipmentItem>),
        (status = 500, description = "Storage failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_equipment(State(state): State<AppState>) -> AppResult<Json<Vec<EquipmentItem>>> {
    let equipment = state.services.equipment.list().await?;
    Ok(Json(equipment))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipment/{equipment_id}",
    tag = "equipment",
    params(("equipment_id" = String, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = EquipmentItem),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    Path(equipment_id): Path<String>,
) -> AppResult<Json<EquipmentItem>> {
    let equipment = state.services.equipment.get_by_id(&equipment_id).await?;
    Ok(Json(equipment))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment created", body = EquipmentItem),
        (status = 400, description = "Missing required fields", body = crate::error::ErrorResponse),
        (status = 409, description = "Equipment ID already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    AppJson(data): AppJson<CreateEquipment>,
) -> AppResult<(StatusCode, Json<EquipmentItem>)> {
    let equipment = state.services.equipment.create(data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Update equipment (only non-empty fields are applied)
#[utoipa::path(
    put,
    path = "/equipment/{equipment_id}",
    tag = "equipment",
    params(("equipment_id" = String, Path, description = "Equipment ID")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = EquipmentItem),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    Path(equipment_id): Path<String>,
    AppJson(data): AppJson<UpdateEquipment>,
) -> AppResult<Json<EquipmentItem>> {
    let equipment = state.services.equipment.update(&equipment_id, &data).await?;
    Ok(Json(equipment))
}

/// Delete equipment
#[utoipa::path(
    delete,
    path = "/equipment/{equipment_id}",
    tag = "equipment",
    params(("equipment_id" = String, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    Path(equipment_id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.equipment.delete(&equipment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
