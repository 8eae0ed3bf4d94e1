use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, inventory::InventoryEntryDto},
    server::{error::AppError, service::inventory::InventoryAdjuster, state::AppState},
};

/// Tag for grouping inventory endpoints in OpenAPI documentation
pub static INVENTORY_TAG: &str = "inventory";

/// Get current blood stock.
///
/// Returns one entry per blood group with its unit count and last update time.
///
/// # Returns
/// - `200 OK` - Stock levels
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/inventory",
    tag = INVENTORY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved inventory", body = Vec<InventoryEntryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let levels = InventoryAdjuster::new(&state.db).levels().await?;

    let dtos: Vec<InventoryEntryDto> = levels.into_iter().map(|entry| entry.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
