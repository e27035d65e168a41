//! Handlers for catalog rows.

use axum::extract::{Query, State};
use axum::Json;
use catalog_entry_core::types::CatalogRow;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::CatalogForm;
use crate::response::{DataResponse, StatusResponse};
use crate::state::AppState;

/// Query parameters for `GET /item_code`.
#[derive(Debug, Deserialize)]
pub struct ItemCodeParams {
    #[serde(default)]
    pub model_code: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub size: String,
}

#[derive(Debug, Serialize)]
pub struct ItemCodePreview {
    pub item_code: String,
}

/// POST /save
///
/// Append one catalog row per selected size. Responds 400 without touching
/// the catalog when no size is selected.
pub async fn save(
    State(state): State<AppState>,
    CatalogForm(entry): CatalogForm,
) -> AppResult<Json<StatusResponse>> {
    let rows = state.registry.write().await.add_catalog_row(&entry)?;
    Ok(Json(StatusResponse::ok_with(format!(
        "Saved {} catalog entries",
        rows.len()
    ))))
}

/// GET /catalog
///
/// List every catalog row in insertion order.
pub async fn list(State(state): State<AppState>) -> Json<DataResponse<Vec<CatalogRow>>> {
    let rows = state.registry.read().await.rows().to_vec();
    Json(DataResponse { data: rows })
}

/// GET /item_code?model_code=&color=&size=
///
/// Preview the item code a saved row would receive.
pub async fn preview_item_code(
    State(state): State<AppState>,
    Query(params): Query<ItemCodeParams>,
) -> Json<DataResponse<ItemCodePreview>> {
    let item_code = state.registry.read().await.preview_item_code(
        params.model_code.trim(),
        &params.color,
        &params.size,
    );
    Json(DataResponse {
        data: ItemCodePreview { item_code },
    })
}
