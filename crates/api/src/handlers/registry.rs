//! Handlers that register colors and item types.
//!
//! Both answer `{ "success": false }` with status 200 for an empty or
//! duplicate name; the page shows its own message in that case. A body that
//! is not valid JSON is a 400 `BAD_REQUEST`.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::extract::AppJson;
use crate::response::StatusResponse;
use crate::state::AppState;

/// Request body for `POST /add_color`.
#[derive(Debug, Deserialize)]
pub struct AddColorRequest {
    #[serde(default)]
    pub color: String,
}

/// Request body for `POST /add_item_type`.
#[derive(Debug, Deserialize)]
pub struct AddItemTypeRequest {
    #[serde(default)]
    pub item_type: String,
}

/// POST /add_color
pub async fn add_color(
    State(state): State<AppState>,
    AppJson(input): AppJson<AddColorRequest>,
) -> Json<StatusResponse> {
    let added = state.registry.write().await.add_color(&input.color);
    match added {
        Some(color) => {
            tracing::info!(color = %color.description, code = color.code, "Color added");
            Json(StatusResponse::ok())
        }
        None => {
            tracing::debug!(color = %input.color, "Color rejected (empty or duplicate)");
            Json(StatusResponse::rejected())
        }
    }
}

/// POST /add_item_type
pub async fn add_item_type(
    State(state): State<AppState>,
    AppJson(input): AppJson<AddItemTypeRequest>,
) -> Json<StatusResponse> {
    let added = state.registry.write().await.add_item_type(&input.item_type);
    match added {
        Some(item_type) => {
            tracing::info!(
                item_type = %item_type.description,
                code = item_type.code,
                "Item type added"
            );
            Json(StatusResponse::ok())
        }
        None => {
            tracing::debug!(
                item_type = %input.item_type,
                "Item type rejected (empty or duplicate)"
            );
            Json(StatusResponse::rejected())
        }
    }
}
