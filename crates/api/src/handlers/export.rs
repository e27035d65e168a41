use std::path::PathBuf;

use axum::extract::{Query, State};
use axum::Json;
use catalog_entry_core::export::{export_catalog, ExportError};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::StatusResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub file_path: Option<String>,
}

/// GET /save_to_excel?file_path=...
///
/// Write every catalog row to a spreadsheet at `file_path`. An empty catalog
/// is reported before the path is looked at.
pub async fn save_to_excel(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> AppResult<Json<StatusResponse>> {
    let rows = state.registry.read().await.rows().to_vec();
    if rows.is_empty() {
        return Err(ExportError::EmptyCatalog.into());
    }

    let path = params
        .file_path
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| AppError::BadRequest("No file path provided.".to_string()))?;

    let summary = tokio::task::spawn_blocking(move || export_catalog(&rows, &path))
        .await
        .map_err(|e| AppError::InternalError(format!("Export task failed: {e}")))??;

    Ok(Json(StatusResponse::ok_with(format!(
        "Saved {} rows to {}",
        summary.rows, summary.path
    ))))
}
