use askama::Template;
use axum::extract::{Query, State};
use axum::response::Html;
use catalog_entry_core::form::{FormPrefill, FormView};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::templates::EntryFormTemplate;

/// GET /?model_code=&model_description=&item_type=
///
/// Render the entry form, optionally prefilled from a previous entry.
pub async fn render(
    State(state): State<AppState>,
    Query(prefill): Query<FormPrefill>,
) -> AppResult<Html<String>> {
    let view = {
        let registry = state.registry.read().await;
        FormView::build(&*registry, prefill)
    };

    let page = EntryFormTemplate::from(view)
        .render()
        .map_err(|e| AppError::InternalError(format!("Template rendering failed: {e}")))?;
    Ok(Html(page))
}
