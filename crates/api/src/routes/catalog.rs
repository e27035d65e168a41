//! Route definitions for the catalog entry page and its form actions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{entries, export, form, registry};
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET    /                   -> form::render
/// POST   /add_color          -> registry::add_color
/// POST   /add_item_type      -> registry::add_item_type
/// POST   /save               -> entries::save
/// GET    /catalog            -> entries::list
/// GET    /item_code          -> entries::preview_item_code
/// GET    /save_to_excel      -> export::save_to_excel
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(form::render))
        .route("/add_color", post(registry::add_color))
        .route("/add_item_type", post(registry::add_item_type))
        .route("/save", post(entries::save))
        .route("/catalog", get(entries::list))
        .route("/item_code", get(entries::preview_item_code))
        .route("/save_to_excel", get(export::save_to_excel))
}
