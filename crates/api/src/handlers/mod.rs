//! Request handlers for the catalog entry tool.
//!
//! Each submodule provides async handler functions for one area of the page.
//! Handlers lock the shared [`CatalogRegistry`](catalog_entry_core::registry::CatalogRegistry)
//! in [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod entries;
pub mod export;
pub mod form;
pub mod registry;
