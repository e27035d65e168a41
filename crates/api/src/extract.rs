//! Request extractors.
//!
//! [`AppJson`] is axum's `Json` with rejections reported through
//! [`AppError`], so a malformed body still gets the JSON error envelope.
//!
//! The entry page posts its form either URL-encoded or as `multipart/form-data`
//! (browser `FormData`), and the size checkboxes repeat the `size` field once
//! per selected size. [`CatalogForm`] accepts both encodings and folds the
//! fields into a [`NewCatalogEntry`].

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use catalog_entry_core::types::NewCatalogEntry;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body; rejections become [`AppError::BadRequest`].
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(AppJson(value))
    }
}

/// Extracted `/save` form, ready for the registry.
#[derive(Debug)]
pub struct CatalogForm(pub NewCatalogEntry);

impl<S> FromRequest<S> for CatalogForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let fields = if is_multipart(&req) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            multipart_fields(multipart).await?
        } else {
            let Form(fields) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            fields
        };

        Ok(CatalogForm(entry_from_fields(fields)))
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"))
}

async fn multipart_fields(mut multipart: Multipart) -> Result<Vec<(String, String)>, AppError> {
    let mut fields = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let value = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        fields.push((name, value));
    }
    Ok(fields)
}

/// Fold raw form fields into a catalog entry.
///
/// A non-blank `new_color` / `new_item_type` takes precedence over the
/// selected `color_description` / `item_type_description`. Unknown fields are
/// ignored.
pub fn entry_from_fields(fields: Vec<(String, String)>) -> NewCatalogEntry {
    let mut entry = NewCatalogEntry::default();
    let mut new_color = String::new();
    let mut new_item_type = String::new();

    for (name, value) in fields {
        match name.as_str() {
            "model_code" => entry.model_code = value.trim().to_string(),
            "model_description" => entry.model_description = value.trim().to_string(),
            "color_description" => entry.color_description = value,
            "new_color" => new_color = value,
            "item_type_description" => entry.item_type_description = value,
            "new_item_type" => new_item_type = value,
            "upc" => entry.upc = value.trim().to_string(),
            "size" | "size[]" => entry.sizes.push(value),
            _ => {}
        }
    }

    if !new_color.trim().is_empty() {
        entry.color_description = new_color;
    }
    if !new_item_type.trim().is_empty() {
        entry.item_type_description = new_item_type;
    }
    entry.color_description = entry.color_description.trim().to_string();
    entry.item_type_description = entry.item_type_description.trim().to_string();

    entry
}
