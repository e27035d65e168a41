//! Catalog record types shared by the registry, exporter and API layer.

use serde::{Deserialize, Serialize};

/// Three-digit color code, always within [`crate::allocator::COLOR_CODES`].
pub type ColorCode = u16;

/// Four-digit item type code, always within [`crate::allocator::ITEM_TYPE_CODES`].
pub type ItemTypeCode = u16;

/// Numeric portion of a model code.
pub type ModelNumber = u64;

/// A registered color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub description: String,
    pub code: ColorCode,
}

/// A registered item type (e.g. "Jacket", "Trousers").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemType {
    pub description: String,
    pub code: ItemTypeCode,
}

/// One exported line of the catalog: a single model/color/type/size combination.
///
/// Rows embed the codes that were valid when they were appended and are never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub item_code: String,
    pub model_code: String,
    pub model_description: String,
    pub color_code: Option<ColorCode>,
    pub color_description: String,
    pub item_type_code: Option<ItemTypeCode>,
    pub item_type_description: String,
    pub size: String,
    pub upc: String,
}

/// Input for appending catalog rows: one row is produced per entry in `sizes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewCatalogEntry {
    pub model_code: String,
    pub model_description: String,
    pub color_description: String,
    pub item_type_description: String,
    pub upc: String,
    pub sizes: Vec<String>,
}

impl NewCatalogEntry {
    /// Sizes with surrounding whitespace removed and blank entries dropped.
    pub fn selected_sizes(&self) -> Vec<&str> {
        self.sizes
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Validate the entry before any rows are appended.
    ///
    /// Returns an empty `Vec` if valid; otherwise a list of human-readable errors.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.selected_sizes().is_empty() {
            errors.push("No sizes selected".to_string());
        }

        errors
    }
}
