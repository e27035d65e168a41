//! Storage backing the catalog registry.
//!
//! [`CatalogStore`] is the seam the registry is built on; [`MemoryStore`] is
//! the only implementation and keeps everything in process memory for the
//! lifetime of the server.

use std::collections::{BTreeSet, HashSet};

use indexmap::IndexMap;

use crate::types::{CatalogRow, Color, ColorCode, ItemType, ItemTypeCode, ModelNumber};

/// Tables the registry reads and writes.
///
/// Implementations only store; uniqueness and range rules are enforced by
/// [`crate::registry::CatalogRegistry`] before anything is inserted.
pub trait CatalogStore: Send + Sync {
    fn color_code(&self, description: &str) -> Option<ColorCode>;
    fn color_codes(&self) -> BTreeSet<ColorCode>;
    fn insert_color(&mut self, color: Color);
    fn colors(&self) -> Vec<Color>;

    fn item_type_code(&self, description: &str) -> Option<ItemTypeCode>;
    fn item_type_codes(&self) -> BTreeSet<ItemTypeCode>;
    fn insert_item_type(&mut self, item_type: ItemType);
    fn item_types(&self) -> Vec<ItemType>;

    fn insert_model_number(&mut self, number: ModelNumber);
    fn max_model_number(&self) -> Option<ModelNumber>;

    fn append_rows(&mut self, rows: Vec<CatalogRow>);
    fn rows(&self) -> &[CatalogRow];
}

/// In-memory tables with insertion-ordered color and item type maps.
#[derive(Debug, Default)]
pub struct MemoryStore {
    colors: IndexMap<String, ColorCode>,
    item_types: IndexMap<String, ItemTypeCode>,
    model_numbers: HashSet<ModelNumber>,
    rows: Vec<CatalogRow>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for MemoryStore {
    fn color_code(&self, description: &str) -> Option<ColorCode> {
        self.colors.get(description).copied()
    }

    fn color_codes(&self) -> BTreeSet<ColorCode> {
        self.colors.values().copied().collect()
    }

    fn insert_color(&mut self, color: Color) {
        self.colors.insert(color.description, color.code);
    }

    fn colors(&self) -> Vec<Color> {
        self.colors
            .iter()
            .map(|(description, code)| Color {
                description: description.clone(),
                code: *code,
            })
            .collect()
    }

    fn item_type_code(&self, description: &str) -> Option<ItemTypeCode> {
        self.item_types.get(description).copied()
    }

    fn item_type_codes(&self) -> BTreeSet<ItemTypeCode> {
        self.item_types.values().copied().collect()
    }

    fn insert_item_type(&mut self, item_type: ItemType) {
        self.item_types.insert(item_type.description, item_type.code);
    }

    fn item_types(&self) -> Vec<ItemType> {
        self.item_types
            .iter()
            .map(|(description, code)| ItemType {
                description: description.clone(),
                code: *code,
            })
            .collect()
    }

    fn insert_model_number(&mut self, number: ModelNumber) {
        self.model_numbers.insert(number);
    }

    fn max_model_number(&self) -> Option<ModelNumber> {
        self.model_numbers.iter().copied().max()
    }

    fn append_rows(&mut self, rows: Vec<CatalogRow>) {
        self.rows.extend(rows);
    }

    fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }
}
