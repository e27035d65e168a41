//! The catalog registry service.
//!
//! Owns the catalog tables (through an injected [`CatalogStore`]) together
//! with the code allocators, and is the only place catalog state is mutated.
//! The API layer builds one registry per process and shares it through
//! application state.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::allocator::CodeAllocator;
use crate::error::CoreError;
use crate::item_code::{item_code, model_number};
use crate::store::{CatalogStore, MemoryStore};
use crate::types::{
    CatalogRow, Color, ColorCode, ItemType, ItemTypeCode, ModelNumber, NewCatalogEntry,
};

/// Suggested model number when none has been recorded yet.
pub const FIRST_MODEL_NUMBER: ModelNumber = 1;

/// Registry of colors, item types, model numbers and catalog rows.
pub struct CatalogRegistry<S: CatalogStore = MemoryStore> {
    store: S,
    color_codes: CodeAllocator,
    item_type_codes: CodeAllocator,
    rng: StdRng,
}

impl CatalogRegistry<MemoryStore> {
    /// Create an empty in-memory registry seeded from the OS.
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new(), StdRng::from_os_rng())
    }

    /// Create an empty in-memory registry with a fixed seed, for
    /// reproducible code assignment.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_store(MemoryStore::new(), StdRng::seed_from_u64(seed))
    }
}

impl Default for CatalogRegistry<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CatalogStore> CatalogRegistry<S> {
    pub fn with_store(store: S, rng: StdRng) -> Self {
        Self {
            store,
            color_codes: CodeAllocator::colors(),
            item_type_codes: CodeAllocator::item_types(),
            rng,
        }
    }

    // -----------------------------------------------------------------------
    // Colors
    // -----------------------------------------------------------------------

    /// Register a color under a fresh random three-digit code.
    ///
    /// Returns `None` if the trimmed name is empty, already registered, or no
    /// color code is left.
    pub fn add_color(&mut self, name: &str) -> Option<Color> {
        let description = name.trim();
        if description.is_empty() || self.store.color_code(description).is_some() {
            return None;
        }

        let used = self.store.color_codes();
        let Some(code) = self.color_codes.allocate(&used, &mut self.rng) else {
            tracing::warn!(color = %description, "Color code space exhausted");
            return None;
        };

        let color = Color {
            description: description.to_string(),
            code,
        };
        self.store.insert_color(color.clone());
        tracing::debug!(color = %color.description, code, "Registered color");
        Some(color)
    }

    pub fn color_code(&self, description: &str) -> Option<ColorCode> {
        self.store.color_code(description.trim())
    }

    pub fn colors(&self) -> Vec<Color> {
        self.store.colors()
    }

    // -----------------------------------------------------------------------
    // Item types
    // -----------------------------------------------------------------------

    /// Register an item type under a fresh random four-digit code.
    ///
    /// Same failure policy as [`Self::add_color`].
    pub fn add_item_type(&mut self, name: &str) -> Option<ItemType> {
        let description = name.trim();
        if description.is_empty() || self.store.item_type_code(description).is_some() {
            return None;
        }

        let used = self.store.item_type_codes();
        let Some(code) = self.item_type_codes.allocate(&used, &mut self.rng) else {
            tracing::warn!(item_type = %description, "Item type code space exhausted");
            return None;
        };

        let item_type = ItemType {
            description: description.to_string(),
            code,
        };
        self.store.insert_item_type(item_type.clone());
        tracing::debug!(item_type = %item_type.description, code, "Registered item type");
        Some(item_type)
    }

    pub fn item_type_code(&self, description: &str) -> Option<ItemTypeCode> {
        self.store.item_type_code(description.trim())
    }

    pub fn item_types(&self) -> Vec<ItemType> {
        self.store.item_types()
    }

    // -----------------------------------------------------------------------
    // Model numbers
    // -----------------------------------------------------------------------

    /// Record the model number of a numeric model code.
    ///
    /// Returns `false` (and records nothing) for non-numeric codes.
    pub fn record_model_number(&mut self, model_code: &str) -> bool {
        match model_number(model_code) {
            Some(number) => {
                self.store.insert_model_number(number);
                true
            }
            None => false,
        }
    }

    /// The highest recorded model number plus one, or [`FIRST_MODEL_NUMBER`].
    pub fn next_model_number(&self) -> ModelNumber {
        self.store
            .max_model_number()
            .map_or(FIRST_MODEL_NUMBER, |max| max.saturating_add(1))
    }

    // -----------------------------------------------------------------------
    // Catalog rows
    // -----------------------------------------------------------------------

    /// Append one catalog row per selected size.
    ///
    /// Fails with [`CoreError::Validation`] when no size is selected, in which
    /// case nothing (including the model number) is recorded. Color and item
    /// type codes are looked up, never allocated: a blank or unregistered
    /// description leaves the code empty.
    pub fn add_catalog_row(
        &mut self,
        entry: &NewCatalogEntry,
    ) -> Result<Vec<CatalogRow>, CoreError> {
        let errors = entry.validate();
        if !errors.is_empty() {
            return Err(CoreError::Validation(errors.join("; ")));
        }

        self.record_model_number(&entry.model_code);

        let color_description = entry.color_description.trim();
        let color_code = self.store.color_code(color_description);
        let item_type_description = entry.item_type_description.trim();
        let item_type_code = self.store.item_type_code(item_type_description);

        let rows: Vec<CatalogRow> = entry
            .selected_sizes()
            .into_iter()
            .map(|size| CatalogRow {
                item_code: item_code(&entry.model_code, color_code, size),
                model_code: entry.model_code.clone(),
                model_description: entry.model_description.clone(),
                color_code,
                color_description: color_description.to_string(),
                item_type_code,
                item_type_description: item_type_description.to_string(),
                size: size.to_string(),
                upc: entry.upc.clone(),
            })
            .collect();

        tracing::info!(
            model_code = %entry.model_code,
            count = rows.len(),
            "Appended catalog rows"
        );
        self.store.append_rows(rows.clone());
        Ok(rows)
    }

    /// All catalog rows in insertion order.
    pub fn rows(&self) -> &[CatalogRow] {
        self.store.rows()
    }

    /// The item code a row for this model, color and size would receive.
    pub fn preview_item_code(
        &self,
        model_code: &str,
        color_description: &str,
        size: &str,
    ) -> String {
        item_code(model_code, self.color_code(color_description), size.trim())
    }
}
