//! View model for the catalog entry form.
//!
//! Collects everything the entry page shows from a read-only view of the
//! registry. Rendering to HTML happens in the API crate.

use serde::{Deserialize, Serialize};

use crate::registry::CatalogRegistry;
use crate::sizes::{alpha_sizes, numeric_sizes};
use crate::store::CatalogStore;
use crate::types::ModelNumber;

/// Values carried over from a previous entry ("add another color of this model").
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FormPrefill {
    #[serde(default)]
    pub model_code: String,
    #[serde(default)]
    pub model_description: String,
    #[serde(default)]
    pub item_type: String,
}

/// Everything the entry form displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub color_options: Vec<String>,
    pub item_type_options: Vec<String>,
    pub numeric_sizes: Vec<String>,
    pub alpha_sizes: Vec<String>,
    pub next_model_number: ModelNumber,
    pub model_code: String,
    pub model_description: String,
    pub selected_item_type: String,
}

impl FormView {
    pub fn build<S: CatalogStore>(registry: &CatalogRegistry<S>, prefill: FormPrefill) -> Self {
        Self {
            color_options: registry
                .colors()
                .into_iter()
                .map(|c| c.description)
                .collect(),
            item_type_options: registry
                .item_types()
                .into_iter()
                .map(|t| t.description)
                .collect(),
            numeric_sizes: numeric_sizes(),
            alpha_sizes: alpha_sizes(),
            next_model_number: registry.next_model_number(),
            model_code: prefill.model_code.trim().to_string(),
            model_description: prefill.model_description.trim().to_string(),
            selected_item_type: prefill.item_type.trim().to_string(),
        }
    }
}
