use askama::Template;
use catalog_entry_core::form::FormView;

/// One `<option>` of a choice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

/// The catalog entry page.
#[derive(Template)]
#[template(path = "form.html")]
pub struct EntryFormTemplate {
    pub color_options: Vec<SelectOption>,
    pub item_type_options: Vec<SelectOption>,
    pub numeric_sizes: Vec<String>,
    pub alpha_sizes: Vec<String>,
    pub next_model_number: u64,
    pub model_code: String,
    pub model_description: String,
}

impl From<FormView> for EntryFormTemplate {
    fn from(view: FormView) -> Self {
        let item_type_options = view
            .item_type_options
            .into_iter()
            .map(|value| SelectOption {
                selected: value == view.selected_item_type,
                value,
            })
            .collect();

        let color_options = view
            .color_options
            .into_iter()
            .map(|value| SelectOption {
                value,
                selected: false,
            })
            .collect();

        Self {
            color_options,
            item_type_options,
            numeric_sizes: view.numeric_sizes,
            alpha_sizes: view.alpha_sizes,
            next_model_number: view.next_model_number,
            model_code: view.model_code,
            model_description: view.model_description,
        }
    }
}
