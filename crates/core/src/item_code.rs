//! Item code construction.

use crate::types::ColorCode;

/// Build an item code by concatenating model code, color code and size.
///
/// Convention: `{model_code}{color_code}{size}`, with a missing color code
/// contributing nothing.
///
/// # Examples
///
/// ```
/// use catalog_entry_core::item_code::item_code;
///
/// assert_eq!(item_code("12", Some(345), "32"), "1234532");
/// assert_eq!(item_code("12", Some(345), "XL"), "12345XL");
/// assert_eq!(item_code("12", None, "M"), "12M");
/// ```
pub fn item_code(model_code: &str, color_code: Option<ColorCode>, size: &str) -> String {
    let mut code = String::with_capacity(model_code.len() + 3 + size.len());
    code.push_str(model_code);
    if let Some(color) = color_code {
        code.push_str(&color.to_string());
    }
    code.push_str(size);
    code
}

/// Parse a model code into its model number.
///
/// Only non-empty, all-ASCII-digit codes count; anything else (letters,
/// signs, whitespace, values beyond `u64`) yields `None`.
pub fn model_number(model_code: &str) -> Option<u64> {
    if model_code.is_empty() || !model_code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    model_code.parse().ok()
}
