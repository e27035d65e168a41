//! Fixed size option sets offered by the entry form.

/// First numeric size (waist / chest measurement).
pub const NUMERIC_SIZE_MIN: u32 = 32;

/// Last numeric size, inclusive.
pub const NUMERIC_SIZE_MAX: u32 = 46;

/// Letter sizes in display order.
pub const ALPHA_SIZES: &[&str] = &["XS", "S", "M", "L", "XL", "XXL", "3XL", "4XL", "5XL"];

/// Numeric sizes `32..=46` as strings, in ascending order.
pub fn numeric_sizes() -> Vec<String> {
    (NUMERIC_SIZE_MIN..=NUMERIC_SIZE_MAX)
        .map(|s| s.to_string())
        .collect()
}

/// Letter sizes `XS..=5XL` as owned strings.
pub fn alpha_sizes() -> Vec<String> {
    ALPHA_SIZES.iter().map(|s| s.to_string()).collect()
}
