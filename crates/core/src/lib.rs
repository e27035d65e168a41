//! Catalog entry domain library.
//!
//! Holds the in-memory catalog registry (colors, item types, model numbers,
//! catalog rows), the code allocator, item-code construction, the entry form
//! view model and the spreadsheet exporter. Has no HTTP dependencies so it can
//! be exercised directly from unit tests and from the API crate.

pub mod allocator;
pub mod error;
pub mod export;
pub mod form;
pub mod item_code;
pub mod registry;
pub mod sizes;
pub mod store;
pub mod types;
