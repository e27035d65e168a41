//! Spreadsheet export of catalog rows.
//!
//! Writes the full row list to a caller-supplied path. Files ending in `.csv`
//! are written as CSV; every other path gets an XLSX workbook with a single
//! sheet and a bold header row.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use serde::Serialize;

use crate::types::CatalogRow;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Header row, in column order.
pub const COLUMNS: [&str; 9] = [
    "Item Code",
    "Model Code",
    "Model Description",
    "Color Code",
    "Color Description",
    "Item Type Code",
    "Item Type Description",
    "Size",
    "UPC",
];

/// Worksheet name used for XLSX output.
pub const SHEET_NAME: &str = "Catalog";

/// Output format, chosen from the target path's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ExportFormat::Csv,
            _ => ExportFormat::Xlsx,
        }
    }
}

/// What a successful export wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub path: String,
    pub format: ExportFormat,
    pub rows: usize,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("No items to save.")]
    EmptyCatalog,

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Xlsx(XlsxError),

    #[error("{0}")]
    Csv(#[from] csv::Error),
}

impl From<XlsxError> for ExportError {
    fn from(err: XlsxError) -> Self {
        match err {
            XlsxError::IoError(io) => ExportError::Io(io),
            other => ExportError::Xlsx(other),
        }
    }
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Write `rows` to `path`.
///
/// The empty check runs before the filesystem is touched, so an empty catalog
/// never creates or truncates a file.
pub fn export_catalog(rows: &[CatalogRow], path: &Path) -> Result<ExportSummary, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::EmptyCatalog);
    }

    let format = ExportFormat::for_path(path);
    match format {
        ExportFormat::Xlsx => write_xlsx(rows, path)?,
        ExportFormat::Csv => write_csv(rows, path)?,
    }

    tracing::info!(path = %path.display(), ?format, rows = rows.len(), "Exported catalog");

    Ok(ExportSummary {
        path: path.display().to_string(),
        format,
        rows: rows.len(),
    })
}

/// The cells of one row as text, in [`COLUMNS`] order. Missing codes are empty.
pub fn row_cells(row: &CatalogRow) -> [String; 9] {
    [
        row.item_code.clone(),
        row.model_code.clone(),
        row.model_description.clone(),
        row.color_code.map(|c| c.to_string()).unwrap_or_default(),
        row.color_description.clone(),
        row.item_type_code.map(|c| c.to_string()).unwrap_or_default(),
        row.item_type_description.clone(),
        row.size.clone(),
        row.upc.clone(),
    ]
}

fn write_csv(rows: &[CatalogRow], path: &Path) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(COLUMNS)?;
    for row in rows {
        writer.write_record(row_cells(row))?;
    }
    writer.flush()?;
    Ok(())
}

fn write_xlsx(rows: &[CatalogRow], path: &Path) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, title) in COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    for (idx, row) in rows.iter().enumerate() {
        let line = idx as u32 + 1;
        for (col, cell) in row_cells(row).into_iter().enumerate() {
            let col = col as u16;
            match (col, row.color_code, row.item_type_code) {
                // Codes are stored as numbers so spreadsheets sort them numerically.
                (3, Some(code), _) | (5, _, Some(code)) => {
                    sheet.write_number(line, col, f64::from(code))?;
                }
                _ => {
                    sheet.write_string(line, col, cell)?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}
