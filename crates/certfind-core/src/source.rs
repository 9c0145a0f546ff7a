//! # Catalog Sources
//!
//! The boundary between a tabular catalog resource and the Catalog Store.
//!
//! A source yields ordered rows of optional text cells, header first. It does
//! not interpret the cells; column layout and value rules belong to
//! [`crate::CatalogStore::load`].

use crate::primitives::{CATALOG_HEADER, MAX_SOURCE_FILE_SIZE};
use crate::types::CatalogLoadError;
use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};

/// One source row. `None` marks an absent cell.
pub type RawRow = Vec<Option<String>>;

/// A readable, ordered, row-oriented catalog resource.
///
/// Implementors must be pure readers: reading twice yields the same rows.
pub trait CatalogSource: Send + Sync {
    /// Human-readable origin, used in log events.
    fn describe(&self) -> String;

    /// Read every row, header included.
    fn read_rows(&self) -> Result<Vec<RawRow>, CatalogLoadError>;
}

// =============================================================================
// IN-MEMORY SOURCE
// =============================================================================

/// Rows already held in memory, e.g. parsed by an external spreadsheet reader.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    rows: Vec<RawRow>,
}

impl InMemorySource {
    /// Wrap rows as given; the first row is the header.
    #[must_use]
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }

    /// Build a source from text data rows, prepending the standard header.
    ///
    /// Empty strings become absent cells.
    #[must_use]
    pub fn with_header<R, S>(data_rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let header: RawRow = CATALOG_HEADER
            .iter()
            .map(|label| Some((*label).to_string()))
            .collect();
        let rows = std::iter::once(header)
            .chain(data_rows.into_iter().map(|row| {
                row.into_iter()
                    .map(|cell| {
                        let cell = cell.as_ref();
                        (!cell.is_empty()).then(|| cell.to_string())
                    })
                    .collect::<RawRow>()
            }))
            .collect();
        Self { rows }
    }
}

impl CatalogSource for InMemorySource {
    fn describe(&self) -> String {
        format!("in-memory ({} rows)", self.rows.len())
    }

    fn read_rows(&self) -> Result<Vec<RawRow>, CatalogLoadError> {
        Ok(self.rows.clone())
    }
}

// =============================================================================
// JSON ROWS FILE
// =============================================================================

/// A JSON file holding an array of row arrays, header first.
///
/// Cells may be strings, numbers, booleans or `null`.
///
/// ```json
/// [
///   ["Name", "Subject Area", "Organization", "Cost", "Location", "Link"],
///   ["Azure Security", "Cybersecurity", "Microsoft", 165, "Online", "https://..."]
/// ]
/// ```
#[derive(Debug, Clone)]
pub struct JsonRowsFile {
    path: PathBuf,
}

impl JsonRowsFile {
    /// Refer to a catalog file; nothing is read until [`CatalogSource::read_rows`].
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonRowsFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_rows(&self) -> Result<Vec<RawRow>, CatalogLoadError> {
        let metadata = std::fs::metadata(&self.path).map_err(|e| {
            CatalogLoadError::Unreadable(format!("{}: {}", self.path.display(), e))
        })?;
        if !metadata.is_file() {
            return Err(CatalogLoadError::Unreadable(format!(
                "{}: not a regular file",
                self.path.display()
            )));
        }
        if metadata.len() > MAX_SOURCE_FILE_SIZE {
            return Err(CatalogLoadError::Unreadable(format!(
                "{}: file size {} bytes exceeds maximum allowed {} bytes",
                self.path.display(),
                metadata.len(),
                MAX_SOURCE_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            CatalogLoadError::Unreadable(format!("{}: {}", self.path.display(), e))
        })?;
        let table: Vec<Vec<JsonValue>> = serde_json::from_str(&text)
            .map_err(|e| CatalogLoadError::Malformed(format!("{}: {}", self.path.display(), e)))?;

        table
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(column, cell)| json_cell(cell, index + 1, column + 1))
                    .collect::<Result<RawRow, _>>()
            })
            .collect()
    }
}

/// Convert one JSON cell to text.
fn json_cell(cell: JsonValue, row: usize, column: usize) -> Result<Option<String>, CatalogLoadError> {
    match cell {
        JsonValue::Null => Ok(None),
        JsonValue::String(text) => Ok(Some(text)),
        JsonValue::Number(number) => Ok(Some(number.to_string())),
        JsonValue::Bool(flag) => Ok(Some(flag.to_string())),
        JsonValue::Array(_) | JsonValue::Object(_) => Err(CatalogLoadError::Malformed(format!(
            "row {row}, column {column}: nested value is not a cell"
        ))),
    }
}

// =============================================================================
// TESTS
// =============================================================================
