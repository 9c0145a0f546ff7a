//! # Catalog Store
//!
//! The ordered, read-only sequence of certificate records.
//!
//! - Loaded once from a [`CatalogSource`]; never mutated afterwards
//! - Rejects structurally malformed sources as a whole (no partial catalog)
//! - Record ids are 1-based positions, so `record_at` is O(1)

use crate::cost::Cost;
use crate::primitives::{CATALOG_COLUMNS, MAX_CATALOG_ROWS};
use crate::source::{CatalogSource, RawRow};
use crate::types::{CatalogLoadError, CertificateRecord, Location, RecordId};
use tracing::{debug, info};

/// The loaded catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStore {
    records: Vec<CertificateRecord>,
}

impl CatalogStore {
    /// Load every record from a source.
    ///
    /// The first row is the header and is skipped after its width is checked.
    /// Data rows whose cells are all blank (at any width) are skipped without
    /// consuming an id.
    ///
    /// # Errors
    /// Returns `CatalogLoadError` if the source cannot be read, has no header,
    /// has a row narrower than the catalog layout, or holds a row whose name,
    /// cost or location cell is invalid.
    pub fn load<S: CatalogSource + ?Sized>(source: &S) -> Result<Self, CatalogLoadError> {
        let rows = source.read_rows()?;
        let mut rows = rows.into_iter();

        let header = rows.next().ok_or(CatalogLoadError::MissingHeader)?;
        layout_cells(&header, 1)?;

        let mut records = Vec::new();
        for (offset, row) in rows.enumerate() {
            // Header is source row 1.
            let row_number = offset + 2;

            if is_blank(&row) {
                debug!(row = row_number, "skipping blank catalog row");
                continue;
            }
            let cells = layout_cells(&row, row_number)?;
            if records.len() >= MAX_CATALOG_ROWS {
                return Err(CatalogLoadError::TooLarge {
                    limit: MAX_CATALOG_ROWS,
                });
            }

            let id = RecordId::from_position(records.len());
            records.push(parse_record(id, cells, row_number)?);
        }

        info!(
            source = %source.describe(),
            records = records.len(),
            "catalog loaded"
        );
        Ok(Self { records })
    }

    /// Look up a record by id.
    #[must_use]
    pub fn record_at(&self, id: RecordId) -> Option<&CertificateRecord> {
        self.records.get(id.position()?)
    }

    /// Iterate over all records in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, CertificateRecord> {
        self.records.iter()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The highest cost present in the catalog, if any record has one.
    #[must_use]
    pub fn max_cost(&self) -> Option<Cost> {
        self.records.iter().filter_map(|record| record.cost).max()
    }
}

impl<'a> IntoIterator for &'a CatalogStore {
    type Item = &'a CertificateRecord;
    type IntoIter = std::slice::Iter<'a, CertificateRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// ROW PARSING
// =============================================================================

fn is_blank(row: &RawRow) -> bool {
    row.iter()
        .all(|cell| cell.as_deref().is_none_or(|text| text.trim().is_empty()))
}

/// The trimmed layout cells of a row; absent cells read as empty.
///
/// Cells beyond the layout are ignored.
fn layout_cells(row: &RawRow, row_number: usize) -> Result<[&str; CATALOG_COLUMNS], CatalogLoadError> {
    let missing = CatalogLoadError::MissingColumns {
        row: row_number,
        expected: CATALOG_COLUMNS,
        found: row.len(),
    };
    let cells: Vec<&str> = row
        .iter()
        .take(CATALOG_COLUMNS)
        .map(|cell| cell.as_deref().map_or("", str::trim))
        .collect();
    cells.try_into().map_err(|_| missing)
}

fn parse_record(
    id: RecordId,
    cells: [&str; CATALOG_COLUMNS],
    row: usize,
) -> Result<CertificateRecord, CatalogLoadError> {
    let [name, subject_area, organization, cost, location, link] = cells;

    if name.is_empty() {
        return Err(CatalogLoadError::EmptyName { row });
    }

    let cost = if cost.is_empty() {
        None
    } else {
        let parsed = Cost::parse_exact(cost).ok_or_else(|| CatalogLoadError::InvalidCost {
            row,
            value: cost.to_string(),
        })?;
        Some(parsed)
    };

    let location = Location::parse(location).ok_or_else(|| CatalogLoadError::InvalidLocation {
        row,
        value: location.to_string(),
    })?;

    Ok(CertificateRecord {
        id,
        name: name.to_string(),
        subject_area: subject_area.to_string(),
        organization: organization.to_string(),
        cost,
        location,
        link: link.to_string(),
    })
}

// =============================================================================
// TESTS
// =============================================================================
