//! # Result Projector
//!
//! Maps matched ids back to the fields a presentation layer renders.

use crate::catalog::CatalogStore;
use crate::types::{CertificateRecord, DisplayFields, RecordId};

impl From<&CertificateRecord> for DisplayFields {
    fn from(record: &CertificateRecord) -> Self {
        Self {
            name: record.name.clone(),
            cost: record.cost,
            location: record.location,
            link: record.link.clone(),
        }
    }
}

/// Display fields for one record, if the id exists.
#[must_use]
pub fn display_fields(catalog: &CatalogStore, id: RecordId) -> Option<DisplayFields> {
    catalog.record_at(id).map(DisplayFields::from)
}

/// Display fields for each id, in the given order.
///
/// Ids that name no record are skipped.
#[must_use]
pub fn project(catalog: &CatalogStore, ids: &[RecordId]) -> Vec<DisplayFields> {
    ids.iter()
        .filter_map(|&id| display_fields(catalog, id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::Cost;
    use crate::source::InMemorySource;
    use crate::types::Location;

    fn catalog() -> CatalogStore {
        let source = InMemorySource::with_header([
            ["CCNA", "Networking", "Cisco", "300", "Both", "https://cisco.com/ccna"],
            ["Network+", "Networking", "CompTIA", "358", "Online", ""],
        ]);
        CatalogStore::load(&source).expect("load")
    }

    #[test]
    fn project_preserves_order() {
        let fields = project(&catalog(), &[RecordId(2), RecordId(1)]);
        let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Network+", "CCNA"]);
    }

    #[test]
    fn display_fields_copy_record_values() {
        let fields = display_fields(&catalog(), RecordId(1)).expect("fields");
        assert_eq!(
            fields,
            DisplayFields {
                name: "CCNA".into(),
                cost: Cost::from_units(300),
                location: Location::Both,
                link: "https://cisco.com/ccna".into(),
            }
        );
    }

    #[test]
    fn unknown_ids_are_skipped() {
        assert!(display_fields(&catalog(), RecordId(9)).is_none());
        assert_eq!(project(&catalog(), &[RecordId(9), RecordId(2)]).len(), 1);
    }
}
