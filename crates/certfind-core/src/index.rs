//! # Index Builder
//!
//! Distinct subject areas and organizations, derived once from the catalog.
//!
//! Lists keep first-seen catalog order; membership sets are `BTreeSet`s so
//! lookups never depend on hashing. Blank cells are not indexed.

use crate::catalog::CatalogStore;
use crate::primitives::ANY_ORGANIZATION;
use std::collections::BTreeSet;

/// Selection options and known values for query criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogIndex {
    subject_areas: Vec<String>,
    organization_options: Vec<String>,
    known_subject_areas: BTreeSet<String>,
    known_organizations: BTreeSet<String>,
}

impl CatalogIndex {
    /// Build both indexes in one pass over the catalog.
    #[must_use]
    pub fn build(catalog: &CatalogStore) -> Self {
        let mut index = Self {
            organization_options: vec![ANY_ORGANIZATION.to_string()],
            ..Self::default()
        };

        for record in catalog {
            if insert_distinct(&mut index.known_subject_areas, &record.subject_area) {
                index.subject_areas.push(record.subject_area.clone());
            }
            // A catalog organization spelled like the wildcard label is
            // reachable only through the wildcard; do not list it twice.
            if record.organization != ANY_ORGANIZATION
                && insert_distinct(&mut index.known_organizations, &record.organization)
            {
                index.organization_options.push(record.organization.clone());
            }
        }

        index
    }

    /// Distinct subject areas in first-seen order.
    #[must_use]
    pub fn subject_areas(&self) -> &[String] {
        &self.subject_areas
    }

    /// The wildcard label followed by distinct organizations in first-seen order.
    #[must_use]
    pub fn organization_options(&self) -> &[String] {
        &self.organization_options
    }

    /// Check if a subject area occurs in the catalog.
    #[must_use]
    pub fn contains_subject_area(&self, subject_area: &str) -> bool {
        self.known_subject_areas.contains(subject_area)
    }

    /// Check if an organization occurs in the catalog.
    #[must_use]
    pub fn contains_organization(&self, organization: &str) -> bool {
        self.known_organizations.contains(organization)
    }
}

/// Distinct subject areas of a catalog, first-seen order.
#[must_use]
pub fn distinct_subject_areas(catalog: &CatalogStore) -> Vec<String> {
    CatalogIndex::build(catalog).subject_areas
}

/// Distinct organizations of a catalog, first-seen order, with the
/// wildcard label prepended.
#[must_use]
pub fn distinct_organizations(catalog: &CatalogStore) -> Vec<String> {
    CatalogIndex::build(catalog).organization_options
}

/// Record a non-blank value; returns `true` if it was not seen before.
fn insert_distinct(seen: &mut BTreeSet<String>, value: &str) -> bool {
    !value.is_empty() && seen.insert(value.to_string())
}

// =============================================================================
// TESTS
// =============================================================================
