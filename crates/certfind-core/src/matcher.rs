//! # Match Engine
//!
//! Evaluates a normalized [`Query`] against every catalog record.
//!
//! A record matches iff all four field predicates hold:
//! 1. subject area equals the query's, exactly
//! 2. the query's organization is the wildcard, or equals the record's
//! 3. the record has a cost and it is at most the query ceiling
//! 4. the query location is `Either`, the record is offered `Both` ways, or
//!    the two locations are equal
//!
//! Matches come back in catalog order, each id once.

use crate::catalog::CatalogStore;
use crate::types::{
    CertificateRecord, Location, LocationFilter, MatchResult, OrganizationFilter, Query, RecordId,
};

/// The conjunctive filter over the catalog.
pub struct MatchEngine;

impl MatchEngine {
    /// Ids of every matching record, in catalog order.
    #[must_use]
    pub fn matching_ids(catalog: &CatalogStore, query: &Query) -> Vec<RecordId> {
        catalog
            .iter()
            .filter(|record| Self::record_matches(record, query))
            .map(|record| record.id)
            .collect()
    }

    /// Run a query and classify the outcome as `Empty` or `Matches`.
    #[must_use]
    pub fn run(catalog: &CatalogStore, query: &Query) -> MatchResult {
        MatchResult::from_ids(Self::matching_ids(catalog, query))
    }

    /// Check a single record against a query.
    #[must_use]
    pub fn record_matches(record: &CertificateRecord, query: &Query) -> bool {
        record.subject_area == query.subject_area
            && organization_matches(&query.organization, &record.organization)
            && record.cost.is_some_and(|cost| query.max_cost.admits(cost))
            && location_matches(&query.location, record.location)
    }
}

fn organization_matches(filter: &OrganizationFilter, organization: &str) -> bool {
    match filter {
        OrganizationFilter::Any => true,
        OrganizationFilter::Exact(name) => name == organization,
    }
}

fn location_matches(filter: &LocationFilter, location: Location) -> bool {
    match (filter, location) {
        (LocationFilter::Either, _) | (_, Location::Both) => true,
        (LocationFilter::Online, Location::Online) => true,
        (LocationFilter::InPerson, Location::InPerson) => true,
        _ => false,
    }
}

// =============================================================================
// TESTS
// =============================================================================
