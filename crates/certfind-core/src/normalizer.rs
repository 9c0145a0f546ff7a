//! # Criteria Normalizer
//!
//! Turns raw user-entered criteria into a typed [`Query`].
//!
//! - Cost keywords resolve first: `Free` → 0, `Any` → the configured ceiling
//! - Any other cost text must parse as a number; a negative one admits nothing
//! - That parse is the only failure on the query path; unknown subject areas,
//!   organizations or locations still produce a query (and zero matches)

use crate::config::FinderConfig;
use crate::cost::{Cost, CostBound};
use crate::primitives::{ANY_COST, ANY_ORGANIZATION, EITHER_LOCATION, FREE_COST};
use crate::types::{
    InvalidCostError, Location, LocationFilter, OrganizationFilter, Query, RawCriteria,
    location_key,
};
use tracing::debug;

/// Validates criteria against a fixed cost ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    cost_ceiling: Cost,
}

impl Default for Normalizer {
    fn default() -> Self {
        FinderConfig::default().normalizer()
    }
}

impl Normalizer {
    /// Create a normalizer whose `Any` cost keyword resolves to `cost_ceiling`.
    #[must_use]
    pub const fn new(cost_ceiling: Cost) -> Self {
        Self { cost_ceiling }
    }

    /// The ceiling `Any` resolves to.
    #[must_use]
    pub const fn cost_ceiling(&self) -> Cost {
        self.cost_ceiling
    }

    /// Normalize four raw criteria.
    ///
    /// Subject area and organization are trimmed but otherwise kept verbatim.
    ///
    /// # Errors
    /// Returns `InvalidCostError` if `raw_cost` is neither a keyword nor a
    /// number.
    pub fn normalize(
        &self,
        raw_subject_area: &str,
        raw_organization: &str,
        raw_cost: &str,
        raw_location: &str,
    ) -> Result<Query, InvalidCostError> {
        let max_cost = self.resolve_cost(raw_cost)?;

        Ok(Query {
            subject_area: raw_subject_area.trim().to_string(),
            organization: normalize_organization(raw_organization),
            max_cost,
            location: normalize_location(raw_location),
        })
    }

    /// Normalize a bundled set of raw criteria.
    pub fn normalize_criteria(&self, raw: &RawCriteria) -> Result<Query, InvalidCostError> {
        self.normalize(
            &raw.subject_area,
            &raw.organization,
            &raw.cost,
            &raw.location,
        )
    }

    /// Resolve the cost criterion to an inclusive ceiling.
    pub fn resolve_cost(&self, raw_cost: &str) -> Result<CostBound, InvalidCostError> {
        match raw_cost.trim() {
            FREE_COST => Ok(CostBound::AtMost(Cost::ZERO)),
            ANY_COST => Ok(CostBound::AtMost(self.cost_ceiling)),
            text => Cost::parse_bound(text).ok_or_else(|| {
                debug!(raw_cost, "rejected non-numeric cost criterion");
                InvalidCostError {
                    raw: raw_cost.to_string(),
                }
            }),
        }
    }
}

/// Map the organization label to a filter; the wildcard label means any.
#[must_use]
pub fn normalize_organization(raw: &str) -> OrganizationFilter {
    match raw.trim() {
        ANY_ORGANIZATION => OrganizationFilter::Any,
        name => OrganizationFilter::Exact(name.to_string()),
    }
}

/// Map the location label to a filter.
///
/// `Either` is the wildcard. `Both` is a record-side value, so as a request it
/// is treated like any other unlisted label.
#[must_use]
pub fn normalize_location(raw: &str) -> LocationFilter {
    if location_key(raw) == location_key(EITHER_LOCATION) {
        return LocationFilter::Either;
    }
    match Location::parse(raw) {
        Some(Location::Online) => LocationFilter::Online,
        Some(Location::InPerson) => LocationFilter::InPerson,
        Some(Location::Both) | None => LocationFilter::Unlisted(raw.trim().to_string()),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn units(n: u64) -> Cost {
        Cost::from_units(n).expect("units")
    }

    fn at_most(n: u64) -> Result<CostBound, InvalidCostError> {
        Ok(CostBound::AtMost(units(n)))
    }

    #[test]
    fn free_resolves_to_zero() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.resolve_cost("Free"), at_most(0));
        assert_eq!(normalizer.resolve_cost("Free"), normalizer.resolve_cost("0"));
    }

    #[test]
    fn any_resolves_to_ceiling() {
        let normalizer = Normalizer::new(units(750));
        assert_eq!(normalizer.resolve_cost("Any"), at_most(750));
        assert_eq!(normalizer.resolve_cost("Any"), normalizer.resolve_cost("750"));
    }

    #[test]
    fn default_ceiling_is_two_thousand() {
        assert_eq!(Normalizer::default().cost_ceiling(), units(2000));
    }

    #[test]
    fn keywords_are_case_sensitive() {
        let normalizer = Normalizer::default();
        assert!(normalizer.resolve_cost("free").is_err());
        assert!(normalizer.resolve_cost("ANY").is_err());
    }

    #[test]
    fn numeric_cost_parses() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.resolve_cost(" 250 "), at_most(250));
        assert_eq!(
            normalizer.resolve_cost("99.99"),
            Ok(CostBound::AtMost(Cost::from_cents(9_999)))
        );
        assert_eq!(normalizer.resolve_cost("1e3"), at_most(1000));
        assert_eq!(normalizer.resolve_cost("-0"), at_most(0));
    }

    #[test]
    fn negative_cost_is_a_bound_not_an_error() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.resolve_cost("-5"), Ok(CostBound::Unsatisfiable));
        assert_eq!(normalizer.resolve_cost(" -inf "), Ok(CostBound::Unsatisfiable));
    }

    #[test]
    fn invalid_cost_keeps_raw_text() {
        let normalizer = Normalizer::default();
        for raw in ["abc", "", "12x", "1e", "--5"] {
            let err = normalizer.resolve_cost(raw).expect_err("invalid");
            assert_eq!(err.raw, raw);
        }
    }

    #[test]
    fn normalize_builds_query() {
        let query = Normalizer::default()
            .normalize(" Cybersecurity ", "Microsoft", "100", "Online")
            .expect("query");

        assert_eq!(query.subject_area(), "Cybersecurity");
        assert_eq!(
            query.organization(),
            &OrganizationFilter::Exact("Microsoft".into())
        );
        assert_eq!(query.max_cost(), CostBound::AtMost(units(100)));
        assert_eq!(query.location(), &LocationFilter::Online);
    }

    #[test]
    fn normalize_fails_only_on_cost() {
        let normalizer = Normalizer::default();
        assert!(normalizer.normalize("Unknown", "Nobody", "Any", "Mars").is_ok());
        assert!(normalizer.normalize("Cybersecurity", "All", "xyz", "Either").is_err());
    }

    #[test]
    fn organization_wildcard() {
        assert_eq!(normalize_organization("All"), OrganizationFilter::Any);
        assert_eq!(
            normalize_organization("all"),
            OrganizationFilter::Exact("all".into())
        );
    }

    #[test]
    fn location_filters() {
        assert_eq!(normalize_location("Either"), LocationFilter::Either);
        assert_eq!(normalize_location("Online"), LocationFilter::Online);
        assert_eq!(normalize_location("In-Person"), LocationFilter::InPerson);
        assert_eq!(normalize_location("InPerson"), LocationFilter::InPerson);
        assert_eq!(
            normalize_location("Both"),
            LocationFilter::Unlisted("Both".into())
        );
        assert_eq!(
            normalize_location("Mars"),
            LocationFilter::Unlisted("Mars".into())
        );
    }

    #[test]
    fn criteria_bundle_matches_positional_call() {
        let normalizer = Normalizer::default();
        let raw = RawCriteria::new("Networking", "All", "Free", "Either");
        assert_eq!(
            normalizer.normalize_criteria(&raw),
            normalizer.normalize("Networking", "All", "Free", "Either")
        );
    }
}
