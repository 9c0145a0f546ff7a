//! # Query Contract Tests (T0-T3)
//!
//! If ANY tier fails, the engine is INVALID.
//!
//! ## Tiers
//! - T0: Catalog Integrity
//! - T1: Criteria Normalization
//! - T2: Matching
//! - T3: Presentation Boundary

use certfind_core::{
    CatalogLoadError, CatalogStore, Cost, Finder, FinderConfig, InMemorySource, JsonRowsFile,
    MatchResult, RawCriteria, RecordId,
};
use std::io::Write;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("certfind_core=debug")
        .with_test_writer()
        .try_init();
}

fn single_record_finder() -> Finder {
    let source = InMemorySource::with_header([[
        "AZ-500",
        "Cybersecurity",
        "Microsoft",
        "100",
        "Online",
        "https://learn.microsoft.com/credentials/az-500",
    ]]);
    Finder::load(&source, FinderConfig::default()).expect("finder")
}

// =============================================================================
// TIER T0: CATALOG INTEGRITY
// =============================================================================

mod t0_catalog_integrity {
    use super::*;

    /// T0.1: Records keep source order and 1-based ids.
    #[test]
    fn ids_follow_source_order() {
        let source = InMemorySource::with_header([
            ["A", "Data", "Org", "1", "Online", ""],
            ["B", "Data", "Org", "2", "Online", ""],
        ]);
        let catalog = CatalogStore::load(&source).expect("load");

        let names: Vec<_> = catalog.iter().map(|r| (r.id, r.name.as_str())).collect();
        assert_eq!(names, vec![(RecordId(1), "A"), (RecordId(2), "B")]);
    }

    /// T0.2: A malformed source serves no partial catalog.
    #[test]
    fn malformed_row_fails_whole_load() {
        let source = InMemorySource::with_header([
            vec!["A", "Data", "Org", "1", "Online", ""],
            vec!["B", "Data", "Org"],
        ]);
        let result = Finder::load(&source, FinderConfig::default());
        assert!(matches!(
            result,
            Err(CatalogLoadError::MissingColumns { row: 3, .. })
        ));
    }

    /// T0.3: A missing file is a load error, not a panic.
    #[test]
    fn missing_file_is_load_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = JsonRowsFile::new(dir.path().join("catalog.json"));
        assert!(matches!(
            CatalogStore::load(&source),
            Err(CatalogLoadError::Unreadable(_))
        ));
    }
}

// =============================================================================
// TIER T1: CRITERIA NORMALIZATION
// =============================================================================

mod t1_normalization {
    use super::*;

    /// T1.1: Non-numeric cost text is an error, never Empty or Matches.
    #[test]
    fn non_numeric_cost_is_error() {
        let finder = single_record_finder();
        for raw in ["abc", "", "12x", "xyz"] {
            let result = finder.submit_query(&RawCriteria::new("Cybersecurity", "All", raw, "Either"));
            assert!(result.is_error(), "cost {raw:?}");
        }
    }

    /// T1.2: Negative and exponent costs are numbers, not errors.
    #[test]
    fn signed_and_exponent_costs_are_numbers() {
        let finder = single_record_finder();
        let submit = |raw: &str| {
            finder.submit_query(&RawCriteria::new("Cybersecurity", "All", raw, "Either"))
        };

        assert_eq!(submit("-5"), MatchResult::Empty);
        assert_eq!(submit("-0"), MatchResult::Empty);
        assert_eq!(submit("1e3"), MatchResult::Matches(vec![RecordId(1)]));
        assert_eq!(submit("1E2"), MatchResult::Matches(vec![RecordId(1)]));
        assert_eq!(submit("inf"), MatchResult::Matches(vec![RecordId(1)]));
    }

    /// T1.3: Cost keywords resolve before parsing.
    #[test]
    fn keywords_resolve() {
        let finder = single_record_finder();
        let free = finder.submit_query(&RawCriteria::new("Cybersecurity", "All", "Free", "Either"));
        let any = finder.submit_query(&RawCriteria::new("Cybersecurity", "All", "Any", "Either"));

        assert_eq!(free, MatchResult::Empty);
        assert_eq!(any, MatchResult::Matches(vec![RecordId(1)]));
    }

    /// T1.4: Configured ceiling bounds the `Any` keyword.
    #[test]
    fn any_respects_configured_ceiling() {
        let source = InMemorySource::with_header([["A", "Data", "Org", "2500", "Online", ""]]);
        let config = FinderConfig::from_toml_str("cost_ceiling = 3000").expect("config");
        let finder = Finder::load(&source, config).expect("finder");

        let result = finder.submit_query(&RawCriteria::new("Data", "All", "Any", "Either"));
        assert_eq!(result, MatchResult::Matches(vec![RecordId(1)]));

        let default = Finder::load(&source, FinderConfig::default()).expect("finder");
        let result = default.submit_query(&RawCriteria::new("Data", "All", "Any", "Either"));
        assert_eq!(result, MatchResult::Empty);
    }
}

// =============================================================================
// TIER T2: MATCHING
// =============================================================================

mod t2_matching {
    use super::*;

    /// T2.1: Matching cost ceiling returns the record.
    #[test]
    fn ceiling_at_cost_matches() {
        let result = single_record_finder()
            .submit_query(&RawCriteria::new("Cybersecurity", "All", "100", "Either"));
        assert_eq!(result, MatchResult::Matches(vec![RecordId(1)]));
    }

    /// T2.2: Ceiling below the cost is the empty outcome.
    #[test]
    fn ceiling_below_cost_is_empty() {
        let result = single_record_finder()
            .submit_query(&RawCriteria::new("Cybersecurity", "All", "50", "Either"));
        assert_eq!(result, MatchResult::Empty);
    }

    /// T2.3: Unknown criteria are empty, not errors.
    #[test]
    fn unknown_criteria_are_empty() {
        init_tracing();
        let finder = single_record_finder();

        let subject = finder.submit_query(&RawCriteria::new("Gardening", "All", "Any", "Either"));
        let org = finder.submit_query(&RawCriteria::new("Cybersecurity", "Oracle", "Any", "Either"));

        assert_eq!(subject, MatchResult::Empty);
        assert_eq!(org, MatchResult::Empty);
    }

    /// T2.4: Records with blank index cells stay reachable.
    #[test]
    fn unindexed_values_still_match() {
        let source = InMemorySource::with_header([["A", "Data", "", "10", "Online", ""]]);
        let finder = Finder::load(&source, FinderConfig::default()).expect("finder");

        assert_eq!(finder.organization_options(), ["All"]);
        let result = finder.submit_query(&RawCriteria::new("Data", "", "Any", "Either"));
        assert_eq!(result, MatchResult::Matches(vec![RecordId(1)]));
    }
}

// =============================================================================
// TIER T3: PRESENTATION BOUNDARY
// =============================================================================

mod t3_boundary {
    use super::*;

    /// T3.1: A JSON catalog file drives the full query path.
    #[test]
    fn json_catalog_end_to_end() {
        init_tracing();
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(
            file,
            r#"[
                ["Name", "Subject Area", "Organization", "Cost", "Location", "Link"],
                ["CCNA", "Networking", "Cisco", 300, "Both", "https://www.cisco.com/ccna"],
                ["Network+", "Networking", "CompTIA", 358, "Online", "https://www.comptia.org/network"],
                ["Security+", "Cybersecurity", "CompTIA", 392, "Online", "https://www.comptia.org/security"],
                [null, null, null, null, null, null]
            ]"#
        )
        .expect("write");

        let finder = Finder::load(&JsonRowsFile::new(file.path()), FinderConfig::default())
            .expect("finder");

        assert_eq!(finder.catalog().len(), 3);
        assert_eq!(finder.subject_area_options(), ["Networking", "Cybersecurity"]);
        assert_eq!(finder.organization_options(), ["All", "Cisco", "CompTIA"]);

        let result = finder.submit_query(&RawCriteria::new("Networking", "All", "500", "In-Person"));
        assert_eq!(result, MatchResult::Matches(vec![RecordId(1)]));

        let fields = finder.project(result.ids());
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "CCNA");
        assert_eq!(fields[0].cost, Cost::from_units(300));
        assert_eq!(fields[0].link, "https://www.cisco.com/ccna");
    }

    /// T3.2: Display fields are available for every matched id.
    #[test]
    fn every_match_projects() {
        let finder = single_record_finder();
        let result = finder.submit_query(&RawCriteria::new("Cybersecurity", "Microsoft", "Any", "Online"));

        for id in result.ids() {
            assert!(finder.display_fields(*id).is_some());
        }
        assert_eq!(finder.project(result.ids()).len(), result.ids().len());
    }

    /// T3.3: Outcomes serialize with a tag the presentation layer branches on.
    #[test]
    fn outcome_tags() {
        let finder = single_record_finder();
        let error = finder.submit_query(&RawCriteria::new("Cybersecurity", "All", "xyz", "Either"));

        let json = serde_json::to_value(&error).expect("json");
        assert_eq!(json["outcome"], "error");
        assert_eq!(json["detail"]["raw"], "xyz");
    }
}
