//! # Core Type Definitions
//!
//! This module contains all core types for the certfind query engine:
//! - Catalog rows (`RecordId`, `Location`, `CertificateRecord`)
//! - Normalized request (`RawCriteria`, `Query`, `OrganizationFilter`, `LocationFilter`)
//! - Outputs (`MatchResult`, `DisplayFields`)
//! - Error types (`CatalogLoadError`, `InvalidCostError`, `LinkError`, `ConfigError`)
//!
//! ## Guarantees
//!
//! - Records are immutable once loaded; ids are 1-based catalog positions
//! - A `Query` only exists after its cost criterion has been validated
//! - `MatchResult` tells "no match" apart from "invalid input" without
//!   inspecting any sequence

use crate::cost::{Cost, CostBound};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// RECORD IDENTIFIER
// =============================================================================

/// Stable identifier of a catalog record: its 1-based position in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl RecordId {
    /// Identifier of the record stored at a 0-based catalog position.
    #[must_use]
    pub const fn from_position(position: usize) -> Self {
        Self(position as u64 + 1)
    }

    /// The 0-based catalog position, or `None` for id 0.
    #[must_use]
    pub fn position(self) -> Option<usize> {
        usize::try_from(self.0).ok()?.checked_sub(1)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// LOCATION
// =============================================================================

/// How a certificate program is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Location {
    Online,
    #[serde(rename = "In-Person")]
    InPerson,
    /// Offered both online and in person; satisfies every location request.
    Both,
}

impl Location {
    /// Parse a location label.
    ///
    /// Case, spaces, hyphens and underscores are ignored, so `"In-Person"`,
    /// `"in person"` and `"InPerson"` are all [`Location::InPerson`].
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match location_key(text).as_str() {
            "online" => Some(Self::Online),
            "inperson" => Some(Self::InPerson),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    /// Label shown to users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::InPerson => "In-Person",
            Self::Both => "Both",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Comparison key for location labels.
pub(crate) fn location_key(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | ' ' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

// =============================================================================
// CERTIFICATE RECORD
// =============================================================================

/// One row of the catalog.
///
/// Created once at load time and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    /// 1-based catalog position.
    pub id: RecordId,
    /// Certificate name (never empty).
    pub name: String,
    /// Subject area; empty when the source cell was blank.
    pub subject_area: String,
    /// Issuing organization; empty when the source cell was blank.
    pub organization: String,
    /// Price. `None` never satisfies a cost ceiling.
    pub cost: Option<Cost>,
    /// Delivery mode.
    pub location: Location,
    /// Registration URL; may be empty.
    pub link: String,
}

// =============================================================================
// CRITERIA & QUERY
// =============================================================================

/// Criteria exactly as the user entered them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCriteria {
    pub subject_area: String,
    pub organization: String,
    pub cost: String,
    pub location: String,
}

impl RawCriteria {
    /// Bundle the four raw fields.
    #[must_use]
    pub fn new(
        subject_area: impl Into<String>,
        organization: impl Into<String>,
        cost: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            subject_area: subject_area.into(),
            organization: organization.into(),
            cost: cost.into(),
            location: location.into(),
        }
    }
}

/// Organization constraint of a query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrganizationFilter {
    /// Wildcard: no constraint.
    Any,
    /// Exact, case-sensitive organization name.
    Exact(String),
}

/// Location constraint of a query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationFilter {
    Online,
    InPerson,
    /// Wildcard: no constraint.
    Either,
    /// A label that names no known delivery mode.
    ///
    /// Only records offered `Both` ways satisfy it.
    Unlisted(String),
}

/// A validated, typed search request.
///
/// Only [`crate::Normalizer`] constructs queries, so a `Query` never carries
/// an unparsed cost.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    pub(crate) subject_area: String,
    pub(crate) organization: OrganizationFilter,
    pub(crate) max_cost: CostBound,
    pub(crate) location: LocationFilter,
}

impl Query {
    /// Subject area to match exactly.
    #[must_use]
    pub fn subject_area(&self) -> &str {
        &self.subject_area
    }

    /// Organization constraint.
    #[must_use]
    pub fn organization(&self) -> &OrganizationFilter {
        &self.organization
    }

    /// Inclusive cost ceiling.
    #[must_use]
    pub const fn max_cost(&self) -> CostBound {
        self.max_cost
    }

    /// Location constraint.
    #[must_use]
    pub fn location(&self) -> &LocationFilter {
        &self.location
    }
}

// =============================================================================
// OUTPUTS
// =============================================================================

/// Outcome of a submitted query.
///
/// The three variants are mutually exclusive; `Matches` is never empty.
/// Serialize-only: outcomes are produced by the engine, never read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum MatchResult {
    /// The cost criterion could not be read as a number.
    Error(InvalidCostError),
    /// Well-formed query, zero records satisfy it.
    Empty,
    /// Matching record ids in catalog order.
    Matches(Vec<RecordId>),
}

impl MatchResult {
    /// Classify a match sequence as `Empty` or `Matches`.
    #[must_use]
    pub fn from_ids(ids: Vec<RecordId>) -> Self {
        if ids.is_empty() {
            Self::Empty
        } else {
            Self::Matches(ids)
        }
    }

    /// Matching ids; empty for `Error` and `Empty`.
    #[must_use]
    pub fn ids(&self) -> &[RecordId] {
        match self {
            Self::Matches(ids) => ids,
            Self::Error(_) | Self::Empty => &[],
        }
    }

    /// Check if this is the invalid-input outcome.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// The fields the presentation layer renders for one result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFields {
    pub name: String,
    pub cost: Option<Cost>,
    pub location: Location,
    pub link: String,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// The catalog source could not be turned into a catalog.
///
/// Fatal at startup: no partial catalog is ever served.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The source could not be read.
    #[error("Catalog source unreadable: {0}")]
    Unreadable(String),

    /// The source was read but could not be decoded into rows.
    #[error("Catalog source malformed: {0}")]
    Malformed(String),

    /// The source holds no rows at all, not even a header.
    #[error("Catalog source has no header row")]
    MissingHeader,

    /// A row is narrower than the catalog layout.
    #[error("Row {row}: expected {expected} columns, found {found}")]
    MissingColumns {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A data row has no certificate name.
    #[error("Row {row}: certificate name is empty")]
    EmptyName { row: usize },

    /// A data row has a cost cell that is not an exact amount.
    #[error("Row {row}: invalid cost '{value}'")]
    InvalidCost { row: usize, value: String },

    /// A data row has an unknown delivery mode.
    #[error("Row {row}: invalid location '{value}'")]
    InvalidLocation { row: usize, value: String },

    /// The catalog holds more records than the engine accepts.
    #[error("Catalog exceeds {limit} records")]
    TooLarge { limit: usize },
}

/// The raw cost criterion is not a number after keyword resolution.
///
/// Recoverable: the user corrects the value and submits again.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("Cost must be a numerical value, got '{raw}'")]
pub struct InvalidCostError {
    /// The rejected input, verbatim.
    pub raw: String,
}

/// A result link could not be handed to the external opener.
#[derive(Debug, Error)]
pub enum LinkError {
    /// The record has no link.
    #[error("Certificate has no registration link")]
    Missing,

    /// The link is not an absolute URL.
    #[error("Invalid registration link '{link}': {reason}")]
    Malformed { link: String, reason: String },

    /// The external opener reported a failure.
    #[error("Link opener failed: {0}")]
    Opener(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Configuration could not be read or is inconsistent.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Config unreadable: {0}")]
    Unreadable(String),

    /// The configuration text is not valid TOML for [`crate::FinderConfig`].
    #[error("Config malformed: {0}")]
    Malformed(String),

    /// An environment override holds an unusable value.
    #[error("Environment variable {var} has invalid value '{value}'")]
    Env { var: String, value: String },

    /// A presented cost option would be rejected by the normalizer.
    #[error("Cost option '{0}' is neither a keyword nor a number")]
    InvalidCostOption(String),

    /// The default cost option is not among the presented choices.
    #[error("Default cost option '{0}' is not offered")]
    InvalidDefault(String),

    /// A presented cost option exceeds what `Any` resolves to.
    #[error("Cost option '{option}' exceeds the cost ceiling {ceiling}")]
    CeilingBelowOption { ceiling: Cost, option: String },
}

// =============================================================================
// TESTS
// =============================================================================
