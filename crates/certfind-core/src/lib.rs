//! # certfind-core
//!
//! The Catalog Query Engine for certfind - THE LOGIC.
//!
//! Finds professional certificates in a fixed tabular catalog by four
//! criteria: subject area, issuing organization, maximum price and delivery
//! mode.
//!
//! ## Data Flow
//!
//! ```text
//! CatalogSource ──▶ CatalogStore ──▶ CatalogIndex          (once, at startup)
//!                        │
//! RawCriteria ──▶ Normalizer ──▶ Query ──▶ MatchEngine ──▶ MatchResult
//!                                                              │
//!                                            projector ◀───────┘
//! ```
//!
//! [`Finder`] bundles these behind the presentation boundary.
//!
//! ## Architectural Constraints
//!
//! - Read-only: the catalog never changes after load
//! - Synchronous: no async, no background work, no network
//! - Exact: prices are integer cents, never floats
//! - Headless: rendering and link opening belong to the caller

// =============================================================================
// MODULES
// =============================================================================

pub mod catalog;
pub mod config;
pub mod cost;
pub mod finder;
pub mod index;
pub mod matcher;
pub mod normalizer;
pub mod primitives;
pub mod projector;
pub mod source;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use cost::{Cost, CostBound};
pub use types::{
    CatalogLoadError, CertificateRecord, ConfigError, DisplayFields, InvalidCostError, LinkError,
    Location, LocationFilter, MatchResult, OrganizationFilter, Query, RawCriteria, RecordId,
};

// =============================================================================
// RE-EXPORTS: Query Engine
// =============================================================================

pub use catalog::CatalogStore;
pub use config::FinderConfig;
pub use finder::{Finder, LinkOpener};
pub use index::{CatalogIndex, distinct_organizations, distinct_subject_areas};
pub use matcher::MatchEngine;
pub use normalizer::Normalizer;
pub use projector::{display_fields, project};
pub use source::{CatalogSource, InMemorySource, JsonRowsFile, RawRow};
