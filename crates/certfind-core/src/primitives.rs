//! # Fixed Primitives
//!
//! Hardcoded keywords, column layout and limits for the certfind core.
//!
//! These values are compiled into the binary and are immutable at runtime.
//! Anything an operator may reasonably tune lives in [`crate::config`].

// =============================================================================
// CATALOG LAYOUT
// =============================================================================

/// Number of positional fields in every catalog row.
///
/// Layout: name, subject area, organization, cost, location, link.
pub const CATALOG_COLUMNS: usize = 6;

/// Header labels prepended by [`crate::InMemorySource::with_header`].
pub const CATALOG_HEADER: [&str; CATALOG_COLUMNS] = [
    "Name",
    "Subject Area",
    "Organization",
    "Cost",
    "Location",
    "Link",
];

// =============================================================================
// WILDCARD KEYWORDS
// =============================================================================

/// Organization label meaning "any organization".
///
/// Always the first entry of the organization options.
pub const ANY_ORGANIZATION: &str = "All";

/// Cost keyword resolving to a ceiling of zero.
pub const FREE_COST: &str = "Free";

/// Cost keyword resolving to the configured cost ceiling.
pub const ANY_COST: &str = "Any";

/// Location keyword meaning "online or in person".
pub const EITHER_LOCATION: &str = "Either";

// =============================================================================
// PRESENTATION DEFAULTS
// =============================================================================

/// Default ceiling, in whole currency units, that [`ANY_COST`] resolves to.
///
/// Matches the largest entry of [`DEFAULT_COST_OPTIONS`].
pub const DEFAULT_COST_CEILING_UNITS: u64 = 2000;

/// Cost choices offered to the user when no configuration overrides them.
pub const DEFAULT_COST_OPTIONS: [&str; 7] = ["Free", "100", "250", "500", "750", "1000", "2000"];

/// Location choices offered to the user.
pub const LOCATION_OPTIONS: [&str; 3] = ["Online", "In-Person", EITHER_LOCATION];

// =============================================================================
// INPUT LIMITS
// =============================================================================

/// Maximum number of records a catalog may hold.
///
/// Keeps the synchronous full scan within interactive latency.
pub const MAX_CATALOG_ROWS: usize = 100_000;

/// Maximum size of a catalog file read from disk (64 MB).
pub const MAX_SOURCE_FILE_SIZE: u64 = 64 * 1024 * 1024;
