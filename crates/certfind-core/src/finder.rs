//! # Finder
//!
//! The presentation boundary: the only surface a UI needs.
//!
//! A `Finder` owns the catalog, its index and the configuration. They are
//! built once at startup and passed around explicitly; there is no global
//! state. Every method takes `&self`, so a finder can be shared read-only.
//!
//! ## Flow
//!
//! ```text
//! options ──▶ user input ──▶ submit_query ──▶ MatchResult ──▶ project
//!                                                  │
//!                                 Error / Empty / Matches(ids)
//! ```

use crate::catalog::CatalogStore;
use crate::config::FinderConfig;
use crate::index::CatalogIndex;
use crate::matcher::MatchEngine;
use crate::normalizer::Normalizer;
use crate::primitives::LOCATION_OPTIONS;
use crate::projector;
use crate::source::CatalogSource;
use crate::types::{
    CatalogLoadError, DisplayFields, LinkError, MatchResult, OrganizationFilter, RawCriteria,
    RecordId,
};
use tracing::{debug, info, warn};
use url::Url;

// =============================================================================
// LINK OPENER
// =============================================================================

/// External capability that opens a URL, e.g. in the user's browser.
///
/// The core never opens links itself.
pub trait LinkOpener {
    /// Open a validated absolute URL.
    fn open(&self, url: &Url) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

// =============================================================================
// FINDER
// =============================================================================

/// Catalog, index and configuration behind the presentation boundary.
#[derive(Debug)]
pub struct Finder {
    catalog: CatalogStore,
    index: CatalogIndex,
    config: FinderConfig,
    normalizer: Normalizer,
}

impl Finder {
    /// Index a loaded catalog.
    #[must_use]
    pub fn new(catalog: CatalogStore, config: FinderConfig) -> Self {
        let index = CatalogIndex::build(&catalog);
        let normalizer = config.normalizer();

        info!(
            records = catalog.len(),
            subject_areas = index.subject_areas().len(),
            organizations = index.organization_options().len().saturating_sub(1),
            cost_ceiling = %normalizer.cost_ceiling(),
            "finder ready"
        );

        Self {
            catalog,
            index,
            config,
            normalizer,
        }
    }

    /// Load a catalog from a source and index it.
    pub fn load<S: CatalogSource + ?Sized>(
        source: &S,
        config: FinderConfig,
    ) -> Result<Self, CatalogLoadError> {
        Ok(Self::new(CatalogStore::load(source)?, config))
    }

    /// The loaded catalog.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// The distinct-value index.
    #[must_use]
    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Input options
    // -------------------------------------------------------------------------

    /// Subject areas to offer, in catalog order.
    #[must_use]
    pub fn subject_area_options(&self) -> &[String] {
        self.index.subject_areas()
    }

    /// `All` followed by the catalog's organizations.
    #[must_use]
    pub fn organization_options(&self) -> &[String] {
        self.index.organization_options()
    }

    /// Cost choices to offer; free text is accepted as well.
    #[must_use]
    pub fn cost_options(&self) -> &[String] {
        &self.config.cost_options
    }

    /// Cost choice preselected in the input control.
    #[must_use]
    pub fn default_cost_option(&self) -> &str {
        &self.config.default_cost_option
    }

    /// Location choices to offer.
    #[must_use]
    pub fn location_options(&self) -> &'static [&'static str] {
        &LOCATION_OPTIONS
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Normalize and run a query.
    ///
    /// Criteria unknown to the catalog are logged but still matched, so a
    /// record with a value the index skipped stays reachable.
    #[must_use]
    pub fn submit_query(&self, raw: &RawCriteria) -> MatchResult {
        let query = match self.normalizer.normalize_criteria(raw) {
            Ok(query) => query,
            Err(err) => {
                debug!(raw_cost = %err.raw, "query rejected");
                return MatchResult::Error(err);
            }
        };

        if !self.index.contains_subject_area(query.subject_area()) {
            warn!(subject_area = query.subject_area(), "subject area not in catalog index");
        }
        if let OrganizationFilter::Exact(name) = query.organization()
            && !self.index.contains_organization(name)
        {
            warn!(organization = %name, "organization not in catalog index");
        }

        let result = MatchEngine::run(&self.catalog, &query);
        debug!(
            subject_area = query.subject_area(),
            max_cost = %query.max_cost(),
            matches = result.ids().len(),
            "query evaluated"
        );
        result
    }

    /// Display fields for one record.
    #[must_use]
    pub fn display_fields(&self, id: RecordId) -> Option<DisplayFields> {
        projector::display_fields(&self.catalog, id)
    }

    /// Display fields for a sequence of ids, e.g. from `MatchResult::Matches`.
    #[must_use]
    pub fn project(&self, ids: &[RecordId]) -> Vec<DisplayFields> {
        projector::project(&self.catalog, ids)
    }

    // -------------------------------------------------------------------------
    // Links
    // -------------------------------------------------------------------------

    /// Validate a result link and hand it to the external opener.
    pub fn open_link(&self, link: &str, opener: &dyn LinkOpener) -> Result<(), LinkError> {
        let link = link.trim();
        if link.is_empty() {
            return Err(LinkError::Missing);
        }

        let url = Url::parse(link).map_err(|e| LinkError::Malformed {
            link: link.to_string(),
            reason: e.to_string(),
        })?;

        debug!(%url, "opening registration link");
        opener.open(&url).map_err(LinkError::Opener)
    }
}

// =============================================================================
// TESTS
// =============================================================================
