//! # Configuration
//!
//! Operator-tunable settings for the presentation boundary.
//!
//! ## Sources (later wins)
//!
//! 1. Built-in defaults (`Any` → 2000, cost options `Free` … `2000`)
//! 2. A TOML file or string
//! 3. Environment: `CERTFIND_COST_CEILING`
//!
//! ```toml
//! cost_ceiling = 5000
//! cost_options = ["Free", "500", "1000", "5000"]
//! default_cost_option = "Any"
//! ```

use crate::cost::{Cost, CostBound};
use crate::normalizer::Normalizer;
use crate::primitives::{ANY_COST, DEFAULT_COST_CEILING_UNITS, DEFAULT_COST_OPTIONS, FREE_COST};
use crate::types::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding [`FinderConfig::cost_ceiling`].
pub const COST_CEILING_ENV: &str = "CERTFIND_COST_CEILING";

/// Settings for a [`crate::Finder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinderConfig {
    /// Ceiling the `Any` cost keyword resolves to.
    pub cost_ceiling: Cost,
    /// Cost choices offered to the user, in display order.
    pub cost_options: Vec<String>,
    /// Cost choice preselected in the input control.
    pub default_cost_option: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            cost_ceiling: Cost::from_cents(DEFAULT_COST_CEILING_UNITS * 100),
            cost_options: DEFAULT_COST_OPTIONS.iter().map(|s| (*s).to_string()).collect(),
            default_cost_option: ANY_COST.to_string(),
        }
    }
}

impl FinderConfig {
    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Unreadable(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|var| std::env::var(var).ok())
    }

    /// Apply overrides from any variable lookup.
    ///
    /// The ceiling override accepts the same text as a cost criterion, except
    /// bounds that admit no price. The result is validated again.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(COST_CEILING_ENV) {
            self.cost_ceiling = match Cost::parse_bound(&value) {
                Some(CostBound::AtMost(ceiling)) => ceiling,
                Some(CostBound::Unsatisfiable) | None => {
                    return Err(ConfigError::Env {
                        var: COST_CEILING_ENV.to_string(),
                        value,
                    });
                }
            };
        }
        self.validate()?;
        Ok(self)
    }

    /// Check that every presented cost choice would normalize, and that none
    /// admits more than `Any`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for option in &self.cost_options {
            if !is_cost_choice(option) {
                return Err(ConfigError::InvalidCostOption(option.clone()));
            }
            if let Some(CostBound::AtMost(amount)) = Cost::parse_bound(option)
                && amount > self.cost_ceiling
            {
                return Err(ConfigError::CeilingBelowOption {
                    ceiling: self.cost_ceiling,
                    option: option.clone(),
                });
            }
        }

        let default = self.default_cost_option.as_str();
        let offered = self.cost_options.iter().any(|option| option == default);
        if !(offered || default == FREE_COST || default == ANY_COST) {
            return Err(ConfigError::InvalidDefault(default.to_string()));
        }
        Ok(())
    }

    /// A normalizer using this configuration's ceiling.
    #[must_use]
    pub const fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.cost_ceiling)
    }
}

fn is_cost_choice(option: &str) -> bool {
    option == FREE_COST || option == ANY_COST || Cost::parse_bound(option).is_some()
}

// =============================================================================
// TESTS
// =============================================================================
