//! # Cost Module
//!
//! Exact monetary amounts for catalog prices and query ceilings.
//!
//! A [`Cost`] is a whole number of cents held in a `u64`. Parsing, comparison
//! and display never touch floating-point values, so two equal inputs always
//! produce the same match set.
//!
//! ## Accepted Text
//!
//! Catalog prices ([`Cost::parse_exact`]): optional surrounding whitespace, an
//! optional leading `+`, ASCII digits and an optional `.` followed by digits:
//! `"100"`, `"99.5"`, `".5"`, `"12."`.
//!
//! Query ceilings ([`Cost::parse_bound`]) take any decimal number: a sign,
//! an exponent (`"1e3"`), `_` between digits, `inf` and `nan`. A ceiling that
//! no price can meet is a [`CostBound::Unsatisfiable`], not a parse failure.

use serde::{Deserialize, Serialize};
use std::fmt;

const CENTS_PER_UNIT: u64 = 100;

/// A non-negative monetary amount in cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "CostRepr", into = "String")]
pub struct Cost(u64);

impl Cost {
    /// Zero cost ("Free").
    pub const ZERO: Self = Self(0);

    /// Largest representable cost.
    pub const MAX: Self = Self(u64::MAX);

    /// Create a cost from a number of cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Create a cost from whole currency units.
    ///
    /// Returns `None` if the amount does not fit in `u64` cents.
    #[must_use]
    pub const fn from_units(units: u64) -> Option<Self> {
        match units.checked_mul(CENTS_PER_UNIT) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Get the raw number of cents.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Parse a catalog price.
    ///
    /// Sub-cent precision is only accepted when the extra digits are zero
    /// (`"10.500"`). Returns `None` for anything that is not an exact amount.
    #[must_use]
    pub fn parse_exact(text: &str) -> Option<Self> {
        let parts = DecimalParts::split(text)?;
        let (cents, extra) = parts.fraction.split_at(parts.fraction.len().min(2));
        if extra.bytes().any(|b| b != b'0') {
            return None;
        }
        let whole = digits_value(parts.whole)?;
        whole
            .checked_mul(CENTS_PER_UNIT)?
            .checked_add(fraction_cents(cents))
            .map(Self)
    }

    /// Parse a query ceiling.
    ///
    /// Digits past the cent are truncated: catalog prices are whole cents, so
    /// `price <= 12.349` holds exactly when `price <= 12.34`. Amounts too large
    /// for `u64` cents, and `inf`, saturate to [`Cost::MAX`]. Negative amounts
    /// and `nan` admit no price; `-0` is zero.
    ///
    /// Returns `None` only for text that is not a number.
    #[must_use]
    pub fn parse_bound(text: &str) -> Option<CostBound> {
        let text = text.trim();
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let number = match unsigned.to_ascii_lowercase().as_str() {
            "nan" => return Some(CostBound::Unsatisfiable),
            "inf" | "infinity" if negative => return Some(CostBound::Unsatisfiable),
            "inf" | "infinity" => return Some(CostBound::AtMost(Self::MAX)),
            _ => ScientificParts::split(unsigned)?,
        };

        if negative && !number.is_zero() {
            return Some(CostBound::Unsatisfiable);
        }
        if negative {
            return Some(CostBound::AtMost(Self::ZERO));
        }
        Some(CostBound::AtMost(Self(number.truncated_cents())))
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.0 / CENTS_PER_UNIT;
        let cents = self.0 % CENTS_PER_UNIT;
        if cents == 0 {
            write!(f, "{units}")
        } else {
            write!(f, "{units}.{cents:02}")
        }
    }
}

impl From<Cost> for String {
    fn from(cost: Cost) -> Self {
        cost.to_string()
    }
}

// =============================================================================
// QUERY CEILING
// =============================================================================

/// An inclusive upper bound on price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CostBound {
    /// Prices up to and including this amount qualify.
    AtMost(Cost),
    /// Negative or `nan`: no price qualifies.
    Unsatisfiable,
}

impl CostBound {
    /// Check whether a price falls under this bound.
    #[must_use]
    pub fn admits(self, cost: Cost) -> bool {
        match self {
            Self::AtMost(max) => cost <= max,
            Self::Unsatisfiable => false,
        }
    }
}

impl From<Cost> for CostBound {
    fn from(cost: Cost) -> Self {
        Self::AtMost(cost)
    }
}

impl fmt::Display for CostBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtMost(cost) => write!(f, "{cost}"),
            Self::Unsatisfiable => f.write_str("none"),
        }
    }
}

/// Wire form accepted when deserializing: `2000` or `"2000.50"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CostRepr {
    Whole(u64),
    Text(String),
}

impl TryFrom<CostRepr> for Cost {
    type Error = String;

    fn try_from(repr: CostRepr) -> Result<Self, Self::Error> {
        match repr {
            CostRepr::Whole(units) => {
                Self::from_units(units).ok_or_else(|| format!("cost {units} is too large"))
            }
            CostRepr::Text(text) => {
                Self::parse_exact(&text).ok_or_else(|| format!("invalid cost amount '{text}'"))
            }
        }
    }
}

// =============================================================================
// DECIMAL TEXT
// =============================================================================

/// Digit runs on either side of the decimal point.
struct DecimalParts<'a> {
    whole: &'a str,
    fraction: &'a str,
}

impl<'a> DecimalParts<'a> {
    fn split(text: &'a str) -> Option<Self> {
        let text = text.trim();
        let text = text.strip_prefix('+').unwrap_or(text);
        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));

        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        if !is_digits(whole) || !is_digits(fraction) {
            return None;
        }
        Some(Self { whole, fraction })
    }
}

/// An unsigned decimal number: `digits × 10^exponent`.
struct ScientificParts {
    digits: String,
    exponent: i64,
}

impl ScientificParts {
    fn split(text: &str) -> Option<Self> {
        let (mantissa, exponent) = match text.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => (mantissa, Some(exponent)),
            None => (text, None),
        };
        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }

        let mut digits = digit_run(whole)?;
        let fraction = digit_run(fraction)?;
        digits.push_str(&fraction);

        let written = match exponent {
            Some(exponent) => signed_exponent(exponent)?,
            None => 0,
        };
        let fraction_len = i64::try_from(fraction.len()).unwrap_or(i64::MAX);

        Some(Self {
            digits,
            exponent: written.saturating_sub(fraction_len),
        })
    }

    fn is_zero(&self) -> bool {
        self.digits.bytes().all(|b| b == b'0')
    }

    /// Whole cents, truncating sub-cent digits and saturating on overflow.
    fn truncated_cents(&self) -> u64 {
        let digits = self.digits.trim_start_matches('0');
        if digits.is_empty() {
            return 0;
        }

        let shift = self.exponent.saturating_add(2);
        if shift >= 0 {
            let scale = u32::try_from(shift).ok().and_then(|s| 10u64.checked_pow(s));
            return digits_value(digits)
                .zip(scale)
                .and_then(|(value, scale)| value.checked_mul(scale))
                .unwrap_or(u64::MAX);
        }

        let dropped = usize::try_from(shift.unsigned_abs()).unwrap_or(usize::MAX);
        let kept = digits.len().saturating_sub(dropped);
        digits_value(&digits[..kept]).unwrap_or(u64::MAX)
    }
}

/// Digits with optional single `_` separators between them, separators removed.
fn digit_run(text: &str) -> Option<String> {
    if text.starts_with('_') || text.ends_with('_') || text.contains("__") {
        return None;
    }
    if !text.bytes().all(|b| b.is_ascii_digit() || b == b'_') {
        return None;
    }
    Some(text.replace('_', ""))
}

fn signed_exponent(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let digits = digit_run(digits)?;
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits_value(&digits)
        .and_then(|value| i64::try_from(value).ok())
        .unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

fn is_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

/// Value of an all-digit string; `None` on overflow. Empty is zero.
fn digits_value(digits: &str) -> Option<u64> {
    digits.bytes().try_fold(0u64, |acc, b| {
        acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
    })
}

/// Cents contributed by the first two fractional digits.
fn fraction_cents(fraction: &str) -> u64 {
    let mut digits = fraction.bytes().map(|b| u64::from(b - b'0'));
    let tenths = digits.next().unwrap_or(0);
    let hundredths = digits.next().unwrap_or(0);
    tenths * 10 + hundredths
}

// =============================================================================
// TESTS
// =============================================================================
