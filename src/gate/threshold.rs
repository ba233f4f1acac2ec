//! Threshold parsing and cutoff resolution.
//!
//! A threshold is either an absolute request count (`"26"`) or a fraction of
//! the quota limit, written as a decimal below one (`"0.3"`) or as a
//! percentage (`"60%"`, `"50 %"`).

use std::fmt;
use std::str::FromStr;

use crate::error::GateError;

/// Threshold applied when none is configured.
pub const DEFAULT_THRESHOLD: &str = "10%";

/// Cutoff applied when no threshold can be resolved.
pub const DEFAULT_CUTOFF: f64 = 50.0;

/// Interpreted threshold specification.
///
/// # Example
///
/// ```
/// use quotawatch::gate::Threshold;
///
/// let threshold = Threshold::parse("60%").expect("percentages parse");
/// assert_eq!(threshold, Threshold::Fraction(0.6));
/// assert_eq!(threshold.to_string(), "0.6");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    /// Remaining-request count at or below which the gate reacts.
    Absolute(f64),
    /// Share of the quota limit at or below which the gate reacts.
    Fraction(f64),
}

impl Threshold {
    /// Parses a threshold string.
    ///
    /// A trailing `%` (optionally preceded by whitespace) marks a percentage.
    /// Plain numbers below one are fractions, anything else is an absolute
    /// count.
    /// Surrounding whitespace is ignored, but any other text around the
    /// number is rejected: `"12abc"` is an error, not `12`.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidThreshold`] carrying the original input
    /// when the number cannot be parsed or is not strictly positive.
    #[expect(
        clippy::float_arithmetic,
        reason = "percentages are scaled down to fractions"
    )]
    pub fn parse(input: &str) -> Result<Self, GateError> {
        let invalid = || GateError::InvalidThreshold {
            input: input.to_owned(),
        };
        let trimmed = input.trim();

        if let Some(percent) = trimmed.strip_suffix('%') {
            return parse_number(percent.trim_end())
                .map(|value| value / 100.0)
                .filter(is_positive)
                .map(Self::Fraction)
                .ok_or_else(invalid);
        }

        let value = parse_number(trimmed)
            .filter(is_positive)
            .ok_or_else(invalid)?;
        if value < 1.0 {
            Ok(Self::Fraction(value))
        } else {
            Ok(Self::Absolute(value))
        }
    }

    /// Returns the remaining-request count at which the gate reacts for a
    /// quota of `limit` requests.
    ///
    /// Fractions are rounded up to the next whole request.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "fractional thresholds scale with the limit"
    )]
    pub fn cutoff(self, limit: u32) -> f64 {
        match self {
            Self::Absolute(count) => count,
            Self::Fraction(fraction) => (fraction * f64::from(limit)).ceil(),
        }
    }
}

/// Resolves the cutoff for an optional threshold, falling back to
/// [`DEFAULT_CUTOFF`].
#[must_use]
pub fn resolve_cutoff(threshold: Option<Threshold>, limit: u32) -> f64 {
    threshold.map_or(DEFAULT_CUTOFF, |value| value.cutoff(limit))
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok()
}

const fn is_positive(value: &f64) -> bool {
    value.is_finite() && *value > 0.0
}

impl fmt::Display for Threshold {
    #[expect(
        clippy::float_arithmetic,
        reason = "fractions of one or more print as percentages"
    )]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Absolute(count) => write!(formatter, "{count}"),
            Self::Fraction(fraction) if fraction < 1.0 => write!(formatter, "{fraction}"),
            Self::Fraction(fraction) => write!(formatter, "{}%", fraction * 100.0),
        }
    }
}

impl FromStr for Threshold {
    type Err = GateError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}
