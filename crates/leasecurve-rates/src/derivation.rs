//! How a quoted rate was obtained from the tenor curve.

use serde::Serialize;
use std::fmt;

use leasecurve_core::Tenor;

/// The provenance of a quoted rate.
///
/// The `Display` impl produces the user-facing calculation text. Keeping the
/// rendering here leaves [`crate::interpolate`] purely numeric: the formula
/// can be tested without string comparisons, and the text without redoing
/// the arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Derivation {
    /// The term is a published maturity and its rate was present.
    Exact {
        /// The matched tenor.
        tenor: Tenor,
    },

    /// Only one bracketing tenor had a present rate; its rate was returned
    /// unchanged. An approximation, not an interpolation.
    ClosestBound {
        /// The single available bound.
        tenor: Tenor,
    },

    /// Linear interpolation between the two bracketing tenors, keyed by
    /// their maturities in months.
    Interpolated {
        /// Bracketing tenor below the term.
        shorter: Tenor,
        /// Rate at the shorter tenor.
        shorter_rate: f64,
        /// Bracketing tenor above the term.
        longer: Tenor,
        /// Rate at the longer tenor.
        longer_rate: f64,
        /// The requested term in months.
        term_months: u32,
        /// The interpolated rate.
        rate: f64,
    },
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Derivation::Exact { tenor } => write!(f, "exact match for {tenor}"),
            Derivation::ClosestBound { tenor } => write!(f, "closest match: {tenor}"),
            Derivation::Interpolated {
                shorter,
                shorter_rate,
                longer,
                longer_rate,
                term_months,
                rate,
            } => {
                let sm = shorter.months();
                let lm = longer.months();
                write!(
                    f,
                    "linear interpolation between {shorter} ({shorter_rate:.3}) and \
                     {longer} ({longer_rate:.3}): {shorter_rate:.3} + \
                     ({longer_rate:.3} - {shorter_rate:.3}) / ({lm} - {sm}) * \
                     ({term_months} - {sm}) = {rate:.3}"
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_text() {
        let d = Derivation::Exact {
            tenor: Tenor::TwoYears,
        };
        assert_eq!(d.to_string(), "exact match for 2 years");
    }

    #[test]
    fn test_closest_bound_text() {
        let d = Derivation::ClosestBound {
            tenor: Tenor::OneYear,
        };
        assert_eq!(d.to_string(), "closest match: 1 year");
    }

    #[test]
    fn test_interpolated_text_shows_literal_arithmetic() {
        let d = Derivation::Interpolated {
            shorter: Tenor::OneYear,
            shorter_rate: 4.0,
            longer: Tenor::TwoYears,
            longer_rate: 4.5,
            term_months: 18,
            rate: 4.25,
        };
        let text = d.to_string();
        assert_eq!(
            text,
            "linear interpolation between 1 year (4.000) and 2 years (4.500): \
             4.000 + (4.500 - 4.000) / (24 - 12) * (18 - 12) = 4.250"
        );
    }
}
