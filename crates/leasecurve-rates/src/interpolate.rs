//! Rate derivation for an arbitrary term in months.

use serde::Serialize;

use leasecurve_core::{Tenor, TenorCurve};

use crate::derivation::Derivation;
use crate::error::{RateError, RateResult};

/// A derived rate together with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateQuote {
    /// The derived rate, as a decimal percentage. Unrounded; display
    /// rounding is the caller's concern.
    pub rate: f64,
    /// How the rate was obtained.
    pub derivation: Derivation,
}

/// Derives the rate for `term_months` from one observation's tenor curve.
///
/// Resolution order:
/// 1. exact match when the term is a published maturity with a present rate;
/// 2. linear interpolation between the nearest present tenors below and
///    above the term, keyed by their maturities in months;
/// 3. when only one side has a present tenor, that bound's rate unchanged.
///
/// Absent tenors never participate: a term that equals a published maturity
/// whose rate is absent falls through to bracketing over the remaining
/// present tenors.
///
/// # Errors
///
/// Returns [`RateError::NoTenorData`] when the curve has no present rate at
/// any tenor.
pub fn interpolate(curve: &TenorCurve, term_months: u32) -> RateResult<RateQuote> {
    if let Some(tenor) = Tenor::from_months(term_months) {
        if let Some(rate) = curve.rate(tenor) {
            return Ok(RateQuote {
                rate,
                derivation: Derivation::Exact { tenor },
            });
        }
    }

    let (shorter, longer) = bracket(curve, term_months);

    match (shorter, longer) {
        (Some((st, sr)), Some((lt, lr))) => {
            let sm = f64::from(st.months());
            let lm = f64::from(lt.months());
            let rate = sr + (lr - sr) / (lm - sm) * (f64::from(term_months) - sm);
            Ok(RateQuote {
                rate,
                derivation: Derivation::Interpolated {
                    shorter: st,
                    shorter_rate: sr,
                    longer: lt,
                    longer_rate: lr,
                    term_months,
                    rate,
                },
            })
        }
        (Some((tenor, rate)), None) | (None, Some((tenor, rate))) => Ok(RateQuote {
            rate,
            derivation: Derivation::ClosestBound { tenor },
        }),
        (None, None) => Err(RateError::NoTenorData),
    }
}

/// Finds the present tenors bracketing `term_months`: the largest maturity
/// strictly below it and the smallest strictly above it.
fn bracket(
    curve: &TenorCurve,
    term_months: u32,
) -> (Option<(Tenor, f64)>, Option<(Tenor, f64)>) {
    let mut shorter = None;
    let mut longer = None;

    // Curve iteration is maturity-ordered, so the last tenor below the term
    // and the first above it are the bounds.
    for (tenor, rate) in curve.iter() {
        if tenor.months() < term_months {
            shorter = Some((tenor, rate));
        } else if tenor.months() > term_months && longer.is_none() {
            longer = Some((tenor, rate));
        }
    }

    (shorter, longer)
}
