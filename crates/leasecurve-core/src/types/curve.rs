//! One observation's tenor-to-rate mapping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Tenor;

/// The rates published for a single observation date.
///
/// Rates are decimal percentages (4.5 means 4.5%). A tenor with no entry is
/// *absent*: the publisher omitted it that day, or its value did not parse.
/// Absent is a distinct state from a zero rate and nothing in this type will
/// conflate the two.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenorCurve {
    rates: BTreeMap<Tenor, f64>,
}

impl TenorCurve {
    /// Creates an empty curve (every tenor absent).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a rate for a tenor, replacing any prior value.
    pub fn insert(&mut self, tenor: Tenor, rate: f64) {
        self.rates.insert(tenor, rate);
    }

    /// Returns the rate for a tenor, or `None` when it is absent.
    #[must_use]
    pub fn rate(&self, tenor: Tenor) -> Option<f64> {
        self.rates.get(&tenor).copied()
    }

    /// Returns true when every tenor is absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Number of tenors with a present rate.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Iterates present (tenor, rate) pairs in maturity order.
    pub fn iter(&self) -> impl Iterator<Item = (Tenor, f64)> + '_ {
        self.rates.iter().map(|(t, r)| (*t, *r))
    }
}

impl FromIterator<(Tenor, f64)> for TenorCurve {
    fn from_iter<I: IntoIterator<Item = (Tenor, f64)>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_none_not_zero() {
        let mut curve = TenorCurve::new();
        curve.insert(Tenor::OneYear, 0.0);
        assert_eq!(curve.rate(Tenor::OneYear), Some(0.0));
        assert_eq!(curve.rate(Tenor::TwoYears), None);
    }

    #[test]
    fn test_insert_replaces() {
        let mut curve = TenorCurve::new();
        curve.insert(Tenor::FiveYears, 4.1);
        curve.insert(Tenor::FiveYears, 4.2);
        assert_eq!(curve.rate(Tenor::FiveYears), Some(4.2));
        assert_eq!(curve.len(), 1);
    }

    #[test]
    fn test_iter_in_maturity_order() {
        let curve: TenorCurve = [
            (Tenor::TenYears, 4.0),
            (Tenor::OneMonth, 5.5),
            (Tenor::TwoYears, 4.6),
        ]
        .into_iter()
        .collect();

        let tenors: Vec<Tenor> = curve.iter().map(|(t, _)| t).collect();
        assert_eq!(
            tenors,
            vec![Tenor::OneMonth, Tenor::TwoYears, Tenor::TenYears]
        );
    }

    #[test]
    fn test_serde_object_keyed_by_code() {
        let curve: TenorCurve = [(Tenor::OneYear, 4.0), (Tenor::TwoYears, 4.5)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&curve).unwrap();
        assert_eq!(json, r#"{"1Y":4.0,"2Y":4.5}"#);
        let back: TenorCurve = serde_json::from_str(&json).unwrap();
        assert_eq!(back, curve);
    }
}
