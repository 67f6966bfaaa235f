//! Published maturity buckets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A maturity bucket published with each daily yield-curve observation.
///
/// This is a fixed, closed set: the publisher reports exactly these eleven
/// maturities and nothing else. Ordering follows maturity, so `Tenor`
/// values sort from 1 month up to 30 years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tenor {
    /// 1-month maturity
    #[serde(rename = "1M")]
    OneMonth,
    /// 3-month maturity
    #[serde(rename = "3M")]
    ThreeMonths,
    /// 6-month maturity
    #[serde(rename = "6M")]
    SixMonths,
    /// 1-year maturity
    #[serde(rename = "1Y")]
    OneYear,
    /// 2-year maturity
    #[serde(rename = "2Y")]
    TwoYears,
    /// 3-year maturity
    #[serde(rename = "3Y")]
    ThreeYears,
    /// 5-year maturity
    #[serde(rename = "5Y")]
    FiveYears,
    /// 7-year maturity
    #[serde(rename = "7Y")]
    SevenYears,
    /// 10-year maturity
    #[serde(rename = "10Y")]
    TenYears,
    /// 20-year maturity
    #[serde(rename = "20Y")]
    TwentyYears,
    /// 30-year maturity
    #[serde(rename = "30Y")]
    ThirtyYears,
}

impl Tenor {
    /// All published tenors, in maturity order.
    pub const ALL: [Tenor; 11] = [
        Tenor::OneMonth,
        Tenor::ThreeMonths,
        Tenor::SixMonths,
        Tenor::OneYear,
        Tenor::TwoYears,
        Tenor::ThreeYears,
        Tenor::FiveYears,
        Tenor::SevenYears,
        Tenor::TenYears,
        Tenor::TwentyYears,
        Tenor::ThirtyYears,
    ];

    /// Returns the maturity in months.
    #[must_use]
    pub fn months(&self) -> u32 {
        match self {
            Tenor::OneMonth => 1,
            Tenor::ThreeMonths => 3,
            Tenor::SixMonths => 6,
            Tenor::OneYear => 12,
            Tenor::TwoYears => 24,
            Tenor::ThreeYears => 36,
            Tenor::FiveYears => 60,
            Tenor::SevenYears => 84,
            Tenor::TenYears => 120,
            Tenor::TwentyYears => 240,
            Tenor::ThirtyYears => 360,
        }
    }

    /// Looks up the tenor whose maturity is exactly `months`.
    ///
    /// Returns `None` for any month count that is not a published maturity;
    /// such terms must go through bracketing instead.
    #[must_use]
    pub fn from_months(months: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.months() == months)
    }

    /// Returns the element local name carrying this tenor's rate in the
    /// publisher's XML feed.
    #[must_use]
    pub fn xml_field(&self) -> &'static str {
        match self {
            Tenor::OneMonth => "BC_1MONTH",
            Tenor::ThreeMonths => "BC_3MONTH",
            Tenor::SixMonths => "BC_6MONTH",
            Tenor::OneYear => "BC_1YEAR",
            Tenor::TwoYears => "BC_2YEAR",
            Tenor::ThreeYears => "BC_3YEAR",
            Tenor::FiveYears => "BC_5YEAR",
            Tenor::SevenYears => "BC_7YEAR",
            Tenor::TenYears => "BC_10YEAR",
            Tenor::TwentyYears => "BC_20YEAR",
            Tenor::ThirtyYears => "BC_30YEAR",
        }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tenor::OneMonth => "1 month",
            Tenor::ThreeMonths => "3 months",
            Tenor::SixMonths => "6 months",
            Tenor::OneYear => "1 year",
            Tenor::TwoYears => "2 years",
            Tenor::ThreeYears => "3 years",
            Tenor::FiveYears => "5 years",
            Tenor::SevenYears => "7 years",
            Tenor::TenYears => "10 years",
            Tenor::TwentyYears => "20 years",
            Tenor::ThirtyYears => "30 years",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_maturity_ordered() {
        for pair in Tenor::ALL.windows(2) {
            assert!(pair[0].months() < pair[1].months());
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_from_months_exact_keys_only() {
        assert_eq!(Tenor::from_months(12), Some(Tenor::OneYear));
        assert_eq!(Tenor::from_months(360), Some(Tenor::ThirtyYears));
        assert_eq!(Tenor::from_months(18), None);
        assert_eq!(Tenor::from_months(0), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Tenor::OneYear.to_string(), "1 year");
        assert_eq!(Tenor::TwoYears.to_string(), "2 years");
        assert_eq!(Tenor::OneMonth.to_string(), "1 month");
    }

    #[test]
    fn test_serde_uses_short_codes() {
        let json = serde_json::to_string(&Tenor::TenYears).unwrap();
        assert_eq!(json, "\"10Y\"");
        let back: Tenor = serde_json::from_str("\"3M\"").unwrap();
        assert_eq!(back, Tenor::ThreeMonths);
    }
}
