//! Yield-curve source trait.

use std::collections::BTreeMap;

use async_trait::async_trait;

use leasecurve_core::{Date, TenorCurve};

use crate::error::FeedResult;

/// One calendar year's observations, keyed by date.
pub type YearObservations = BTreeMap<Date, TenorCurve>;

/// A provider of yearly yield-curve observations.
///
/// The cache-refresh routine is written against this trait so it can run
/// against the live publisher, a mirror, or fixed data in tests.
#[async_trait]
pub trait CurveSource: Send + Sync {
    /// Fetches every observation published for one calendar year.
    ///
    /// # Errors
    ///
    /// Fails with a [`crate::FetchError`] scoped to this year only; the
    /// caller is expected to skip the year and continue.
    async fn fetch_year(&self, year: i32) -> FeedResult<YearObservations>;
}

/// A source serving fixed, pre-loaded observations.
///
/// Years with no data resolve to an empty map, mirroring a year the
/// publisher has nothing for. Used in tests and offline wiring.
#[derive(Debug, Default)]
pub struct StaticSource {
    years: BTreeMap<i32, YearObservations>,
}

impl StaticSource {
    /// Creates a source with no data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one year's observations.
    pub fn insert_year(&mut self, year: i32, observations: YearObservations) {
        self.years.insert(year, observations);
    }
}

#[async_trait]
impl CurveSource for StaticSource {
    async fn fetch_year(&self, year: i32) -> FeedResult<YearObservations> {
        Ok(self.years.get(&year).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leasecurve_core::Tenor;

    #[tokio::test]
    async fn test_static_source_serves_inserted_year() {
        let date = Date::parse("2023-05-01").unwrap();
        let curve: TenorCurve = [(Tenor::OneYear, 5.0)].into_iter().collect();

        let mut source = StaticSource::new();
        source.insert_year(2023, BTreeMap::from([(date, curve.clone())]));

        let fetched = source.fetch_year(2023).await.unwrap();
        assert_eq!(fetched.get(&date), Some(&curve));

        let empty = source.fetch_year(1999).await.unwrap();
        assert!(empty.is_empty());
    }
}
