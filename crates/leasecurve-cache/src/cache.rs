//! The in-memory observation cache and its refresh cycle.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::{info, warn};

use leasecurve_core::{Date, TenorCurve};
use leasecurve_feed::{CurveSource, YearObservations};

use crate::error::{CacheError, CacheResult};
use crate::snapshot;

/// How many calendar years back a refresh sweep reaches, counting the
/// current year.
pub(crate) const HISTORY_YEARS: i32 = 20;

/// Date-keyed store of yield-curve observations.
///
/// Single-writer, multi-reader: the refresh worker is the only mutator,
/// request handlers read concurrently. Merges are per-date upserts under a
/// short write lock, never a wholesale swap, so readers mid-refresh see the
/// previous data for dates not yet merged rather than an empty map.
pub struct CurveCache {
    observations: RwLock<BTreeMap<Date, TenorCurve>>,
    snapshot_path: PathBuf,
}

/// What one refresh cycle accomplished.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefreshOutcome {
    /// Years whose fetch succeeded (possibly with zero entries).
    pub years_fetched: usize,
    /// Years skipped because their fetch failed.
    pub years_failed: usize,
    /// Observation dates inserted or overwritten.
    pub dates_merged: usize,
    /// Whether the snapshot was rewritten.
    pub persisted: bool,
}

impl CurveCache {
    /// Creates an empty cache that will persist to `snapshot_path`.
    pub fn new(snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            observations: RwLock::new(BTreeMap::new()),
            snapshot_path: snapshot_path.into(),
        }
    }

    /// Creates a cache and loads the snapshot at `snapshot_path`.
    ///
    /// Fails soft: a missing or corrupt snapshot leaves the cache empty and
    /// logs the reason. The first refresh cycle repopulates it.
    pub fn open(snapshot_path: impl Into<PathBuf>) -> Self {
        let cache = Self::new(snapshot_path);
        match snapshot::load(&cache.snapshot_path) {
            Ok(loaded) => {
                info!(
                    dates = loaded.len(),
                    path = %cache.snapshot_path.display(),
                    "loaded yield curve snapshot"
                );
                *cache.observations.write() = loaded;
            }
            Err(e) => {
                warn!(
                    path = %cache.snapshot_path.display(),
                    error = %e,
                    "starting with empty cache"
                );
            }
        }
        cache
    }

    /// Returns the observation for an exact date, if cached.
    #[must_use]
    pub fn get(&self, date: Date) -> Option<TenorCurve> {
        self.observations.read().get(&date).cloned()
    }

    /// Resolves a requested date to the most recent observation on or
    /// before it, searching the whole cache.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::NoData`] when no cached date is old enough.
    /// This is deliberate: serving a newer observation would misstate the
    /// curve as of the requested date.
    pub fn resolve(&self, requested: Date) -> CacheResult<(Date, TenorCurve)> {
        self.observations
            .read()
            .range(..=requested)
            .next_back()
            .map(|(date, curve)| (*date, curve.clone()))
            .ok_or(CacheError::NoData { requested })
    }

    /// Number of cached observation dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.read().len()
    }

    /// Returns true when nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.read().is_empty()
    }

    /// Clones the full observation map.
    #[must_use]
    pub fn entries(&self) -> BTreeMap<Date, TenorCurve> {
        self.observations.read().clone()
    }

    /// Path of the durable snapshot.
    #[must_use]
    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    /// Merges one year's observations, overwriting any existing curve for
    /// the same date in one step.
    pub fn merge_year(&self, observations: YearObservations) -> usize {
        let merged = observations.len();
        if merged > 0 {
            let mut map = self.observations.write();
            for (date, curve) in observations {
                map.insert(date, curve);
            }
        }
        merged
    }

    /// Runs one full refresh cycle: sweeps the historical window from the
    /// current year backward, merges every year the source could serve, and
    /// rewrites the snapshot when anything came in.
    ///
    /// Failures are contained here: a year that fails to fetch is skipped
    /// and a snapshot that fails to write is logged, so the calling worker
    /// always survives to its next interval.
    pub async fn refresh_all(&self, source: &dyn CurveSource) -> RefreshOutcome {
        let current_year = Date::today().year();
        let mut outcome = RefreshOutcome::default();

        for year in (current_year - HISTORY_YEARS + 1..=current_year).rev() {
            match source.fetch_year(year).await {
                Ok(observations) => {
                    outcome.years_fetched += 1;
                    outcome.dates_merged += self.merge_year(observations);
                }
                Err(e) => {
                    outcome.years_failed += 1;
                    warn!(year, error = %e, "skipping year after fetch failure");
                }
            }
        }

        if outcome.dates_merged > 0 {
            match self.persist() {
                Ok(()) => outcome.persisted = true,
                Err(e) => warn!(error = %e, "refresh merged but snapshot was not written"),
            }
        }

        info!(
            years_fetched = outcome.years_fetched,
            years_failed = outcome.years_failed,
            dates_merged = outcome.dates_merged,
            persisted = outcome.persisted,
            total_dates = self.len(),
            "refresh cycle complete"
        );

        outcome
    }

    /// Writes the full in-memory map to the snapshot file atomically.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Persist`] when the file cannot be written.
    pub fn persist(&self) -> CacheResult<()> {
        let map = self.entries();
        snapshot::persist(&self.snapshot_path, &map)
    }
}
