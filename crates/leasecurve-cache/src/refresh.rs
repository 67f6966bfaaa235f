//! Background refresh worker.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::interval;
use tracing::{info, warn};

use leasecurve_feed::CurveSource;

use crate::cache::CurveCache;

/// Owns the periodic refresh task.
///
/// The worker ticks immediately on start (the initial population is its
/// first cycle) and then on the fixed interval for the life of the process.
/// Each cycle's outcome is contained inside [`CurveCache::refresh_all`], so
/// no failure in one iteration can terminate the loop; the worker retries
/// at the next tick regardless.
pub struct RefreshWorker {
    shutdown_tx: broadcast::Sender<()>,
}

impl RefreshWorker {
    /// Spawns the refresh task.
    pub fn start(
        cache: Arc<CurveCache>,
        source: Arc<dyn CurveSource>,
        refresh_interval: Duration,
    ) -> Self {
        let (shutdown_tx, mut shutdown_rx) = broadcast::channel::<()>(1);

        tokio::spawn(async move {
            let mut ticker = interval(refresh_interval);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let outcome = cache.refresh_all(source.as_ref()).await;
                        if outcome.dates_merged == 0 && outcome.years_failed > 0 {
                            warn!(
                                years_failed = outcome.years_failed,
                                "refresh cycle brought no data; serving resident cache until next interval"
                            );
                        }
                    }
                    _ = shutdown_rx.recv() => {
                        info!("refresh worker shutting down");
                        break;
                    }
                }
            }
        });

        info!(interval_secs = refresh_interval.as_secs(), "refresh worker started");

        Self { shutdown_tx }
    }

    /// Signals the refresh task to stop after its current cycle.
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(());
    }
}
