//! Append-only audit record of served calculations.
//!
//! Each calculation emits one structured event on the dedicated `audit`
//! target. Routing that target to a file appender or collector yields the
//! append-only query log; the subscriber's own timestamp completes the
//! record.

use tracing::info;

use leasecurve_core::Date;

/// Records one served calculation.
pub fn record(requested: Date, effective: Date, term: u32, rate: f64, calculation: &str) {
    info!(
        target: "audit",
        requested = %requested,
        effective = %effective,
        term,
        rate,
        calculation,
        "lease rate served"
    );
}
