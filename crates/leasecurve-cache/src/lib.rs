//! # Leasecurve Cache
//!
//! Process-wide store of daily yield-curve observations.
//!
//! The cache is the durable source of truth: loaded from a JSON snapshot at
//! startup, extended by a periodic background refresh that merges per-date
//! (never wholesale replacement), and persisted back after every refresh
//! that brought data in. The refresh worker is the cache's only writer;
//! request handlers read concurrently against whatever is resident.
//!
//! Lookback policy is strict: a requested date with no observation on or
//! before it is an error, never silently served from newer data.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod error;
pub mod refresh;
mod snapshot;

pub use cache::{CurveCache, RefreshOutcome};
pub use error::{CacheError, CacheResult};
pub use refresh::RefreshWorker;
