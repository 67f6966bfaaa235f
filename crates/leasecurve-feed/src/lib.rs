//! # Leasecurve Feed
//!
//! Fetches daily yield-curve observations from the upstream publisher.
//!
//! The publisher exposes one XML document per calendar year; each `<entry>`
//! carries an observation date and up to eleven tenor rates. The feed is
//! untrusted and occasionally unavailable, so every failure is scoped to the
//! year being fetched: the caller skips that year and moves on.
//!
//! [`CurveSource`] is the seam between the cache-refresh logic and the
//! network; [`TreasuryClient`] is the HTTP implementation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod source;
pub mod treasury;
mod xml;

pub use error::{FeedResult, FetchError};
pub use source::{CurveSource, StaticSource, YearObservations};
pub use treasury::{TreasuryClient, DEFAULT_FEED_URL};
