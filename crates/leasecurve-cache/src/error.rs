//! Error types for cache operations.

use leasecurve_core::Date;
use thiserror::Error;

/// A specialized Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Error types for cache operations.
#[derive(Error, Debug, Clone)]
pub enum CacheError {
    /// The durable snapshot was missing or unreadable at startup.
    /// Recovered by starting with an empty cache.
    #[error("Snapshot load failed: {reason}")]
    Load {
        /// Description of the load failure.
        reason: String,
    },

    /// The durable snapshot could not be written. The in-memory merge
    /// survives; the next successful refresh rewrites the file.
    #[error("Snapshot persist failed: {reason}")]
    Persist {
        /// Description of the write failure.
        reason: String,
    },

    /// No cached observation exists on or before the requested date.
    #[error("No yield curve data on or before {requested}")]
    NoData {
        /// The date that could not be resolved.
        requested: Date,
    },
}

impl CacheError {
    /// Creates a snapshot load error.
    #[must_use]
    pub fn load(reason: impl Into<String>) -> Self {
        Self::Load {
            reason: reason.into(),
        }
    }

    /// Creates a snapshot persist error.
    #[must_use]
    pub fn persist(reason: impl Into<String>) -> Self {
        Self::Persist {
            reason: reason.into(),
        }
    }
}
