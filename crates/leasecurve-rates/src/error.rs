//! Error types for rate derivation.

use thiserror::Error;

/// A specialized Result type for rate derivation.
pub type RateResult<T> = Result<T, RateError>;

/// Error types for rate derivation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    /// The observation has no present rate at any tenor, so no term can be
    /// quoted from it.
    #[error("No tenor data available in the observation")]
    NoTenorData,
}
