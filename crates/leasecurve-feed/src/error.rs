//! Error types for feed operations.

use thiserror::Error;

/// A specialized Result type for feed operations.
pub type FeedResult<T> = Result<T, FetchError>;

/// Error fetching or parsing one calendar year of observations.
///
/// A `FetchError` is always scoped to a single year: the refresh cycle logs
/// it, skips the year, and continues with the rest of the window.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP request itself failed (connect, timeout, body read).
    #[error("Feed request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The publisher answered with a non-success status.
    #[error("Feed returned HTTP {status} for year {year}")]
    HttpStatus {
        /// The response status code.
        status: u16,
        /// The calendar year requested.
        year: i32,
    },

    /// The response body was not a well-formed feed document.
    #[error("Malformed feed document: {reason}")]
    Malformed {
        /// Description of the parse failure.
        reason: String,
    },
}

impl FetchError {
    /// Creates a malformed-document error.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}
