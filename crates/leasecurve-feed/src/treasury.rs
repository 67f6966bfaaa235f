//! HTTP client for the Treasury daily yield-curve feed.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{FeedResult, FetchError};
use crate::source::{CurveSource, YearObservations};
use crate::xml::parse_feed;

/// The publisher's XML view endpoint.
pub const DEFAULT_FEED_URL: &str =
    "https://home.treasury.gov/resource-center/data-chart-center/interest-rates/pages/xmlview";

/// Bound on how long one year's fetch may stall on an unresponsive upstream.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches yearly observations from the Treasury XML feed.
pub struct TreasuryClient {
    client: reqwest::Client,
    base_url: String,
}

impl TreasuryClient {
    /// Creates a client against the live publisher endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_FEED_URL)
    }

    /// Creates a client against an alternate endpoint (mirror or test
    /// server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn year_url(&self, year: i32) -> String {
        format!(
            "{}?data=daily_treasury_yield_curve&field_tdr_date_value={}",
            self.base_url, year
        )
    }
}

impl Default for TreasuryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CurveSource for TreasuryClient {
    async fn fetch_year(&self, year: i32) -> FeedResult<YearObservations> {
        let url = self.year_url(year);
        debug!(year, %url, "fetching yield curve year");

        let response = self
            .client
            .get(&url)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                year,
            });
        }

        let body = response.text().await?;
        parse_feed(&body)
    }
}
