//! Request handlers.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use leasecurve_cache::CurveCache;
use leasecurve_core::{Date, TenorCurve};
use leasecurve_rates::interpolate;

use crate::audit;

/// Application state.
pub struct AppState {
    /// The observation cache
    pub cache: Arc<CurveCache>,
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Query parameters for a rate calculation.
#[derive(Debug, Deserialize)]
pub struct CalculateQuery {
    /// Lease date (YYYY-MM-DD)
    pub date: String,
    /// Lease term in months
    pub term: u32,
}

/// Response for a rate calculation.
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    /// Effective observation date the rate was derived from
    pub date: String,
    /// Lease term in months, echoed back
    pub term: u32,
    /// The derived rate, rounded to 3 decimal places
    pub lease_rate: f64,
    /// Human-readable account of how the rate was obtained
    pub calculation: String,
}

/// Derive the discount rate for a lease of `term` months as of `date`.
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CalculateQuery>,
) -> impl IntoResponse {
    let requested = match Date::parse(&query.date) {
        Ok(d) => d,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": e.to_string() })),
            );
        }
    };

    if query.term == 0 {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "term must be a positive number of months" })),
        );
    }

    // Lookback resolution, then term derivation; the two failure modes stay
    // distinguishable in the response.
    let (effective, curve) = match state.cache.resolve(requested) {
        Ok(resolved) => resolved,
        Err(e) => {
            return (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": e.to_string() })),
            );
        }
    };

    let quote = match interpolate(&curve, query.term) {
        Ok(q) => q,
        Err(_) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({
                    "error": format!("observation {} has no tenor data", effective)
                })),
            );
        }
    };

    let lease_rate = round_rate(quote.rate);
    let calculation = quote.derivation.to_string();

    audit::record(requested, effective, query.term, lease_rate, &calculation);

    let response = CalculateResponse {
        date: effective.to_string(),
        term: query.term,
        lease_rate,
        calculation,
    };

    (StatusCode::OK, Json(serde_json::to_value(response).unwrap()))
}

/// Query parameters for a curve view.
#[derive(Debug, Deserialize)]
pub struct CurveQuery {
    /// Observation date to resolve (YYYY-MM-DD)
    pub date: String,
}

/// Response carrying one resolved observation.
#[derive(Debug, Serialize)]
pub struct CurveResponse {
    /// Effective observation date
    pub date: String,
    /// Present tenor rates
    pub tenors: TenorCurve,
}

/// Return the resolved observation's tenor curve for a date.
pub async fn get_curve(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CurveQuery>,
) -> impl IntoResponse {
    let requested = match Date::parse(&query.date) {
        Ok(d) => d,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": e.to_string() })),
            );
        }
    };

    match state.cache.resolve(requested) {
        Ok((effective, curve)) => {
            let response = CurveResponse {
                date: effective.to_string(),
                tenors: curve,
            };
            (StatusCode::OK, Json(serde_json::to_value(response).unwrap()))
        }
        Err(e) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": e.to_string() })),
        ),
    }
}

/// Rounds a rate to the 3 decimal places shown to callers.
fn round_rate(rate: f64) -> f64 {
    (rate * 1000.0).round() / 1000.0
}
