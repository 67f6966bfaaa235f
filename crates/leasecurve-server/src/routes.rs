//! Route definitions.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use leasecurve_cache::CurveCache;

use crate::handlers::{self, AppState};

/// Create the API router.
pub fn create_router(cache: Arc<CurveCache>) -> Router {
    let state = Arc::new(AppState { cache });

    Router::new()
        // Health
        .route("/health", get(handlers::health))
        // Rate derivation
        .route("/calculate", get(handlers::calculate))
        // Curve view for the presentation layer
        .route("/curve", get(handlers::get_curve))
        // State
        .with_state(state)
}
