//! # Leasecurve Server
//!
//! REST surface for the lease discount rate service.
//!
//! ## Endpoints
//!
//! - `GET /calculate?date=YYYY-MM-DD&term=N`: derive the rate for a lease
//!   of `N` months as of `date`
//! - `GET /curve?date=YYYY-MM-DD`: the resolved observation's tenor curve
//! - `GET /health`: liveness probe
//!
//! ## Usage
//!
//! ```ignore
//! use leasecurve_server::{Server, ServerConfig};
//!
//! let server = Server::new(config, cache);
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod audit;
pub mod config;
pub mod handlers;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use leasecurve_cache::CurveCache;

pub use config::ServerConfig;

/// The Leasecurve server.
pub struct Server {
    config: ServerConfig,
    cache: Arc<CurveCache>,
}

impl Server {
    /// Create a new server.
    pub fn new(config: ServerConfig, cache: Arc<CurveCache>) -> Self {
        Self { config, cache }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router(self.cache.clone())
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = SocketAddr::new(
            self.config.host.parse().unwrap_or([0, 0, 0, 0].into()),
            self.config.port,
        );

        info!("Starting Leasecurve server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}
