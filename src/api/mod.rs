//! ABMPC-USA REST API
//!
//! HTTP API layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Dashboard page (embedded static HTML)
//! - `GET /api/v1/dashboard` - Full page model for one render pass
//!
//! ## Charts
//! - `GET /api/v1/charts/velocity` - Money supply velocity figure
//! - `GET /api/v1/charts/fiscal` - Fiscal balance figure
//!
//! ## Session
//! - `POST /api/v1/session` - Create a session
//! - `GET /api/v1/session` - Current session flags
//! - `POST /api/v1/session/disclaimer` - Accept the disclaimer
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use abmpc::api::{build_router, serve, ApiConfig, AppState};
//! use abmpc::config::DatasetConfig;
//! use abmpc::dataset::{DatasetCache, HttpSource};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = Arc::new(HttpSource::new(&DatasetConfig::default()));
//!     let cache = Arc::new(DatasetCache::new(source));
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(cache, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Dashboard route
        .route("/dashboard", get(routes::dashboard::get_dashboard))
        // Chart routes
        .route("/charts/velocity", get(routes::charts::velocity_chart))
        .route("/charts/fiscal", get(routes::charts::fiscal_chart))
        // Session routes
        .route("/session", post(routes::session::create_session))
        .route("/session", get(routes::session::get_session))
        .route("/session/disclaimer", post(routes::session::accept_disclaimer));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::dashboard::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("ABMPC-USA dashboard listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("ABMPC-USA dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
