//! ABMPC-USA Dashboard Server
//!
//! Run with: cargo run --bin abmpc-api
//!
//! # Configuration
//!
//! Loaded from `config.toml` (see `config::generate_default_config`), with
//! environment variable overrides:
//! - `ABMPC_DATASET_URL`: Remote CSV endpoint
//! - `ABMPC_DATASET_TIMEOUT_MS`: Dataset request timeout (default: 10000)
//! - `ABMPC_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `ABMPC_API_PORT`: Port to listen on (default: 8090)
//! - `ABMPC_LOG_LEVEL`: Log level (default: info)
//! - `ABMPC_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Overrides the log filter entirely

use abmpc::api::{serve, ApiConfig, AppState};
use abmpc::config::Config;
use abmpc::dataset::{DatasetCache, HttpSource};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config decides the log level and format, so it loads first; its own
    // load messages predate the subscriber and are dropped.
    let config = Config::load_default();

    init_tracing(&config.logging.level, &config.logging.format);

    tracing::info!("Starting ABMPC-USA dashboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dataset endpoint: {}", config.dataset.url);

    // Remote dataset behind the per-row-count cache
    let source = Arc::new(HttpSource::new(&config.dataset));
    let cache = Arc::new(DatasetCache::new(source));

    let api_config = ApiConfig {
        host: config.api.host.clone(),
        port: config.api.port,
        request_timeout_ms: config.api.request_timeout_secs * 1000,
    };

    let state =
        AppState::new(cache, api_config.clone()).with_dataset_url(config.dataset.url.clone());

    serve(state, &api_config).await?;

    tracing::info!("ABMPC-USA dashboard stopped");
    Ok(())
}

/// Initialize tracing with the configured level and format
fn init_tracing(level: &str, format: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("abmpc={level},tower_http=debug").into());

    let registry = tracing_subscriber::registry().with(filter);

    if format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
