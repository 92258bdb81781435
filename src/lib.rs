//! # ABMPC-USA
//!
//! Agent-Based Model Choice USA - a dashboard service that serves simulated
//! economic model output joined with real-world US reference series.
//!
//! The service downloads a quarterly CSV dataset, memoizes it per requested
//! row count, and renders a single dashboard page backed by a JSON API:
//! static narrative text, fixed model-parameter tiles, a disclaimer gate,
//! a financial-quarters slider, and two Plotly figure specifications (money
//! supply velocity and fiscal balance).
//!
//! ## Modules
//!
//! - [`dataset`]: remote CSV fetch, schema parsing, and per-row-count cache
//! - [`charts`]: Plotly-shaped figure specifications for the two charts
//! - [`page`]: static page content, slider range, and session state
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use abmpc::api::{serve, ApiConfig, AppState};
//! use abmpc::config::DatasetConfig;
//! use abmpc::dataset::{DatasetCache, HttpSource};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = Arc::new(HttpSource::new(&DatasetConfig::default()));
//!     let cache = Arc::new(DatasetCache::new(source));
//!
//!     let config = ApiConfig::default();
//!     let state = AppState::new(cache, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod page;

// Re-export top-level types for convenience
pub use dataset::{
    DataSource, DatasetCache, DatasetError, DatasetResult, HttpSource, QuarterRow, QuarterSeries,
    StaticSource,
};

pub use charts::{fiscal_figure, velocity_figure, Figure, Layout, Marker, Mode, Trace};

pub use page::{MetricTile, PageContent, QuarterRange, SessionState, SessionStore};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{
    Config, ConfigError, DatasetConfig, LoggingConfig, ApiConfig as ConfigApiConfig,
};
