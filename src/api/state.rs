//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::dataset::DatasetCache;
use crate::page::{PageContent, QuarterRange, SessionStore};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Memoized dataset fetches, keyed by row count
    pub cache: Arc<DatasetCache>,
    /// Per-browser session flags (disclaimer acceptance)
    pub sessions: Arc<SessionStore>,
    /// Static page content
    pub content: Arc<PageContent>,
    /// Financial-quarters slider range
    pub quarters: QuarterRange,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Dataset endpoint, reported by the health endpoint
    pub dataset_url: String,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(cache: Arc<DatasetCache>, config: ApiConfig) -> Self {
        Self {
            cache,
            sessions: Arc::new(SessionStore::new()),
            content: Arc::new(PageContent::default()),
            quarters: QuarterRange::default(),
            config: Arc::new(config),
            dataset_url: crate::config::DatasetConfig::default().url,
            start_time: Instant::now(),
        }
    }

    /// Override the dataset endpoint reported by the health endpoint
    pub fn with_dataset_url(mut self, url: impl Into<String>) -> Self {
        self.dataset_url = url.into();
        self
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8090,
            request_timeout_ms: 30_000,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
