//! Dataset Sources
//!
//! HTTP download of the published CSV, behind a small source trait so the
//! cache and the API layer can be exercised without network access.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::DatasetConfig;

use super::error::{DatasetError, DatasetResult};
use super::series::QuarterSeries;

/// A source of the quarterly dataset
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the series truncated to the first `nrows` rows.
    ///
    /// `nrows == 0` returns an empty series. Failures surface as errors;
    /// sources do not retry.
    async fn fetch(&self, nrows: usize) -> DatasetResult<QuarterSeries>;
}

/// Downloads the CSV from the configured endpoint
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Create a source against the configured dataset endpoint
    pub fn new(config: &DatasetConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            url: config.url.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch(&self, nrows: usize) -> DatasetResult<QuarterSeries> {
        let started = std::time::Instant::now();

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                DatasetError::Timeout
            } else if e.is_connect() {
                DatasetError::Unavailable
            } else {
                DatasetError::Request(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DatasetError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| DatasetError::Request(e.to_string()))?;

        let series = QuarterSeries::from_csv(&body, nrows)?;

        tracing::info!(
            url = %self.url,
            nrows,
            rows = series.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fetched dataset"
        );

        Ok(series)
    }
}

/// Serves a fixed in-memory CSV (tests and offline runs)
pub struct StaticSource {
    csv: String,
}

impl StaticSource {
    pub fn new(csv: impl Into<String>) -> Self {
        Self { csv: csv.into() }
    }
}

#[async_trait]
impl DataSource for StaticSource {
    async fn fetch(&self, nrows: usize) -> DatasetResult<QuarterSeries> {
        QuarterSeries::from_csv(&self.csv, nrows)
    }
}
