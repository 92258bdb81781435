//! Dataset Cache
//!
//! Memoizes fetch results per requested row count. A given row count is
//! fetched from the source at most once per process; later requests return
//! the identical cached table. There is no eviction.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::error::DatasetResult;
use super::fetch::DataSource;
use super::series::QuarterSeries;

/// Per-row-count memoization of dataset fetches
pub struct DatasetCache {
    source: Arc<dyn DataSource>,
    entries: RwLock<HashMap<usize, Arc<QuarterSeries>>>,
}

/// Cache counters for health reporting
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub cached_rows: usize,
}

impl DatasetCache {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Get the series for `nrows`, fetching it on first use.
    ///
    /// Concurrent first requests for the same row count may race to fetch,
    /// but only one result is stored; every caller observes that one table.
    pub async fn get(&self, nrows: usize) -> DatasetResult<Arc<QuarterSeries>> {
        if let Some(series) = self.entries.read().await.get(&nrows) {
            tracing::debug!(nrows, "Dataset cache hit");
            return Ok(Arc::clone(series));
        }

        // Fetch outside the write lock so a slow download does not block readers
        let fetched = self.source.fetch(nrows).await?;

        let mut entries = self.entries.write().await;
        let entry = entries
            .entry(nrows)
            .or_insert_with(|| Arc::new(fetched));

        tracing::debug!(nrows, rows = entry.len(), "Dataset cached");
        Ok(Arc::clone(entry))
    }

    pub async fn stats(&self) -> CacheStats {
        let entries = self.entries.read().await;
        CacheStats {
            entries: entries.len(),
            cached_rows: entries.values().map(|s| s.len()).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::error::DatasetResult;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const SAMPLE: &str = "\
date,velocity_bills_issued_as_percent_gdp,bills_supply_trend,value,value_trend,fiscal_balance
1974-03-31,1.2,1.1,7.5,7.4,-120.5
1974-06-30,1.3,1.15,7.6,7.45,-98.2
1974-09-30,1.1,1.18,7.9,7.5,35.0
";

    /// Counts how often the underlying source is consulted
    struct CountingSource {
        fetches: AtomicUsize,
    }

    impl CountingSource {
        fn new() -> Self {
            Self {
                fetches: AtomicUsize::new(0),
            }
        }

        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DataSource for CountingSource {
        async fn fetch(&self, nrows: usize) -> DatasetResult<QuarterSeries> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            QuarterSeries::from_csv(SAMPLE, nrows)
        }
    }

    #[tokio::test]
    async fn test_same_row_count_fetched_once() {
        let source = Arc::new(CountingSource::new());
        let cache = DatasetCache::new(Arc::clone(&source) as Arc<dyn DataSource>);

        let first = cache.get(2).await.unwrap();
        let second = cache.get(2).await.unwrap();

        assert_eq!(source.fetch_count(), 1);
        assert_eq!(first.rows(), second.rows());
        // Same table, not just equal content
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_distinct_row_counts_cached_separately() {
        let source = Arc::new(CountingSource::new());
        let cache = DatasetCache::new(Arc::clone(&source) as Arc<dyn DataSource>);

        let empty = cache.get(0).await.unwrap();
        let two = cache.get(2).await.unwrap();
        let all = cache.get(100).await.unwrap();

        assert_eq!(source.fetch_count(), 3);
        assert!(empty.is_empty());
        assert_eq!(two.len(), 2);
        assert_eq!(all.len(), 3);

        let stats = cache.stats().await;
        assert_eq!(stats.entries, 3);
        assert_eq!(stats.cached_rows, 5);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        struct FailingSource {
            fetches: AtomicUsize,
        }

        #[async_trait]
        impl DataSource for FailingSource {
            async fn fetch(&self, _nrows: usize) -> DatasetResult<QuarterSeries> {
                self.fetches.fetch_add(1, Ordering::SeqCst);
                Err(crate::dataset::DatasetError::Unavailable)
            }
        }

        let source = Arc::new(FailingSource {
            fetches: AtomicUsize::new(0),
        });
        let cache = DatasetCache::new(Arc::clone(&source) as Arc<dyn DataSource>);

        assert!(cache.get(4).await.is_err());
        assert!(cache.get(4).await.is_err());
        // Each failed request hits the source again
        assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
        assert_eq!(cache.stats().await.entries, 0);
    }
}
