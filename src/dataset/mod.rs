//! Dataset Loading
//!
//! This module owns the remote time-series dataset: downloading the CSV,
//! parsing it into the quarterly schema, and memoizing the result per
//! requested row count.
//!
//! The dataset is never mutated after a fetch. Consumers receive an
//! `Arc<QuarterSeries>` read view; repeated requests for the same row count
//! within a process return the identical cached table.

mod cache;
mod error;
mod fetch;
mod series;

pub use cache::{CacheStats, DatasetCache};
pub use error::{DatasetError, DatasetResult};
pub use fetch::{DataSource, HttpSource, StaticSource};
pub use series::{QuarterRow, QuarterSeries};
