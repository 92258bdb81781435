//! Dataset Error Types

use thiserror::Error;

/// Errors that can occur while fetching or parsing the dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    /// HTTP request failed
    #[error("Dataset request failed: {0}")]
    Request(String),

    /// Request timed out
    #[error("Dataset request timed out")]
    Timeout,

    /// Endpoint could not be reached
    #[error("Dataset endpoint unavailable")]
    Unavailable,

    /// Endpoint answered with a non-success status
    #[error("Dataset endpoint returned status {status}")]
    Status { status: u16 },

    /// A CSV row did not match the quarterly schema
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A row broke the chronological ordering of the series
    #[error("Line {line}: date '{date}' is out of chronological order")]
    OutOfOrder { line: usize, date: String },
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
