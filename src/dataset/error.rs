//! Dataset error types
//!
//! Errors that can occur while loading the launch records file.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a launch dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The dataset file could not be opened or read
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader failed (bad quoting, unreadable header, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A data row could not be turned into a launch record
    #[error("Line {line}: {reason}")]
    InvalidRow { line: usize, reason: String },

    /// No usable rows were found
    #[error("Dataset contains no launch records")]
    Empty,
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatasetError::MissingColumn("class".to_string());
        assert_eq!(err.to_string(), "Missing required column: class");

        let err = DatasetError::InvalidRow {
            line: 4,
            reason: "bad outcome".to_string(),
        };
        assert_eq!(err.to_string(), "Line 4: bad outcome");

        assert_eq!(
            DatasetError::Empty.to_string(),
            "Dataset contains no launch records"
        );
    }
}
