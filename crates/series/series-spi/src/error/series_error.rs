//! Series error types.

use thiserror::Error;

/// Errors raised at the series store boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    /// Sample rejected on append (negative, non-finite, unlabeled)
    #[error("Invalid sample: {0}")]
    InvalidSample(String),

    /// Delimited text could not be read or written
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON input could not be parsed
    #[error("JSON error: {0}")]
    Json(String),

    /// Underlying reader or writer failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Input contained no usable rows
    #[error("No sales data found")]
    NoData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_sample_message() {
        let error = SeriesError::InvalidSample("value must be non-negative, got -5".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid sample: value must be non-negative, got -5"
        );
    }

    #[test]
    fn test_csv_and_json_messages() {
        assert_eq!(
            SeriesError::Csv("bad row".to_string()).to_string(),
            "CSV error: bad row"
        );
        assert_eq!(
            SeriesError::Json("expected array".to_string()).to_string(),
            "JSON error: expected array"
        );
    }

    #[test]
    fn test_no_data_message() {
        assert_eq!(SeriesError::NoData.to_string(), "No sales data found");
    }

    #[test]
    fn test_error_is_send_sync_and_boxable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SeriesError>();

        let boxed: Box<dyn Error + Send + Sync> = Box::new(SeriesError::NoData);
        assert!(boxed.source().is_none());
    }
}
