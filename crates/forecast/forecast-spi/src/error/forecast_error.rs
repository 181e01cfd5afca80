//! Forecast error types

use series_spi::SeriesError;
use thiserror::Error;

/// Errors that can occur during forecasting operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Period indices have zero variance, so no line can be fitted
    #[error("Degenerate fit: {0}")]
    DegenerateFit(String),

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Error raised by the series store
    #[error(transparent)]
    Series(#[from] SeriesError),
}

impl ForecastError {
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_insufficient_data_error_message() {
        let error = ForecastError::InsufficientData {
            required: 3,
            actual: 2,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 3 points, got 2"
        );
    }

    #[test]
    fn test_insufficient_data_error_fields() {
        let error = ForecastError::InsufficientData {
            required: 3,
            actual: 0,
        };
        if let ForecastError::InsufficientData { required, actual } = error {
            assert_eq!(required, 3);
            assert_eq!(actual, 0);
        } else {
            panic!("Expected InsufficientData variant");
        }
    }

    #[test]
    fn test_degenerate_fit_message() {
        let error = ForecastError::DegenerateFit("all period indices are equal".to_string());
        assert_eq!(
            error.to_string(),
            "Degenerate fit: all period indices are equal"
        );
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let error = ForecastError::invalid_parameter("horizon", "must be at least 1");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'horizon': must be at least 1"
        );
    }

    #[test]
    fn test_series_error_is_transparent() {
        let error: ForecastError = SeriesError::InvalidSample("negative".to_string()).into();
        assert_eq!(error.to_string(), "Invalid sample: negative");
        assert!(matches!(error, ForecastError::Series(_)));
    }

    #[test]
    fn test_error_can_be_boxed() {
        let boxed: Box<dyn Error + Send + Sync> =
            Box::new(ForecastError::DegenerateFit("x".to_string()));
        assert_eq!(boxed.to_string(), "Degenerate fit: x");
    }

    #[test]
    fn test_error_downcast() {
        let error: Box<dyn Error> = Box::new(ForecastError::InsufficientData {
            required: 3,
            actual: 1,
        });
        let downcasted = error.downcast_ref::<ForecastError>();
        assert!(matches!(
            downcasted,
            Some(ForecastError::InsufficientData { actual: 1, .. })
        ));
    }

    #[test]
    fn test_all_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ForecastError>();
    }
}
