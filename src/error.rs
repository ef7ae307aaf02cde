//! Error types for the bikeshare explorer
//!
//! One typed error enum built with thiserror covers loading, configuration and
//! the interactive session. Invalid operator input never reaches this type: the
//! controller re-prompts instead.

use thiserror::Error;

/// Main error type for bikeshare operations
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// Polars data processing error
    #[error("Data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Column not found in data
    #[error("Column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    /// Start timestamp text could not be parsed
    #[error("Row {row}: cannot parse start time '{value}': {source}")]
    TimestampParse {
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Start timestamp is empty
    #[error("Row {row}: start time is missing")]
    MissingTimestamp { row: usize },

    /// Operator input stream reached end of file
    #[error("Input closed")]
    InputClosed,
}

/// Result type alias for bikeshare operations
pub type Result<T> = std::result::Result<T, BikeshareError>;

/// Console-friendly error message formatting
impl BikeshareError {
    /// Get a user-friendly error message suitable for printing to the operator
    pub fn user_message(&self) -> String {
        match self {
            BikeshareError::FileIo(e) => format!("File error: {}", e),
            BikeshareError::Polars(e) => format!("Data error: {}", e),
            BikeshareError::Config(msg) => format!("Config error: {}", msg),
            BikeshareError::Json(e) => format!("JSON error: {}", e),
            BikeshareError::ColumnNotFound { column } => {
                format!("Column '{}' not found", column)
            }
            BikeshareError::TimestampParse { row, value, .. } => {
                format!("Start time '{}' on row {} is not a valid timestamp", value, row)
            }
            BikeshareError::MissingTimestamp { row } => {
                format!("Start time on row {} is empty", row)
            }
            BikeshareError::InputClosed => "Input closed".to_string(),
        }
    }

    /// Get a short title for the error
    pub fn title(&self) -> &'static str {
        match self {
            BikeshareError::FileIo(_) => "File Error",
            BikeshareError::Polars(_) => "Data Error",
            BikeshareError::Config(_) => "Configuration Error",
            BikeshareError::Json(_) => "JSON Error",
            BikeshareError::ColumnNotFound { .. } => "Column Not Found",
            BikeshareError::TimestampParse { .. } | BikeshareError::MissingTimestamp { .. } => {
                "Parse Error"
            }
            BikeshareError::InputClosed => "Input Closed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BikeshareError::ColumnNotFound {
            column: "User Type".to_string(),
        };
        assert_eq!(err.user_message(), "Column 'User Type' not found");
        assert_eq!(err.title(), "Column Not Found");

        let err = BikeshareError::MissingTimestamp { row: 7 };
        assert_eq!(err.user_message(), "Start time on row 7 is empty");
        assert_eq!(err.title(), "Parse Error");
    }

    #[test]
    fn test_timestamp_parse_message() {
        let source = chrono::NaiveDateTime::parse_from_str("yesterday", "%Y-%m-%d %H:%M:%S")
            .unwrap_err();
        let err = BikeshareError::TimestampParse {
            row: 3,
            value: "yesterday".to_string(),
            source,
        };
        assert_eq!(
            err.user_message(),
            "Start time 'yesterday' on row 3 is not a valid timestamp"
        );
        assert!(err.to_string().starts_with("Row 3: cannot parse start time 'yesterday'"));
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BikeshareError = io_err.into();
        assert!(matches!(err, BikeshareError::FileIo(_)));
    }
}
