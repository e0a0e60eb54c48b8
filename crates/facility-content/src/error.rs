//! Error types for facility-content

/// Result type for facility-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating replacement XML
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid frequency {value:?} in position line {line:?}")]
    InvalidFrequency { value: String, line: String },

    #[error("Position line has too few fields (expected 7): {line:?}")]
    MissingFields { line: String },

    #[error("Import timestamp fractional seconds out of range")]
    TimestampRange,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_frequency(value: impl Into<String>, line: impl Into<String>) -> Self {
        Self::InvalidFrequency {
            value: value.into(),
            line: line.into(),
        }
    }

    pub fn missing_fields(line: impl Into<String>) -> Self {
        Self::MissingFields { line: line.into() }
    }
}
