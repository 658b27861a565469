//! Error types for prepkit.
//!
//! Every fallible preprocessing operation returns [`PrepError`]; the CLI maps
//! it to a process exit code.

use thiserror::Error;

/// Main error type for the prepkit library.
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("Invalid range for {field}: lower bound {lower} exceeds upper bound {upper}")]
    InvalidRange {
        field: String,
        lower: f64,
        upper: f64,
    },

    #[error("Invalid literal {input:?}: {message}")]
    InvalidLiteral { input: String, message: String },

    #[error("Item {index} is not a list: {found}")]
    NotAList { index: usize, found: String },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

/// Result type alias for prepkit operations.
pub type Result<T> = std::result::Result<T, PrepError>;

impl From<serde_json::Error> for PrepError {
    fn from(err: serde_json::Error) -> Self {
        PrepError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl PrepError {
    /// Create a range error for a named pair of bounds.
    pub fn invalid_range(field: impl Into<String>, lower: f64, upper: f64) -> Self {
        PrepError::InvalidRange {
            field: field.into(),
            lower,
            upper,
        }
    }

    /// Convert to a process exit code.
    ///
    /// Usage errors are reported by the argument parser with code 2 before
    /// any operation runs, so operation failures all share code 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            PrepError::InvalidRange { .. }
            | PrepError::InvalidLiteral { .. }
            | PrepError::NotAList { .. }
            | PrepError::Json { .. } => 1,
        }
    }
}
