//! Error types for symptomcheck
//!
//! The classifier itself is total and never fails; these errors belong to
//! the layers around it (input validation, cancellation, configuration).

use thiserror::Error;

/// Main error type for the diagnosis pipeline
#[derive(Error, Debug)]
pub enum DiagnosisError {
    /// Caller submitted an empty symptom list
    #[error("No symptoms selected: please select at least one symptom")]
    NoSymptoms,

    /// Pending diagnosis was cancelled before it resolved
    #[error("Diagnosis cancelled")]
    Cancelled,

    /// Provider failed to produce a label
    #[error("Failed to analyze symptoms. Please try again. ({0})")]
    AnalysisFailed(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic errors with context
    #[error("Diagnosis error: {0}")]
    Generic(String),
}

impl DiagnosisError {
    /// Whether the error came from user input rather than the pipeline
    pub fn is_user_error(&self) -> bool {
        matches!(self, DiagnosisError::NoSymptoms)
    }
}

/// Result type alias for diagnosis operations
pub type Result<T> = std::result::Result<T, DiagnosisError>;

/// Convert anyhow errors to DiagnosisError
impl From<anyhow::Error> for DiagnosisError {
    fn from(err: anyhow::Error) -> Self {
        DiagnosisError::Generic(err.to_string())
    }
}
