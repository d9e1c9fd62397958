//! Anomaly detection error types.

use thiserror::Error;

/// Anomaly detection errors.
///
/// Evaluation itself never fails; these cover detector construction and
/// parsing of caller-supplied requests.
#[derive(Debug, Error)]
pub enum AnomalyError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Invalid input data: {0}")]
    InvalidInput(String),
}

impl AnomalyError {
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_input(detail: impl Into<String>) -> Self {
        Self::InvalidInput(detail.into())
    }
}

/// Result type for anomaly detection operations.
pub type Result<T> = std::result::Result<T, AnomalyError>;
