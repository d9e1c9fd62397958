//! HTTP error mapping.

use anomaly::{AnomalyError, ErrorResponse};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Body missing, unparseable, or lacking a required field.
    #[error("invalid input data: {0}")]
    InvalidInput(String),
    /// Detector failure other than bad input. `routes::detect` never raises
    /// one today; it maps any future detector error to a 500.
    #[error(transparent)]
    Anomaly(AnomalyError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

impl From<AnomalyError> for ApiError {
    fn from(err: AnomalyError) -> Self {
        match err {
            AnomalyError::InvalidInput(detail) => Self::InvalidInput(detail),
            other => Self::Anomaly(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // The client always sees the same message; the detail is for logs.
            ApiError::InvalidInput(detail) => {
                tracing::debug!(%detail, "rejected detect request");
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::invalid_input())).into_response()
            }
            ApiError::Anomaly(err) => {
                tracing::error!(error = %err, "detector failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
