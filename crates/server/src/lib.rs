//! # anomaly-server
//!
//! REST transport for the cost anomaly detector.
//!
//! Exposes a single `POST /detect` endpoint. All statistics live in the
//! `anomaly` crate; this crate only validates requests and shapes responses.

#![deny(unsafe_code)]

use std::sync::Arc;

use anomaly::ThresholdAnomalyDetector;
use axum::routing::post;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
mod error;
pub mod routes;

pub use config::ServerArgs;
pub use error::ApiError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    detector: Arc<ThresholdAnomalyDetector>,
}

impl AppState {
    pub fn new(detector: ThresholdAnomalyDetector) -> Self {
        Self {
            detector: Arc::new(detector),
        }
    }

    pub fn detector(&self) -> &ThresholdAnomalyDetector {
        &self.detector
    }
}

/// Build the router with CORS and request tracing.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/detect", post(routes::detect))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
