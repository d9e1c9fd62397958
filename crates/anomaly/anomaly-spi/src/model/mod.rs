//! Data models for anomaly detection.

mod anomaly_verdict;

pub use anomaly_verdict::{AnomalyVerdict, SeriesStats};
