//! # anomaly
//!
//! Cost anomaly detection.
//!
//! Judges a new cost against a short history of past costs and flags it when
//! it lies strictly above `mean + 2 * sample_std_dev`.
//!
//! ```
//! use anomaly::{AnomalyDetector, ThresholdAnomalyDetector};
//!
//! let detector = ThresholdAnomalyDetector::default();
//! let verdict = detector.evaluate(&[10.0, 20.0, 30.0], 41.0);
//! assert!(verdict.is_anomaly);
//! ```

pub use anomaly_facade::*;
