//! Anomaly Detection Core
//!
//! The threshold detector, the statistics behind it, and alert formatting.

mod alerting;
mod detectors;
pub mod stats;

pub use alerting::*;
pub use detectors::*;
