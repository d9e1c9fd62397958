//! Anomaly detector trait definition.

use crate::model::AnomalyVerdict;

/// Anomaly detector trait.
///
/// Implementations judge a single observation against a history of past
/// observations. Evaluation is pure: no state is carried between calls, so
/// a detector can be shared across threads without locking.
pub trait AnomalyDetector: Send + Sync {
    /// Evaluate `current` against `history`.
    ///
    /// Never fails for finite input. A history that is too short yields a
    /// verdict with `is_anomaly == false` and an empty message.
    fn evaluate(&self, history: &[f64], current: f64) -> AnomalyVerdict;

    /// Minimum number of historical observations needed for a determination.
    fn min_history(&self) -> usize;

    /// Whether `history` is long enough for a determination.
    fn has_sufficient_data(&self, history: &[f64]) -> bool {
        history.len() >= self.min_history()
    }
}
