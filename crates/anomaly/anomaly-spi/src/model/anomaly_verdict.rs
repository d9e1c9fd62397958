//! Anomaly verdict types.

use serde::{Deserialize, Serialize};

/// Summary statistics of a history, computed when a determination was made.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStats {
    /// Number of historical observations.
    pub count: usize,
    /// Arithmetic mean of the history.
    pub mean: f64,
    /// Sample (Bessel-corrected) standard deviation of the history.
    pub std_dev: f64,
    /// `mean + multiplier * std_dev`.
    pub threshold: f64,
}

/// Outcome of evaluating one observation against its history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyVerdict {
    /// Whether the observation lies strictly above the threshold.
    pub is_anomaly: bool,
    /// Human-readable explanation; empty unless anomalous.
    pub message: String,
    /// Statistics behind the verdict; `None` when the history was too short.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<SeriesStats>,
}

impl AnomalyVerdict {
    /// Verdict for a history too short to judge.
    pub fn insufficient_data() -> Self {
        Self {
            is_anomaly: false,
            message: String::new(),
            stats: None,
        }
    }

    /// Verdict for an observation within the threshold.
    pub fn normal(stats: SeriesStats) -> Self {
        Self {
            is_anomaly: false,
            message: String::new(),
            stats: Some(stats),
        }
    }

    /// Verdict for an observation above the threshold.
    pub fn anomalous(stats: SeriesStats, message: impl Into<String>) -> Self {
        Self {
            is_anomaly: true,
            message: message.into(),
            stats: Some(stats),
        }
    }

    /// Whether a determination was made at all.
    pub fn is_determined(&self) -> bool {
        self.stats.is_some()
    }

    /// Drop the statistics, leaving only the public `isAnomaly`/`message` pair.
    pub fn without_stats(mut self) -> Self {
        self.stats = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> SeriesStats {
        SeriesStats {
            count: 3,
            mean: 20.0,
            std_dev: 10.0,
            threshold: 40.0,
        }
    }

    #[test]
    fn test_insufficient_data_is_undetermined() {
        let verdict = AnomalyVerdict::insufficient_data();
        assert!(!verdict.is_anomaly);
        assert!(verdict.message.is_empty());
        assert!(!verdict.is_determined());
    }

    #[test]
    fn test_serializes_camel_case_without_stats() {
        let verdict = AnomalyVerdict::insufficient_data();
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json, serde_json::json!({ "isAnomaly": false, "message": "" }));
    }

    #[test]
    fn test_serializes_stats_when_present() {
        let verdict = AnomalyVerdict::anomalous(stats(), "Alert");
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["isAnomaly"], true);
        assert_eq!(json["stats"]["stdDev"], 10.0);
        assert_eq!(json["stats"]["threshold"], 40.0);
    }

    #[test]
    fn test_without_stats() {
        let verdict = AnomalyVerdict::normal(stats()).without_stats();
        assert_eq!(verdict, AnomalyVerdict::insufficient_data());
    }
}
