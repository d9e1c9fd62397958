//! Anomaly detector implementations.

use anomaly_api::DetectorConfig;
use anomaly_spi::{AnomalyDetector, AnomalyVerdict, Result};

use super::alerting::alert_message;
use super::stats::summarize;

// ============================================================================
// Threshold Detector
// ============================================================================

/// Mean + k·stddev threshold detector.
///
/// Flags a cost that lies strictly above `mean + multiplier * std_dev` of
/// its history, where `std_dev` is the sample standard deviation. Only
/// upward deviations are reported. Histories shorter than `min_history`
/// produce an empty, non-anomalous verdict.
///
/// Holds configuration only; every call recomputes from scratch.
#[derive(Debug, Clone, Default)]
pub struct ThresholdAnomalyDetector {
    config: DetectorConfig,
}

impl ThresholdAnomalyDetector {
    /// Create a detector with the given multiplier and minimum history.
    pub fn new(multiplier: f64, min_history: usize) -> Result<Self> {
        Self::from_config(DetectorConfig::new(multiplier, min_history))
    }

    /// Create from configuration.
    pub fn from_config(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn multiplier(&self) -> f64 {
        self.config.multiplier
    }

    /// Threshold for `history`, or `None` if it is too short.
    pub fn threshold(&self, history: &[f64]) -> Option<f64> {
        self.has_sufficient_data(history)
            .then(|| summarize(history, self.config.multiplier).threshold)
    }
}

impl AnomalyDetector for ThresholdAnomalyDetector {
    fn evaluate(&self, history: &[f64], current: f64) -> AnomalyVerdict {
        if !self.has_sufficient_data(history) {
            tracing::debug!(
                history_len = history.len(),
                min_history = self.config.min_history,
                "insufficient history, abstaining"
            );
            return AnomalyVerdict::insufficient_data();
        }

        let stats = summarize(history, self.config.multiplier);
        if current > stats.threshold {
            tracing::debug!(
                current,
                mean = stats.mean,
                threshold = stats.threshold,
                "cost above threshold"
            );
            let message = alert_message(current, stats.mean, &self.config.currency_symbol);
            AnomalyVerdict::anomalous(stats, message)
        } else {
            AnomalyVerdict::normal(stats)
        }
    }

    fn min_history(&self) -> usize {
        self.config.min_history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anomaly_spi::AnomalyError;

    #[test]
    fn test_short_history_abstains() {
        let detector = ThresholdAnomalyDetector::default();
        for history in [vec![], vec![1.0], vec![1.0, 2.0]] {
            let verdict = detector.evaluate(&history, 1_000_000.0);
            assert!(!verdict.is_anomaly);
            assert!(verdict.message.is_empty());
            assert!(verdict.stats.is_none());
        }
    }

    #[test]
    fn test_constant_history_equal_current_is_normal() {
        let detector = ThresholdAnomalyDetector::default();
        let verdict = detector.evaluate(&[100.0, 100.0, 100.0], 100.0);
        assert!(!verdict.is_anomaly);
        assert!(verdict.message.is_empty());
        assert_eq!(verdict.stats.map(|s| s.threshold), Some(100.0));
    }

    #[test]
    fn test_constant_history_any_increase_is_anomalous() {
        let detector = ThresholdAnomalyDetector::default();
        let verdict = detector.evaluate(&[100.0, 100.0, 100.0], 101.0);
        assert!(verdict.is_anomaly);
        assert_eq!(
            verdict.message,
            "Alert: This month's cost of ₹101.00 is significantly higher than your average of ₹100.00."
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let detector = ThresholdAnomalyDetector::default();
        let history = [10.0, 20.0, 30.0];
        assert!(!detector.evaluate(&history, 40.0).is_anomaly);
        assert!(detector.evaluate(&history, 41.0).is_anomaly);
    }

    #[test]
    fn test_low_values_are_never_flagged() {
        let detector = ThresholdAnomalyDetector::default();
        let verdict = detector.evaluate(&[10.0, 20.0, 30.0], -1000.0);
        assert!(!verdict.is_anomaly);
        assert!(verdict.is_determined());
    }

    #[test]
    fn test_negative_history_is_accepted() {
        let detector = ThresholdAnomalyDetector::default();
        let verdict = detector.evaluate(&[-10.0, -20.0, -30.0], 5.0);
        assert!(verdict.is_anomaly);
        assert!(verdict.message.contains("₹-20.00"));
    }

    #[test]
    fn test_threshold_accessor() {
        let detector = ThresholdAnomalyDetector::default();
        assert_eq!(detector.threshold(&[1.0, 2.0]), None);
        let threshold = detector.threshold(&[10.0, 20.0, 30.0]).unwrap();
        assert!((threshold - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_custom_multiplier_and_min_history() {
        let detector = ThresholdAnomalyDetector::new(1.0, 2).unwrap();
        assert_eq!(detector.min_history(), 2);
        // mean 15, std dev ~7.07, threshold ~22.07
        assert!(detector.evaluate(&[10.0, 20.0], 23.0).is_anomaly);
        assert!(!detector.evaluate(&[10.0, 20.0], 22.0).is_anomaly);
    }

    #[test]
    fn test_custom_currency_symbol() {
        let config = DetectorConfig::default().with_currency_symbol("$");
        let detector = ThresholdAnomalyDetector::from_config(config).unwrap();
        let verdict = detector.evaluate(&[1000.0, 1000.0, 1000.0], 2500.0);
        assert!(verdict.message.contains("$2,500.00"));
        assert!(verdict.message.contains("$1,000.00"));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = ThresholdAnomalyDetector::new(-2.0, 3).unwrap_err();
        assert!(matches!(err, AnomalyError::InvalidParameter { .. }));
        assert!(ThresholdAnomalyDetector::new(2.0, 1).is_err());
    }

    #[test]
    fn test_detector_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ThresholdAnomalyDetector>();
    }
}
