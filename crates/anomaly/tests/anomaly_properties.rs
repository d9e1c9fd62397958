//! Property tests for the threshold detector

use anomaly::{AnomalyDetector, ThresholdAnomalyDetector};
use proptest::prelude::*;

fn cost() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

proptest! {
    #[test]
    fn short_history_never_flags(
        history in prop::collection::vec(cost(), 0..3),
        current in prop::num::f64::NORMAL,
    ) {
        let verdict = ThresholdAnomalyDetector::default().evaluate(&history, current);
        prop_assert!(!verdict.is_anomaly);
        prop_assert!(verdict.message.is_empty());
    }

    #[test]
    fn evaluation_is_idempotent(
        history in prop::collection::vec(cost(), 0..50),
        current in cost(),
    ) {
        let detector = ThresholdAnomalyDetector::default();
        prop_assert_eq!(
            detector.evaluate(&history, current),
            detector.evaluate(&history, current)
        );
    }

    #[test]
    fn reversing_history_keeps_verdict(
        history in prop::collection::vec(cost(), 3..50),
        offset in 1.0..1.0e3f64,
    ) {
        let detector = ThresholdAnomalyDetector::default();
        let threshold = detector.threshold(&history).unwrap();
        let mut reversed = history.clone();
        reversed.reverse();

        // Stay clear of the threshold so summation order cannot flip the comparison.
        for current in [threshold + offset, threshold - offset] {
            prop_assert_eq!(
                detector.evaluate(&history, current).is_anomaly,
                detector.evaluate(&reversed, current).is_anomaly
            );
        }
    }

    #[test]
    fn rotated_history_keeps_verdict(
        history in prop::collection::vec(cost(), 3..50),
        shift in 0usize..50,
        offset in 1.0..1.0e3f64,
    ) {
        let detector = ThresholdAnomalyDetector::default();
        let threshold = detector.threshold(&history).unwrap();
        let mut rotated = history.clone();
        let len = rotated.len();
        rotated.rotate_left(shift % len);

        for current in [threshold + offset, threshold - offset] {
            prop_assert_eq!(
                detector.evaluate(&history, current).is_anomaly,
                detector.evaluate(&rotated, current).is_anomaly
            );
        }
    }

    #[test]
    fn values_at_or_below_mean_are_never_flagged(
        history in prop::collection::vec(cost(), 3..50),
        below in 0.0..1.0e3f64,
    ) {
        let detector = ThresholdAnomalyDetector::default();
        let mean = detector.evaluate(&history, 0.0).stats.unwrap().mean;
        prop_assert!(!detector.evaluate(&history, mean - below).is_anomaly);
    }
}
