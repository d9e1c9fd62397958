//! Basic example demonstrating cost anomaly detection
//!
//! Run with: cargo run --example basic -p anomaly

use anomaly::{AnomalyDetector, DetectorConfig, ThresholdAnomalyDetector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== anomaly Basic Examples ===\n");

    let history = vec![1850.0, 1920.5, 1790.0, 1880.25, 1905.0, 1830.75];
    println!("Historical costs: {:?}\n", history);

    // 1. Default detector (mean + 2 * std dev, at least 3 points)
    println!("1. Default detector");
    let detector = ThresholdAnomalyDetector::default();
    if let Some(threshold) = detector.threshold(&history) {
        println!("   Threshold: {:.2}", threshold);
    }
    for current in [1910.0, 4520.5] {
        let verdict = detector.evaluate(&history, current);
        println!("   {:>8.2} -> anomaly={} {}", current, verdict.is_anomaly, verdict.message);
    }

    // 2. Too little history
    println!("\n2. Insufficient history");
    let verdict = detector.evaluate(&history[..2], 10_000.0);
    println!("   anomaly={} message={:?}", verdict.is_anomaly, verdict.message);

    // 3. Custom configuration
    println!("\n3. Custom detector (multiplier=1.0, currency=$)");
    let config = DetectorConfig::default()
        .with_multiplier(1.0)
        .with_currency_symbol("$");
    let strict = ThresholdAnomalyDetector::from_config(config)?;
    let verdict = strict.evaluate(&history, 1935.0);
    println!("   anomaly={} {}", verdict.is_anomaly, verdict.message);

    println!("\n=== Examples Complete ===");
    Ok(())
}
