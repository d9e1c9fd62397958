//! Descriptive statistics over a cost history.

use anomaly_spi::SeriesStats;

/// Arithmetic mean. `NaN` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation around a precomputed `mean`.
///
/// Divides the sum of squared deviations by `n - 1` (Bessel's correction).
/// `NaN` for fewer than two values.
pub fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let sum_sq: f64 = values.iter().map(|x| (x - mean).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// Mean, sample standard deviation and `mean + multiplier * std_dev`.
pub fn summarize(values: &[f64], multiplier: f64) -> SeriesStats {
    let mean = mean(values);
    let std_dev = sample_std_dev(values, mean);
    SeriesStats {
        count: values.len(),
        mean,
        std_dev,
        threshold: mean + multiplier * std_dev,
    }
}
