//! Anomaly Detection API
//!
//! Configuration types and the request/response shapes of the `/detect`
//! boundary.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use anomaly_spi::{AnomalyError, AnomalyVerdict, Result, SeriesStats};

/// Standard deviations above the mean before a cost is flagged.
pub const DEFAULT_MULTIPLIER: f64 = 2.0;

/// Fewest historical costs the detector will judge against.
pub const DEFAULT_MIN_HISTORY: usize = 3;

/// Currency symbol used in alert messages.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Fixed client-facing message for any rejected request.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input data";

// ============================================================================
// Detector Configuration
// ============================================================================

/// Threshold detector configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Standard-deviation multiplier `k` in `mean + k * std_dev` (default: 2.0).
    pub multiplier: f64,
    /// Minimum history length for a determination (default: 3).
    pub min_history: usize,
    /// Symbol prefixed to amounts in alert messages (default: "₹").
    pub currency_symbol: String,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_MULTIPLIER,
            min_history: DEFAULT_MIN_HISTORY,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl DetectorConfig {
    pub fn new(multiplier: f64, min_history: usize) -> Self {
        Self {
            multiplier,
            min_history,
            ..Self::default()
        }
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn with_min_history(mut self, min_history: usize) -> Self {
        self.min_history = min_history;
        self
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Check the configuration.
    ///
    /// `min_history` must be at least 2 so the `n - 1` divisor of the
    /// sample standard deviation is never zero.
    pub fn validate(&self) -> Result<()> {
        if !self.multiplier.is_finite() {
            return Err(AnomalyError::invalid_parameter("multiplier", "must be finite"));
        }
        if self.multiplier < 0.0 {
            return Err(AnomalyError::invalid_parameter(
                "multiplier",
                "must be non-negative",
            ));
        }
        if self.min_history < 2 {
            return Err(AnomalyError::invalid_parameter(
                "min_history",
                "must be at least 2",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Boundary Types
// ============================================================================

/// Body of a `/detect` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectRequest {
    pub historical_costs: Vec<f64>,
    pub current_cost: f64,
}

impl DetectRequest {
    pub fn new(historical_costs: Vec<f64>, current_cost: f64) -> Self {
        Self {
            historical_costs,
            current_cost,
        }
    }

    /// Validate an arbitrary JSON document into a request.
    ///
    /// The document must be an object carrying both `historicalCosts` (an
    /// array of numbers) and `currentCost` (a number). Anything else is
    /// `AnomalyError::InvalidInput`.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(AnomalyError::invalid_input("request body must be a JSON object"));
        }
        serde_json::from_value(value).map_err(|e| AnomalyError::invalid_input(e.to_string()))
    }
}

/// Body of a successful `/detect` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectResponse {
    pub is_anomaly: bool,
    pub message: String,
}

impl From<AnomalyVerdict> for DetectResponse {
    fn from(verdict: AnomalyVerdict) -> Self {
        Self {
            is_anomaly: verdict.is_anomaly,
            message: verdict.message,
        }
    }
}

/// Body of a rejected request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn invalid_input() -> Self {
        Self {
            error: INVALID_INPUT_MESSAGE.to_string(),
        }
    }
}
