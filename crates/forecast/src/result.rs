use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use freshpredict_core::ProductId;

/// Direction of the predicted demand curve over the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
        }
    }
}

impl core::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Festival overlay applied to a forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FestiveImpact {
    pub name: String,
    pub date: NaiveDate,
    pub days_until: i64,
    pub demand_multiplier: f64,
}

/// Multi-day demand forecast with uncertainty bounds.
///
/// Invariants (upheld by the forecaster, asserted by tests):
/// - all four series have length == the requested horizon;
/// - dates are consecutive calendar days starting tomorrow;
/// - `confidence_lower[i] <= predicted_demand[i] <= confidence_upper[i]`;
/// - nothing is negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub product_id: ProductId,
    pub dates: Vec<NaiveDate>,
    pub predicted_demand: Vec<f64>,
    pub confidence_lower: Vec<f64>,
    pub confidence_upper: Vec<f64>,
    pub trend: TrendDirection,
    pub festive_impact: Option<FestiveImpact>,
}

impl ForecastResult {
    pub fn horizon_days(&self) -> usize {
        self.dates.len()
    }

    /// Mean predicted demand per day over the whole horizon; 0 when empty.
    pub fn mean_daily_demand(&self) -> f64 {
        if self.predicted_demand.is_empty() {
            return 0.0;
        }
        self.total_predicted() / self.predicted_demand.len() as f64
    }

    /// Mean predicted demand over the first `n` days (all when shorter).
    pub fn leading_mean(&self, n: usize) -> f64 {
        let window = &self.predicted_demand[..n.min(self.predicted_demand.len())];
        if window.is_empty() {
            return 0.0;
        }
        window.iter().sum::<f64>() / window.len() as f64
    }

    pub fn total_predicted(&self) -> f64 {
        self.predicted_demand.iter().sum()
    }
}
