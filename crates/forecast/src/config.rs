/// Forecasting configuration.
///
/// Every threshold the model uses is named here; call sites never carry
/// magic numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastConfig {
    /// Minimum observations required to fit seasonality from history.
    /// Shorter histories fall back to the category default curve.
    pub min_history: usize,
    /// Trailing observation window for the baseline trend fit.
    pub trend_window: usize,
    /// Clamp range for seasonality multipliers (degenerate history must not
    /// produce runaway forecasts).
    pub multiplier_floor: f64,
    pub multiplier_ceiling: f64,
    /// Demand uplift applied on payday-cycle days.
    pub payday_uplift: f64,
    /// Confidence band coefficient `k` in `predicted * k * sqrt(i + 1)`.
    pub band_coefficient: f64,
    /// Days either side of a festival peak that receive the demand overlay.
    pub festival_window_days: i64,
    /// Trend classification thresholds (mean of last 3 vs first 3 days).
    pub trend_increase_threshold: f64,
    pub trend_decrease_threshold: f64,
    /// Supplier lead time, the lower edge of the restock safe band.
    pub lead_time_days: u32,
    /// Over-ordering margin on shelf life, the upper edge of the safe band.
    pub shelf_life_margin: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            min_history: 14,
            trend_window: 56,
            multiplier_floor: 0.5,
            multiplier_ceiling: 3.0,
            payday_uplift: 1.3,
            band_coefficient: 0.15,
            festival_window_days: 3,
            trend_increase_threshold: 1.10,
            trend_decrease_threshold: 0.90,
            lead_time_days: 3,
            shelf_life_margin: 1.2,
        }
    }
}

impl ForecastConfig {
    pub fn with_min_history(mut self, min_history: usize) -> Self {
        self.min_history = min_history;
        self
    }

    pub fn with_trend_window(mut self, trend_window: usize) -> Self {
        self.trend_window = trend_window;
        self
    }

    pub fn with_band_coefficient(mut self, band_coefficient: f64) -> Self {
        self.band_coefficient = band_coefficient;
        self
    }

    pub fn with_payday_uplift(mut self, payday_uplift: f64) -> Self {
        self.payday_uplift = payday_uplift;
        self
    }

    pub fn with_festival_window_days(mut self, festival_window_days: i64) -> Self {
        self.festival_window_days = festival_window_days;
        self
    }

    pub fn with_lead_time_days(mut self, lead_time_days: u32) -> Self {
        self.lead_time_days = lead_time_days;
        self
    }

    /// Clamp a raw seasonality multiplier into the configured sane range.
    pub fn clamp_multiplier(&self, raw: f64) -> f64 {
        if !raw.is_finite() {
            return 1.0;
        }
        raw.clamp(self.multiplier_floor, self.multiplier_ceiling)
    }
}
