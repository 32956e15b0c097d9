/// Alert rule thresholds.
///
/// Defaults follow the operational rules for small grocers; every value is
/// named so the rules carry no magic numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertConfig {
    /// demand_spike: forecast window compared against the trailing history
    /// window of the same length.
    pub spike_window_days: usize,
    /// Excess over the trailing average that triggers a spike (fraction).
    pub spike_excess_threshold: f64,
    /// Excess fractions above which the spike is medium / high.
    pub spike_medium_threshold: f64,
    pub spike_high_threshold: f64,

    /// stock_out_risk: supplier lead time in days; coverage under it fires.
    pub lead_time_days: f64,
    /// Coverage below these fractions of the lead time escalates severity.
    pub coverage_high_fraction: f64,
    pub coverage_medium_fraction: f64,

    /// festive_surge: only surge for events at most this many days out.
    pub festive_horizon_days: i64,
    /// Festival multiplier at or above which the surge is high severity.
    pub festive_high_multiplier: f64,

    /// expiry_risk: alert window and the critical (high severity) cutoff.
    pub expiry_alert_days: i64,
    pub expiry_critical_days: i64,

    /// overstock: stock above this multiple of the reorder point.
    pub overstock_ratio: f64,

    /// slow_moving: required-depletion over forecast-demand ratios that
    /// escalate severity.
    pub slow_moving_high_ratio: f64,
    pub slow_moving_medium_ratio: f64,

    /// Approximate mass of one piece/pack for waste reporting (kg).
    pub non_kg_unit_weight: f64,

    /// Markdown percentages quoted in recommended actions.
    pub critical_markdown_pct: u32,
    pub warning_discount_pct: u32,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            spike_window_days: 7,
            spike_excess_threshold: 0.25,
            spike_medium_threshold: 0.40,
            spike_high_threshold: 0.75,
            lead_time_days: 3.0,
            coverage_high_fraction: 1.0 / 3.0,
            coverage_medium_fraction: 2.0 / 3.0,
            festive_horizon_days: 14,
            festive_high_multiplier: 2.5,
            expiry_alert_days: 5,
            expiry_critical_days: 2,
            overstock_ratio: 2.0,
            slow_moving_high_ratio: 2.0,
            slow_moving_medium_ratio: 1.5,
            non_kg_unit_weight: 0.06,
            critical_markdown_pct: 50,
            warning_discount_pct: 30,
        }
    }
}

impl AlertConfig {
    pub fn with_lead_time_days(mut self, lead_time_days: f64) -> Self {
        self.lead_time_days = lead_time_days;
        self
    }

    pub fn with_expiry_alert_days(mut self, expiry_alert_days: i64) -> Self {
        self.expiry_alert_days = expiry_alert_days;
        self
    }

    pub fn with_overstock_ratio(mut self, overstock_ratio: f64) -> Self {
        self.overstock_ratio = overstock_ratio;
        self
    }

    pub fn with_spike_excess_threshold(mut self, spike_excess_threshold: f64) -> Self {
        self.spike_excess_threshold = spike_excess_threshold;
        self
    }
}
