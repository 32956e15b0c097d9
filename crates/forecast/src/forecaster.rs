use chrono::{Days, NaiveDate};

use freshpredict_calendar::{Festival, FestivalCalendar, PaydaySchedule};
use freshpredict_catalog::Product;
use freshpredict_core::{DomainError, DomainResult};
use freshpredict_inventory::DemandHistory;

use crate::config::ForecastConfig;
use crate::horizon::Horizon;
use crate::result::{FestiveImpact, ForecastResult, TrendDirection};
use crate::seasonality::SeasonalityModel;
use crate::stats::mean;
use crate::trend::TrendLine;

/// Days compared at each end of the horizon for trend classification.
const TREND_SAMPLE_DAYS: usize = 3;

/// Deterministic demand forecaster.
///
/// Model:
/// - Baseline: least-squares trend over the trailing history window.
/// - Shape: day-of-week seasonality (fitted, or the category default when
///   history is short) times the payday-cycle uplift.
/// - Overlay: the nearest impacting festival multiplies a tapered window
///   around its date.
/// - Uncertainty: a band widening with `sqrt` of forecast distance.
#[derive(Debug, Clone)]
pub struct Forecaster {
    config: ForecastConfig,
    payday: PaydaySchedule,
}

impl Default for Forecaster {
    fn default() -> Self {
        Self::new(ForecastConfig::default())
    }
}

impl Forecaster {
    pub fn new(config: ForecastConfig) -> Self {
        Self {
            config,
            payday: PaydaySchedule::default(),
        }
    }

    pub fn with_payday_schedule(mut self, payday: PaydaySchedule) -> Self {
        self.payday = payday;
        self
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Forecast demand for the `horizon` consecutive days starting tomorrow.
    ///
    /// Pure and idempotent over a fixed history + calendar snapshot. Output
    /// series always have length `horizon.days()` and
    /// `confidence_lower <= predicted <= confidence_upper` elementwise.
    pub fn forecast(
        &self,
        product: &Product,
        history: &DemandHistory,
        calendar: &FestivalCalendar,
        today: NaiveDate,
        horizon: Horizon,
    ) -> DomainResult<ForecastResult> {
        let days = horizon.days();

        let trend = TrendLine::fit(history, self.config.trend_window);
        let seasonality = match SeasonalityModel::fit(history, &self.config) {
            Ok(model) => model,
            Err(DomainError::InsufficientHistory { .. }) => {
                SeasonalityModel::category_default(product.category(), &self.config)
            }
            Err(other) => return Err(other),
        };

        let festival = calendar.next_impacting(today, days as i64, product.category());

        let mut dates = Vec::with_capacity(days);
        let mut predicted = Vec::with_capacity(days);
        let mut lower = Vec::with_capacity(days);
        let mut upper = Vec::with_capacity(days);

        for i in 0..days {
            let lead = i + 1;
            let date = today
                .checked_add_days(Days::new(lead as u64))
                .ok_or_else(|| DomainError::validation("forecast date out of range"))?;

            let mut value = trend.baseline(lead) * seasonality.multiplier_for(date, &self.payday);
            if let Some(festival) = festival {
                value *= festival_factor(date, festival, self.config.festival_window_days);
            }
            let value = value.max(0.0);

            let band = value * self.config.band_coefficient * ((i + 1) as f64).sqrt();

            dates.push(date);
            predicted.push(value);
            lower.push((value - band).max(0.0));
            upper.push(value + band);
        }

        Ok(ForecastResult {
            product_id: product.id().clone(),
            dates,
            trend: self.classify_trend(&predicted),
            festive_impact: festival.map(|f| FestiveImpact {
                name: f.name().to_string(),
                date: f.date(),
                days_until: f.days_until(today),
                demand_multiplier: f.demand_multiplier(),
            }),
            predicted_demand: predicted,
            confidence_lower: lower,
            confidence_upper: upper,
        })
    }

    fn classify_trend(&self, predicted: &[f64]) -> TrendDirection {
        if predicted.is_empty() {
            return TrendDirection::Stable;
        }

        let k = TREND_SAMPLE_DAYS.min(predicted.len());
        let first = mean(&predicted[..k]);
        let last = mean(&predicted[predicted.len() - k..]);

        if last > first * self.config.trend_increase_threshold {
            TrendDirection::Increasing
        } else if last < first * self.config.trend_decrease_threshold {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        }
    }
}

/// Festival overlay for one forecast day: the full multiplier at the peak,
/// tapering linearly to baseline just outside the window.
fn festival_factor(date: NaiveDate, festival: &Festival, window_days: i64) -> f64 {
    let offset = (festival.date() - date).num_days().abs();
    if offset > window_days {
        return 1.0;
    }

    let multiplier = festival.demand_multiplier();
    multiplier - (multiplier - 1.0) * offset as f64 / (window_days + 1) as f64
}
