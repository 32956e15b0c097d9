use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use freshpredict_calendar::PaydaySchedule;
use freshpredict_core::{Category, DomainError, DomainResult};
use freshpredict_inventory::DemandHistory;

use crate::config::ForecastConfig;

/// Multiplicative demand seasonality: day-of-week shape plus a payday-cycle
/// uplift.
///
/// Day-of-week multipliers are fitted as bucket mean over overall mean and
/// clamped into the configured range; the payday uplift is configuration, not
/// fitted (salary timing is policy, not signal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityModel {
    /// Indexed by `NaiveDate::weekday().num_days_from_monday()`.
    day_of_week: [f64; 7],
    payday_uplift: f64,
}

impl SeasonalityModel {
    /// Fit day-of-week multipliers from history.
    ///
    /// Fails with `InsufficientHistory` below the configured floor; callers
    /// fall back to [`SeasonalityModel::category_default`].
    pub fn fit(history: &DemandHistory, config: &ForecastConfig) -> DomainResult<Self> {
        let observations = history.observations();
        if observations.len() < config.min_history {
            return Err(DomainError::InsufficientHistory {
                observations: observations.len(),
                required: config.min_history,
            });
        }

        let overall = history.mean();

        let mut sums = [0.0f64; 7];
        let mut counts = [0usize; 7];
        for observation in observations {
            let bucket = observation.date.weekday().num_days_from_monday() as usize;
            sums[bucket] += observation.demand;
            counts[bucket] += 1;
        }

        let mut day_of_week = [1.0f64; 7];
        if overall > 0.0 {
            for bucket in 0..7 {
                if counts[bucket] > 0 {
                    let bucket_mean = sums[bucket] / counts[bucket] as f64;
                    day_of_week[bucket] = config.clamp_multiplier(bucket_mean / overall);
                }
            }
        }

        Ok(Self {
            day_of_week,
            payday_uplift: config.payday_uplift,
        })
    }

    /// Category-level default curve for products with too little history:
    /// flat weekdays with a weekend uplift sized per category.
    pub fn category_default(category: Category, config: &ForecastConfig) -> Self {
        let weekend = match category {
            Category::Poultry => 1.2,
            Category::Produce => 1.25,
            Category::Dairy => 1.1,
        };

        let mut day_of_week = [1.0f64; 7];
        day_of_week[5] = weekend; // Saturday
        day_of_week[6] = weekend; // Sunday

        Self {
            day_of_week,
            payday_uplift: config.payday_uplift,
        }
    }

    pub fn day_of_week_multiplier(&self, date: NaiveDate) -> f64 {
        self.day_of_week[date.weekday().num_days_from_monday() as usize]
    }

    pub fn payday_uplift(&self) -> f64 {
        self.payday_uplift
    }

    /// Combined multiplier for one calendar day.
    pub fn multiplier_for(&self, date: NaiveDate, schedule: &PaydaySchedule) -> f64 {
        let payday = if schedule.covers(date) {
            self.payday_uplift
        } else {
            1.0
        };
        self.day_of_week_multiplier(date) * payday
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use freshpredict_core::ProductId;
    use freshpredict_inventory::DemandObservation;

    fn history_from(start: NaiveDate, demands: &[f64]) -> DemandHistory {
        DemandHistory::from_observations(
            ProductId::new("PRD001").unwrap(),
            demands.iter().enumerate().map(|(i, &demand)| DemandObservation {
                date: start.checked_add_days(Days::new(i as u64)).unwrap(),
                demand,
            }),
        )
        .unwrap()
    }

    fn monday() -> NaiveDate {
        // 2026-06-01 is a Monday.
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
    }

    #[test]
    fn too_little_history_is_rejected() {
        let config = ForecastConfig::default();
        let history = history_from(monday(), &[10.0; 5]);
        match SeasonalityModel::fit(&history, &config) {
            Err(DomainError::InsufficientHistory {
                observations,
                required,
            }) => {
                assert_eq!(observations, 5);
                assert_eq!(required, config.min_history);
            }
            other => panic!("expected InsufficientHistory, got {other:?}"),
        }
    }

    #[test]
    fn constant_history_yields_unit_multipliers() {
        let config = ForecastConfig::default();
        let history = history_from(monday(), &[10.0; 28]);
        let model = SeasonalityModel::fit(&history, &config).unwrap();
        for offset in 0..7u64 {
            let date = monday().checked_add_days(Days::new(offset)).unwrap();
            assert!((model.day_of_week_multiplier(date) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn weekend_heavy_history_raises_weekend_multipliers() {
        let config = ForecastConfig::default();
        // Four full weeks, demand doubled on Saturday/Sunday.
        let demands: Vec<f64> = (0..28)
            .map(|i| if i % 7 >= 5 { 20.0 } else { 10.0 })
            .collect();
        let history = history_from(monday(), &demands);
        let model = SeasonalityModel::fit(&history, &config).unwrap();

        let saturday = NaiveDate::from_ymd_opt(2026, 6, 6).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2026, 6, 2).unwrap();
        assert!(model.day_of_week_multiplier(saturday) > 1.2);
        assert!(model.day_of_week_multiplier(tuesday) < 1.0);
    }

    #[test]
    fn runaway_multipliers_are_clamped() {
        let config = ForecastConfig::default();
        // One enormous Saturday against near-zero weekdays.
        let demands: Vec<f64> = (0..28)
            .map(|i| if i % 7 == 5 { 1000.0 } else { 0.1 })
            .collect();
        let history = history_from(monday(), &demands);
        let model = SeasonalityModel::fit(&history, &config).unwrap();

        let saturday = NaiveDate::from_ymd_opt(2026, 6, 6).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2026, 6, 2).unwrap();
        assert_eq!(
            model.day_of_week_multiplier(saturday),
            config.multiplier_ceiling
        );
        assert_eq!(model.day_of_week_multiplier(tuesday), config.multiplier_floor);
    }

    #[test]
    fn all_zero_history_stays_at_unit_multipliers() {
        let config = ForecastConfig::default();
        let history = history_from(monday(), &[0.0; 28]);
        let model = SeasonalityModel::fit(&history, &config).unwrap();
        let date = monday();
        assert_eq!(model.day_of_week_multiplier(date), 1.0);
    }

    #[test]
    fn payday_uplift_applies_only_on_schedule_days() {
        let config = ForecastConfig::default();
        let schedule = PaydaySchedule::default();
        let model = SeasonalityModel::category_default(Category::Dairy, &config);

        // 2026-06-26 (payday window) vs 2026-06-10 (baseline), both weekdays.
        let payday = NaiveDate::from_ymd_opt(2026, 6, 26).unwrap();
        let baseline = NaiveDate::from_ymd_opt(2026, 6, 10).unwrap();
        assert!((model.multiplier_for(payday, &schedule) - config.payday_uplift).abs() < 1e-9);
        assert!((model.multiplier_for(baseline, &schedule) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn category_defaults_elevate_weekends() {
        let config = ForecastConfig::default();
        let saturday = NaiveDate::from_ymd_opt(2026, 6, 6).unwrap();
        for category in Category::ALL {
            let model = SeasonalityModel::category_default(category, &config);
            assert!(model.day_of_week_multiplier(saturday) > 1.0);
        }
    }
}
