use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::event::RescueRecorded;

/// Avoided-landfill methane factor: kg CO2e per kg of food waste prevented
/// (IPCC greenhouse gas inventory guidance).
///
/// A derived invariant of the metrics — `methane_offset = waste_saved *
/// factor`, always — never a configuration knob.
pub const METHANE_FACTOR_KG_CO2E_PER_KG: f64 = 0.918;

/// Waste currently exposed: an open expiry-risk alert's at-risk kilograms.
///
/// Feeds the reduction denominator and the monthly trend; the engine maps
/// open alerts into these so the ledger crate stays independent of alert
/// types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WasteExposure {
    pub observed_at: DateTime<Utc>,
    pub waste_kg: f64,
}

/// Compliance weighting. The methane factor deliberately has no place here.
#[derive(Debug, Clone, PartialEq)]
pub struct EsgConfig {
    /// Weight of the (capped) waste reduction percentage in the score.
    pub waste_reduction_weight: f64,
    /// Weight of the reporting completeness factor.
    pub reporting_weight: f64,
    /// How complete the grocer's sustainability reporting is, in [0, 1].
    pub reporting_completeness: f64,
}

impl Default for EsgConfig {
    fn default() -> Self {
        Self {
            waste_reduction_weight: 0.6,
            reporting_weight: 0.4,
            reporting_completeness: 0.85,
        }
    }
}

/// One month of the waste-vs-saved trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrendPoint {
    pub year: i32,
    pub month: u32,
    /// Kilograms that were at risk during the month (rescued + still open).
    pub waste_kg: f64,
    /// Kilograms rescued during the month.
    pub saved_kg: f64,
}

impl MonthlyTrendPoint {
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Cumulative ESG compliance metrics, derived views over the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsgMetrics {
    pub waste_saved_kg: f64,
    pub methane_offset_kg_co2e: f64,
    pub cost_savings_rm: f64,
    pub items_rescued: usize,
    pub waste_reduction_percentage: f64,
    /// Clamped to [0, 100].
    pub compliance_score: f64,
    pub monthly_trend: Vec<MonthlyTrendPoint>,
}

/// Fold all rescue events up to `period_end` into the ESG view.
///
/// `open_exposures` carries the at-risk kilograms of still-open expiry
/// alerts; it forms the unrescued part of the reduction denominator.
pub fn compute_metrics(
    events: &[RescueRecorded],
    open_exposures: &[WasteExposure],
    period_end: DateTime<Utc>,
    config: &EsgConfig,
) -> EsgMetrics {
    let events: Vec<&RescueRecorded> = events
        .iter()
        .filter(|e| e.occurred_at <= period_end)
        .collect();
    let exposures: Vec<&WasteExposure> = open_exposures
        .iter()
        .filter(|x| x.observed_at <= period_end)
        .collect();

    let waste_saved_kg: f64 = events.iter().map(|e| e.quantity_kg).sum();
    let cost_savings_rm: f64 = events.iter().map(|e| e.cost_recovered).sum();
    let items_rescued = events.len();
    let projected_unrescued_kg: f64 = exposures.iter().map(|x| x.waste_kg).sum();

    let denominator = waste_saved_kg + projected_unrescued_kg;
    let waste_reduction_percentage = if denominator > 0.0 {
        waste_saved_kg / denominator * 100.0
    } else {
        // Nothing saved and nothing at risk: vacuously fully compliant.
        100.0
    };

    let compliance_score = (config.waste_reduction_weight * waste_reduction_percentage.min(100.0)
        + config.reporting_weight * config.reporting_completeness * 100.0)
        .clamp(0.0, 100.0);

    // Bucket by calendar month: rescued amounts were at risk in their month,
    // open exposures still are.
    let mut buckets: BTreeMap<(i32, u32), (f64, f64)> = BTreeMap::new();
    for e in &events {
        let key = (e.occurred_at.year(), e.occurred_at.month());
        let entry = buckets.entry(key).or_insert((0.0, 0.0));
        entry.0 += e.quantity_kg;
        entry.1 += e.quantity_kg;
    }
    for x in &exposures {
        let key = (x.observed_at.year(), x.observed_at.month());
        buckets.entry(key).or_insert((0.0, 0.0)).0 += x.waste_kg;
    }

    let monthly_trend = buckets
        .into_iter()
        .map(|((year, month), (waste_kg, saved_kg))| MonthlyTrendPoint {
            year,
            month,
            waste_kg,
            saved_kg,
        })
        .collect();

    EsgMetrics {
        waste_saved_kg,
        methane_offset_kg_co2e: waste_saved_kg * METHANE_FACTOR_KG_CO2E_PER_KG,
        cost_savings_rm,
        items_rescued,
        waste_reduction_percentage,
        compliance_score,
        monthly_trend,
    }
}
