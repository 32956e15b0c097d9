use serde::{Deserialize, Serialize};

use freshpredict_catalog::Product;

use crate::config::ForecastConfig;
use crate::result::ForecastResult;

/// Risk classification for a proposed order quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Decision-support summary for an add-stock action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockInsight {
    pub recommendation: String,
    /// Mean forecast demand per day over the insight horizon.
    pub daily_demand: f64,
    /// Days the post-order stock would last; `None` means the forecast sees
    /// no demand at all (infinite coverage).
    pub coverage_days: Option<f64>,
    /// Order size that would cover one shelf life of forecast demand.
    pub suggested_quantity: f64,
    pub risk_level: RiskLevel,
    pub festival_warning: Option<String>,
}

/// Assess a proposed order against the product's forecast.
///
/// The safe band for coverage runs from the supplier lead time up to the
/// shelf life times the over-ordering margin; coverage outside the band is
/// high risk, coverage hugging an edge is medium.
pub fn assess_restock(
    product: &Product,
    current_stock: f64,
    proposed_quantity: f64,
    forecast: &ForecastResult,
    config: &ForecastConfig,
) -> StockInsight {
    let daily_demand = forecast.mean_daily_demand();
    let shelf_life = f64::from(product.shelf_life_days());
    let lead_time = f64::from(config.lead_time_days);
    let unit = product.unit();

    let suggested_quantity = (daily_demand * shelf_life - current_stock).ceil().max(0.0);

    let festival_warning = forecast.festive_impact.as_ref().map(|impact| {
        format!(
            "{} in {} day(s); expect demand around {:.0}% above normal for {}",
            impact.name,
            impact.days_until,
            (impact.demand_multiplier - 1.0) * 100.0,
            product.category(),
        )
    });

    let total_after = current_stock + proposed_quantity;

    if daily_demand <= 0.0 {
        // No forecast demand: coverage is infinite, any order over-commits.
        return StockInsight {
            recommendation: format!(
                "No forecast demand for {}; adding {proposed_quantity:.0} {unit} risks \
                 spoilage within the {shelf_life:.0}-day shelf life",
                product.name(),
            ),
            daily_demand,
            coverage_days: None,
            suggested_quantity,
            risk_level: RiskLevel::High,
            festival_warning,
        };
    }

    let coverage = total_after / daily_demand;
    let band_low = lead_time;
    let band_high = shelf_life * config.shelf_life_margin;

    let (risk_level, recommendation) = if coverage > band_high {
        (
            RiskLevel::High,
            format!(
                "Stock may expire before selling: {total_after:.0} {unit} covers \
                 {coverage:.0} days against a {shelf_life:.0}-day shelf life; \
                 ~{suggested_quantity:.0} {unit} is enough",
            ),
        )
    } else if coverage < band_low {
        (
            RiskLevel::High,
            format!(
                "Order more: {total_after:.0} {unit} covers only {coverage:.1} days, \
                 under the {lead_time:.0}-day supplier lead time",
            ),
        )
    } else {
        // Inside the band: low when comfortably clear of both edges.
        let width = band_high - band_low;
        let edge_distance = if width > 0.0 {
            (coverage - band_low).min(band_high - coverage) / width
        } else {
            0.0
        };

        if edge_distance >= 0.25 {
            let base = format!(
                "Good order quantity: covers about {coverage:.0} days of expected demand",
            );
            let recommendation = match &festival_warning {
                Some(warning) => format!("{base}. {warning}"),
                None => base,
            };
            (RiskLevel::Low, recommendation)
        } else {
            (
                RiskLevel::Medium,
                format!(
                    "Workable order: {coverage:.0} days of coverage sits near the edge \
                     of the {band_low:.0}-{band_high:.0} day safe band",
                ),
            )
        }
    };

    StockInsight {
        recommendation,
        daily_demand,
        coverage_days: Some(coverage),
        suggested_quantity,
        risk_level,
        festival_warning,
    }
}
