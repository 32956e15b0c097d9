use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use freshpredict_core::{AlertId, ProductId};

use crate::severity::Severity;

/// Demand-preparation alert kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreparationAlertType {
    DemandSpike,
    StockOutRisk,
    FestiveSurge,
}

impl PreparationAlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreparationAlertType::DemandSpike => "demand_spike",
            PreparationAlertType::StockOutRisk => "stock_out_risk",
            PreparationAlertType::FestiveSurge => "festive_surge",
        }
    }

    /// Short code used in deterministic alert ids.
    pub(crate) fn code(&self) -> &'static str {
        match self {
            PreparationAlertType::DemandSpike => "SPIKE",
            PreparationAlertType::StockOutRisk => "STOCKOUT",
            PreparationAlertType::FestiveSurge => "FESTIVE",
        }
    }

    pub(crate) fn alert_id(&self, product_id: &ProductId, today: NaiveDate) -> AlertId {
        AlertId::new(format!(
            "PA-{}-{}-{}",
            self.code(),
            product_id,
            today.format("%Y%m%d")
        ))
    }
}

/// A demand-preparation alert: get ready to sell more.
///
/// Stateless derived fact, regenerated on every evaluation cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparationAlert {
    pub id: AlertId,
    pub product_id: ProductId,
    pub alert_type: PreparationAlertType,
    pub severity: Severity,
    pub message: String,
    pub recommended_action: String,
    /// Percentage increase over the baseline demand level (>= 0).
    pub predicted_demand_increase: f64,
    /// Days until the driving event (0 = already underway).
    pub days_until_event: i64,
    pub created_at: DateTime<Utc>,
}
