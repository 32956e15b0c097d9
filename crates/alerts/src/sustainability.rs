use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use freshpredict_core::{AlertId, LotId, ProductId};

use crate::severity::Severity;

/// Waste-sustainability alert kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SustainabilityAlertType {
    ExpiryRisk,
    Overstock,
    SlowMoving,
}

impl SustainabilityAlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SustainabilityAlertType::ExpiryRisk => "expiry_risk",
            SustainabilityAlertType::Overstock => "overstock",
            SustainabilityAlertType::SlowMoving => "slow_moving",
        }
    }

    pub(crate) fn code(&self) -> &'static str {
        match self {
            SustainabilityAlertType::ExpiryRisk => "EXPIRY",
            SustainabilityAlertType::Overstock => "OVER",
            SustainabilityAlertType::SlowMoving => "SLOW",
        }
    }

    pub(crate) fn alert_id(
        &self,
        product_id: &ProductId,
        lot_id: LotId,
        today: NaiveDate,
    ) -> AlertId {
        AlertId::new(format!(
            "SA-{}-{}-{}-{}",
            self.code(),
            product_id,
            lot_id,
            today.format("%Y%m%d")
        ))
    }
}

/// A waste-sustainability alert: stock at risk of becoming waste.
///
/// Stateless derived fact like its preparation sibling, except that rescuing
/// the stock (ledger `mark_sold`) changes the lot snapshot and thereby
/// retires the alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityAlert {
    pub id: AlertId,
    pub product_id: ProductId,
    pub lot_id: LotId,
    pub alert_type: SustainabilityAlertType,
    pub severity: Severity,
    pub message: String,
    pub recommended_action: String,
    /// Signed; zero or negative means the lot is already expired.
    pub days_until_expiry: i64,
    pub potential_waste_kg: f64,
    pub potential_loss_rm: f64,
    pub created_at: DateTime<Utc>,
}
