use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use freshpredict_core::{AlertId, ProductId, RescueId};

/// Fact: stock was rescued from becoming waste (sold at markdown, donated,
/// repurposed).
///
/// Immutable once appended. `event_id` is supplied by the caller and doubles
/// as the idempotency key for retries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RescueRecorded {
    pub event_id: RescueId,
    /// The sustainability alert this rescue resolves.
    pub alert_id: AlertId,
    pub product_id: ProductId,
    pub quantity_kg: f64,
    /// Revenue recovered by the rescue, in RM.
    pub cost_recovered: f64,
    pub occurred_at: DateTime<Utc>,
}
