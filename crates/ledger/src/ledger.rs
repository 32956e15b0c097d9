use std::collections::HashSet;
use std::sync::RwLock;

use freshpredict_core::{AlertId, DomainError, DomainResult};

use crate::event::RescueRecorded;

/// Append-only log of rescue events.
///
/// The single write lock serializes appends, so accumulation is monotone and
/// never a read-modify-write race; reads clone a consistent snapshot and can
/// never observe a partially-appended event. Duplicate event ids are
/// idempotent no-ops, which makes retrying a failed append safe.
#[derive(Debug, Default)]
pub struct SustainabilityLedger {
    events: RwLock<Vec<RescueRecorded>>,
}

impl SustainabilityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one rescue event (atomic, idempotent by `event_id`).
    pub fn record_rescue(&self, event: RescueRecorded) -> DomainResult<()> {
        if !(event.quantity_kg.is_finite() && event.quantity_kg > 0.0) {
            return Err(DomainError::InvalidQuantity(event.quantity_kg));
        }
        if !(event.cost_recovered.is_finite() && event.cost_recovered >= 0.0) {
            return Err(DomainError::validation(
                "cost_recovered must be a finite non-negative amount",
            ));
        }

        let mut events = self
            .events
            .write()
            .map_err(|_| DomainError::invariant("ledger lock poisoned"))?;

        // A replayed append is already durable; report success.
        if events.iter().any(|e| e.event_id == event.event_id) {
            return Ok(());
        }

        events.push(event);
        Ok(())
    }

    /// Consistent snapshot of the full log, in append order.
    pub fn snapshot(&self) -> DomainResult<Vec<RescueRecorded>> {
        Ok(self
            .events
            .read()
            .map_err(|_| DomainError::invariant("ledger lock poisoned"))?
            .clone())
    }

    pub fn len(&self) -> DomainResult<usize> {
        Ok(self
            .events
            .read()
            .map_err(|_| DomainError::invariant("ledger lock poisoned"))?
            .len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Alert ids with at least one rescue recorded against them.
    pub fn resolved_alert_ids(&self) -> DomainResult<HashSet<AlertId>> {
        Ok(self
            .events
            .read()
            .map_err(|_| DomainError::invariant("ledger lock poisoned"))?
            .iter()
            .map(|e| e.alert_id.clone())
            .collect())
    }

    pub fn is_resolved(&self, alert_id: &AlertId) -> DomainResult<bool> {
        Ok(self
            .events
            .read()
            .map_err(|_| DomainError::invariant("ledger lock poisoned"))?
            .iter()
            .any(|e| &e.alert_id == alert_id))
    }
}
