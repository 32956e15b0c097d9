use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use freshpredict_core::{DomainError, DomainResult, ProductId};

/// One day of observed demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandObservation {
    pub date: NaiveDate,
    pub demand: f64,
}

impl DemandObservation {
    pub fn new(date: NaiveDate, demand: f64) -> DomainResult<Self> {
        if !(demand.is_finite() && demand >= 0.0) {
            return Err(DomainError::validation(
                "observed demand must be a finite non-negative quantity",
            ));
        }
        Ok(Self { date, demand })
    }
}

/// Append-only, date-ordered demand record for one product.
///
/// This is the forecasting input: dates are strictly increasing and
/// observations are never rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandHistory {
    product_id: ProductId,
    observations: Vec<DemandObservation>,
}

impl DemandHistory {
    pub fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            observations: Vec::new(),
        }
    }

    pub fn from_observations(
        product_id: ProductId,
        observations: impl IntoIterator<Item = DemandObservation>,
    ) -> DomainResult<Self> {
        let mut history = Self::new(product_id);
        for observation in observations {
            history.append(observation)?;
        }
        Ok(history)
    }

    /// Append one observation; its date must follow the latest one on record.
    pub fn append(&mut self, observation: DemandObservation) -> DomainResult<()> {
        if !(observation.demand.is_finite() && observation.demand >= 0.0) {
            return Err(DomainError::validation(
                "observed demand must be a finite non-negative quantity",
            ));
        }
        if let Some(last) = self.observations.last() {
            if observation.date <= last.date {
                return Err(DomainError::validation(format!(
                    "observation date {} does not follow {}",
                    observation.date, last.date
                )));
            }
        }

        self.observations.push(observation);
        Ok(())
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[DemandObservation] {
        &self.observations
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.observations.first().map(|o| o.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.observations.last().map(|o| o.date)
    }

    /// The trailing `n` observations (all of them when shorter).
    pub fn trailing(&self, n: usize) -> &[DemandObservation] {
        let start = self.observations.len().saturating_sub(n);
        &self.observations[start..]
    }

    /// Mean demand over the trailing `n` observations; 0 when empty.
    pub fn trailing_mean(&self, n: usize) -> f64 {
        let window = self.trailing(n);
        if window.is_empty() {
            return 0.0;
        }
        window.iter().map(|o| o.demand).sum::<f64>() / window.len() as f64
    }

    /// Mean demand over the full record; 0 when empty.
    pub fn mean(&self) -> f64 {
        self.trailing_mean(self.observations.len().max(1))
    }
}
