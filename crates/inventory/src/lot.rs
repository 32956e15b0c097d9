use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use freshpredict_core::{DomainError, DomainResult, LotId, ProductId, Unit};

/// A batch of stock on hand for one product.
///
/// Stock never goes negative; expiry tracks the newest delivery merged into
/// the lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryLot {
    id: LotId,
    product_id: ProductId,
    current_stock: f64,
    unit: Unit,
    expiry_date: NaiveDate,
    reorder_point: f64,
    supplier: String,
}

impl InventoryLot {
    pub fn new(
        id: LotId,
        product_id: ProductId,
        current_stock: f64,
        unit: Unit,
        expiry_date: NaiveDate,
        reorder_point: f64,
        supplier: impl Into<String>,
    ) -> DomainResult<Self> {
        let supplier = supplier.into();

        if !(current_stock.is_finite() && current_stock >= 0.0) {
            return Err(DomainError::validation(
                "current_stock must be a finite non-negative quantity",
            ));
        }
        if !(reorder_point.is_finite() && reorder_point > 0.0) {
            return Err(DomainError::validation(
                "reorder_point must be a finite positive quantity",
            ));
        }
        if supplier.trim().is_empty() {
            return Err(DomainError::validation("supplier cannot be empty"));
        }

        Ok(Self {
            id,
            product_id,
            current_stock,
            unit,
            expiry_date,
            reorder_point,
            supplier,
        })
    }

    pub fn id(&self) -> LotId {
        self.id
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn current_stock(&self) -> f64 {
        self.current_stock
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    pub fn reorder_point(&self) -> f64 {
        self.reorder_point
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    /// Signed days until expiry; zero or negative means the lot is expired.
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.days_until_expiry(today) <= 0
    }

    /// Ratio of stock on hand to the reorder trigger.
    pub fn reorder_ratio(&self) -> f64 {
        self.current_stock / self.reorder_point
    }

    pub fn is_below_reorder_point(&self) -> bool {
        self.current_stock <= self.reorder_point
    }

    /// Apply a stock adjustment (sale, disposal, correction).
    pub fn adjust(&mut self, delta: f64) -> DomainResult<()> {
        if !delta.is_finite() {
            return Err(DomainError::validation("delta must be finite"));
        }
        if delta == 0.0 {
            return Err(DomainError::validation("delta cannot be zero"));
        }

        let next = self.current_stock + delta;
        if next < 0.0 {
            return Err(DomainError::invariant("stock cannot go negative"));
        }

        self.current_stock = next;
        Ok(())
    }

    /// Merge a delivery into the lot.
    ///
    /// Expiry moves forward when the new batch outlasts the current stock;
    /// per-batch expiry tracking belongs to a FIFO store, not this model.
    pub fn receive(&mut self, quantity: f64, expiry_date: NaiveDate) -> DomainResult<()> {
        if !(quantity.is_finite() && quantity > 0.0) {
            return Err(DomainError::validation(
                "received quantity must be a finite positive amount",
            ));
        }

        self.current_stock += quantity;
        if expiry_date > self.expiry_date {
            self.expiry_date = expiry_date;
        }
        Ok(())
    }
}
