use std::sync::Arc;

use chrono::NaiveDate;

use freshpredict_catalog::Product;
use freshpredict_core::{Category, DomainResult, LotId, ProductId};
use freshpredict_inventory::{DemandHistory, InventoryLot};

/// Read access to product reference data.
pub trait ProductCatalog: Send + Sync {
    /// Fails with `UnknownProduct` when the code is not in the catalog.
    fn product(&self, id: &ProductId) -> DomainResult<Product>;

    /// All products, optionally restricted to one category, in a stable
    /// order.
    fn products(&self, category: Option<Category>) -> DomainResult<Vec<Product>>;
}

/// Read/adjust access to stock lots.
pub trait InventoryStore: Send + Sync {
    /// Fails with `UnknownLot` when the lot does not exist.
    fn lot(&self, id: LotId) -> DomainResult<InventoryLot>;

    /// All lots, optionally restricted to one product, in a stable order.
    fn lots(&self, product_id: Option<&ProductId>) -> DomainResult<Vec<InventoryLot>>;

    /// Apply a signed stock adjustment; the lot's own invariants decide
    /// (stock never negative, delta never zero).
    fn adjust_stock(&self, id: LotId, delta: f64) -> DomainResult<InventoryLot>;

    /// Merge a delivery into a lot (stock up, expiry forward).
    fn receive_stock(
        &self,
        id: LotId,
        quantity: f64,
        expiry_date: NaiveDate,
    ) -> DomainResult<InventoryLot>;
}

/// Read access to observed demand.
pub trait DemandHistoryStore: Send + Sync {
    /// The trailing `window_days` observations for a product; products with
    /// no recorded demand yield an empty history, not an error.
    fn history(&self, product_id: &ProductId, window_days: usize) -> DomainResult<DemandHistory>;
}

impl<S> ProductCatalog for Arc<S>
where
    S: ProductCatalog + ?Sized,
{
    fn product(&self, id: &ProductId) -> DomainResult<Product> {
        (**self).product(id)
    }

    fn products(&self, category: Option<Category>) -> DomainResult<Vec<Product>> {
        (**self).products(category)
    }
}

impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    fn lot(&self, id: LotId) -> DomainResult<InventoryLot> {
        (**self).lot(id)
    }

    fn lots(&self, product_id: Option<&ProductId>) -> DomainResult<Vec<InventoryLot>> {
        (**self).lots(product_id)
    }

    fn adjust_stock(&self, id: LotId, delta: f64) -> DomainResult<InventoryLot> {
        (**self).adjust_stock(id, delta)
    }

    fn receive_stock(
        &self,
        id: LotId,
        quantity: f64,
        expiry_date: NaiveDate,
    ) -> DomainResult<InventoryLot> {
        (**self).receive_stock(id, quantity, expiry_date)
    }
}

impl<S> DemandHistoryStore for Arc<S>
where
    S: DemandHistoryStore + ?Sized,
{
    fn history(&self, product_id: &ProductId, window_days: usize) -> DomainResult<DemandHistory> {
        (**self).history(product_id, window_days)
    }
}
