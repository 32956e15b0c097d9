use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use chrono::NaiveDate;

use freshpredict_catalog::Product;
use freshpredict_core::{Category, DomainError, DomainResult, LotId, ProductId};
use freshpredict_inventory::{DemandHistory, DemandObservation, InventoryLot};

use crate::stores::{DemandHistoryStore, InventoryStore, ProductCatalog};

/// In-memory product catalog.
///
/// Intended for tests/demos and single-process deployments.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: RwLock<BTreeMap<ProductId, Product>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, product: Product) -> DomainResult<()> {
        let mut products = self
            .products
            .write()
            .map_err(|_| DomainError::invariant("catalog lock poisoned"))?;
        products.insert(product.id().clone(), product);
        Ok(())
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn product(&self, id: &ProductId) -> DomainResult<Product> {
        self.products
            .read()
            .map_err(|_| DomainError::invariant("catalog lock poisoned"))?
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::unknown_product(id))
    }

    fn products(&self, category: Option<Category>) -> DomainResult<Vec<Product>> {
        let products = self
            .products
            .read()
            .map_err(|_| DomainError::invariant("catalog lock poisoned"))?;
        Ok(products
            .values()
            .filter(|p| category.is_none_or(|c| p.category() == c))
            .cloned()
            .collect())
    }
}

/// In-memory lot store; lots keep insertion order for stable listings.
#[derive(Debug, Default)]
pub struct InMemoryInventory {
    lots: RwLock<Vec<InventoryLot>>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, lot: InventoryLot) -> DomainResult<()> {
        let mut lots = self
            .lots
            .write()
            .map_err(|_| DomainError::invariant("inventory lock poisoned"))?;
        if lots.iter().any(|l| l.id() == lot.id()) {
            return Err(DomainError::validation(format!(
                "lot {} already exists",
                lot.id()
            )));
        }
        lots.push(lot);
        Ok(())
    }

    fn with_lot_mut<T>(
        &self,
        id: LotId,
        f: impl FnOnce(&mut InventoryLot) -> DomainResult<T>,
    ) -> DomainResult<T> {
        let mut lots = self
            .lots
            .write()
            .map_err(|_| DomainError::invariant("inventory lock poisoned"))?;
        let lot = lots
            .iter_mut()
            .find(|l| l.id() == id)
            .ok_or_else(|| DomainError::unknown_lot(id))?;
        f(lot)
    }
}

impl InventoryStore for InMemoryInventory {
    fn lot(&self, id: LotId) -> DomainResult<InventoryLot> {
        self.lots
            .read()
            .map_err(|_| DomainError::invariant("inventory lock poisoned"))?
            .iter()
            .find(|l| l.id() == id)
            .cloned()
            .ok_or_else(|| DomainError::unknown_lot(id))
    }

    fn lots(&self, product_id: Option<&ProductId>) -> DomainResult<Vec<InventoryLot>> {
        let lots = self
            .lots
            .read()
            .map_err(|_| DomainError::invariant("inventory lock poisoned"))?;
        Ok(lots
            .iter()
            .filter(|l| product_id.is_none_or(|p| l.product_id() == p))
            .cloned()
            .collect())
    }

    fn adjust_stock(&self, id: LotId, delta: f64) -> DomainResult<InventoryLot> {
        self.with_lot_mut(id, |lot| {
            lot.adjust(delta)?;
            Ok(lot.clone())
        })
    }

    fn receive_stock(
        &self,
        id: LotId,
        quantity: f64,
        expiry_date: NaiveDate,
    ) -> DomainResult<InventoryLot> {
        self.with_lot_mut(id, |lot| {
            lot.receive(quantity, expiry_date)?;
            Ok(lot.clone())
        })
    }
}

/// In-memory demand history store.
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    histories: RwLock<HashMap<ProductId, DemandHistory>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, history: DemandHistory) -> DomainResult<()> {
        let mut histories = self
            .histories
            .write()
            .map_err(|_| DomainError::invariant("history lock poisoned"))?;
        histories.insert(history.product_id().clone(), history);
        Ok(())
    }

    /// Append one observation, creating the product's record on first use.
    pub fn append(
        &self,
        product_id: &ProductId,
        observation: DemandObservation,
    ) -> DomainResult<()> {
        let mut histories = self
            .histories
            .write()
            .map_err(|_| DomainError::invariant("history lock poisoned"))?;
        histories
            .entry(product_id.clone())
            .or_insert_with(|| DemandHistory::new(product_id.clone()))
            .append(observation)
    }
}

impl DemandHistoryStore for InMemoryHistory {
    fn history(&self, product_id: &ProductId, window_days: usize) -> DomainResult<DemandHistory> {
        let histories = self
            .histories
            .read()
            .map_err(|_| DomainError::invariant("history lock poisoned"))?;

        match histories.get(product_id) {
            Some(history) => DemandHistory::from_observations(
                product_id.clone(),
                history.trailing(window_days).iter().copied(),
            ),
            None => Ok(DemandHistory::new(product_id.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freshpredict_core::Unit;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn chicken() -> Product {
        Product::new(
            ProductId::new("PLT001").unwrap(),
            "Whole Chicken",
            Category::Poultry,
            Unit::Kilogram,
            12.50,
            4,
            "QL Resources",
        )
        .unwrap()
    }

    #[test]
    fn catalog_reports_unknown_products() {
        let catalog = InMemoryCatalog::new();
        catalog.insert(chicken()).unwrap();

        assert!(catalog.product(&ProductId::new("PLT001").unwrap()).is_ok());
        let err = catalog
            .product(&ProductId::new("MISSING").unwrap())
            .unwrap_err();
        match err {
            DomainError::UnknownProduct(_) => {}
            other => panic!("expected UnknownProduct, got {other:?}"),
        }
    }

    #[test]
    fn catalog_filters_by_category() {
        let catalog = InMemoryCatalog::new();
        catalog.insert(chicken()).unwrap();

        assert_eq!(catalog.products(Some(Category::Poultry)).unwrap().len(), 1);
        assert!(catalog.products(Some(Category::Dairy)).unwrap().is_empty());
    }

    #[test]
    fn inventory_adjustments_persist() {
        let inventory = InMemoryInventory::new();
        let lot = InventoryLot::new(
            LotId::new(),
            ProductId::new("PLT001").unwrap(),
            45.0,
            Unit::Kilogram,
            date(2026, 8, 9),
            30.0,
            "QL Resources",
        )
        .unwrap();
        let id = lot.id();
        inventory.insert(lot).unwrap();

        let updated = inventory.adjust_stock(id, -10.0).unwrap();
        assert_eq!(updated.current_stock(), 35.0);
        assert_eq!(inventory.lot(id).unwrap().current_stock(), 35.0);

        // Over-draining is rejected and leaves state untouched.
        assert!(inventory.adjust_stock(id, -100.0).is_err());
        assert_eq!(inventory.lot(id).unwrap().current_stock(), 35.0);
    }

    #[test]
    fn received_deliveries_merge_into_the_lot() {
        let inventory = InMemoryInventory::new();
        let lot = InventoryLot::new(
            LotId::new(),
            ProductId::new("PLT001").unwrap(),
            5.0,
            Unit::Kilogram,
            date(2026, 8, 9),
            30.0,
            "QL Resources",
        )
        .unwrap();
        let id = lot.id();
        inventory.insert(lot).unwrap();

        let updated = inventory.receive_stock(id, 20.0, date(2026, 8, 12)).unwrap();
        assert_eq!(updated.current_stock(), 25.0);
        assert_eq!(updated.expiry_date(), date(2026, 8, 12));
    }

    #[test]
    fn duplicate_lot_ids_are_rejected() {
        let inventory = InMemoryInventory::new();
        let lot = InventoryLot::new(
            LotId::new(),
            ProductId::new("PLT001").unwrap(),
            45.0,
            Unit::Kilogram,
            date(2026, 8, 9),
            30.0,
            "QL Resources",
        )
        .unwrap();
        inventory.insert(lot.clone()).unwrap();
        assert!(inventory.insert(lot).is_err());
    }

    #[test]
    fn history_store_windows_the_record() {
        let store = InMemoryHistory::new();
        let product_id = ProductId::new("PLT001").unwrap();
        for i in 0..10u64 {
            store
                .append(
                    &product_id,
                    DemandObservation {
                        date: date(2026, 6, 1)
                            .checked_add_days(chrono::Days::new(i))
                            .unwrap(),
                        demand: i as f64,
                    },
                )
                .unwrap();
        }

        let windowed = store.history(&product_id, 3).unwrap();
        assert_eq!(windowed.len(), 3);
        assert_eq!(windowed.observations()[0].demand, 7.0);

        // Unknown products have empty histories rather than errors.
        let empty = store
            .history(&ProductId::new("MISSING").unwrap(), 30)
            .unwrap();
        assert!(empty.is_empty());
    }
}
