use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use freshpredict_core::{Category, DomainError, DomainResult, ProductId, Unit};

/// Immutable product reference data.
///
/// Prices are denominated in Malaysian Ringgit per unit and never change
/// units silently; shelf life is whole days from receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: Category,
    unit: Unit,
    cost_per_unit: f64,
    shelf_life_days: u32,
    default_supplier: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        unit: Unit,
        cost_per_unit: f64,
        shelf_life_days: u32,
        default_supplier: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let default_supplier = default_supplier.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if !(cost_per_unit.is_finite() && cost_per_unit >= 0.0) {
            return Err(DomainError::validation(
                "cost_per_unit must be a finite non-negative amount",
            ));
        }
        if shelf_life_days == 0 {
            return Err(DomainError::validation("shelf_life_days must be at least 1"));
        }
        if default_supplier.trim().is_empty() {
            return Err(DomainError::validation("default supplier cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            category,
            unit,
            cost_per_unit,
            shelf_life_days,
            default_supplier,
        })
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn cost_per_unit(&self) -> f64 {
        self.cost_per_unit
    }

    pub fn shelf_life_days(&self) -> u32 {
        self.shelf_life_days
    }

    pub fn default_supplier(&self) -> &str {
        &self.default_supplier
    }

    /// Suggested expiry date for a delivery received today.
    pub fn suggested_expiry(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_days(Days::new(u64::from(self.shelf_life_days)))
            .unwrap_or(NaiveDate::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn valid_product_is_created() {
        let p = chicken();
        assert_eq!(p.id().as_str(), "PLT001");
        assert_eq!(p.category(), Category::Poultry);
        assert_eq!(p.shelf_life_days(), 4);
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Product::new(
            ProductId::new("PLT001").unwrap(),
            "   ",
            Category::Poultry,
            Unit::Kilogram,
            12.50,
            4,
            "QL Resources",
        )
        .unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn negative_or_non_finite_cost_is_rejected() {
        for cost in [-1.0, f64::NAN, f64::INFINITY] {
            let result = Product::new(
                ProductId::new("PLT001").unwrap(),
                "Whole Chicken",
                Category::Poultry,
                Unit::Kilogram,
                cost,
                4,
                "QL Resources",
            );
            assert!(result.is_err(), "cost {cost} should be rejected");
        }
    }

    #[test]
    fn zero_shelf_life_is_rejected() {
        let result = Product::new(
            ProductId::new("PLT001").unwrap(),
            "Whole Chicken",
            Category::Poultry,
            Unit::Kilogram,
            12.50,
            0,
            "QL Resources",
        );
        assert!(result.is_err());
    }

    #[test]
    fn suggested_expiry_adds_shelf_life() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(
            chicken().suggested_expiry(today),
            NaiveDate::from_ymd_opt(2026, 8, 11).unwrap()
        );
    }
}
