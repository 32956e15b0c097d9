//! Seed data for demos and integration tests: a Malaysian SME grocer's
//! catalog with seeded lots and deterministic synthetic demand history.

use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate};

use freshpredict_calendar::{FestivalCalendar, PaydaySchedule};
use freshpredict_catalog::Product;
use freshpredict_core::{Category, Clock, DomainError, DomainResult, LotId, ProductId, Unit};
use freshpredict_inventory::{DemandObservation, InventoryLot};

use crate::engine::DecisionEngine;
use crate::in_memory::{InMemoryCatalog, InMemoryHistory, InMemoryInventory};

/// Twelve weeks of history per product.
const HISTORY_DAYS: u64 = 84;

const WEEKEND_FACTOR: f64 = 1.2;
const PAYDAY_FACTOR: f64 = 1.3;

struct DemoItem {
    code: &'static str,
    name: &'static str,
    category: Category,
    unit: Unit,
    cost_per_unit: f64,
    shelf_life_days: u32,
    reorder_point: f64,
    supplier: &'static str,
    base_demand: f64,
    stock: f64,
    expiry_offset_days: u64,
}

fn demo_items() -> [DemoItem; 6] {
    [
        DemoItem {
            code: "PLT001",
            name: "Whole Chicken",
            category: Category::Poultry,
            unit: Unit::Kilogram,
            cost_per_unit: 12.50,
            shelf_life_days: 4,
            reorder_point: 30.0,
            supplier: "QL Resources",
            base_demand: 12.0,
            stock: 45.0,
            expiry_offset_days: 2,
        },
        DemoItem {
            code: "PLT002",
            name: "Chicken Wings",
            category: Category::Poultry,
            unit: Unit::Kilogram,
            cost_per_unit: 15.50,
            shelf_life_days: 4,
            reorder_point: 20.0,
            supplier: "QL Resources",
            base_demand: 6.0,
            stock: 18.0,
            expiry_offset_days: 4,
        },
        DemoItem {
            code: "PRD001",
            name: "Kangkung",
            category: Category::Produce,
            unit: Unit::Kilogram,
            cost_per_unit: 4.50,
            shelf_life_days: 4,
            reorder_point: 15.0,
            supplier: "Cameron Highlands Farm",
            base_demand: 5.0,
            stock: 12.0,
            expiry_offset_days: 1,
        },
        DemoItem {
            code: "PRD002",
            name: "Tomatoes",
            category: Category::Produce,
            unit: Unit::Kilogram,
            cost_per_unit: 6.50,
            shelf_life_days: 6,
            reorder_point: 20.0,
            supplier: "Cameron Highlands Farm",
            base_demand: 7.0,
            stock: 35.0,
            expiry_offset_days: 5,
        },
        DemoItem {
            code: "DRY001",
            name: "Fresh Milk 1L",
            category: Category::Dairy,
            unit: Unit::Piece,
            cost_per_unit: 7.50,
            shelf_life_days: 10,
            reorder_point: 40.0,
            supplier: "Dutch Lady Malaysia",
            base_demand: 9.0,
            stock: 55.0,
            expiry_offset_days: 8,
        },
        DemoItem {
            code: "DRY002",
            name: "Eggs (30 pack)",
            category: Category::Dairy,
            unit: Unit::Pack,
            cost_per_unit: 15.00,
            shelf_life_days: 21,
            reorder_point: 25.0,
            supplier: "Lay Hong",
            base_demand: 4.0,
            stock: 40.0,
            expiry_offset_days: 18,
        },
    ]
}

fn offset_date(today: NaiveDate, days: u64) -> DomainResult<NaiveDate> {
    today
        .checked_add_days(Days::new(days))
        .ok_or_else(|| DomainError::validation("demo date out of range"))
}

/// Assemble the demo engine: six products, one seeded lot each, and a
/// deterministic weekday/payday-shaped demand history ending yesterday.
pub fn demo_engine(
    clock: Arc<dyn Clock>,
) -> DomainResult<DecisionEngine<InMemoryCatalog, InMemoryInventory, InMemoryHistory>> {
    let today = clock.today();
    let catalog = InMemoryCatalog::new();
    let inventory = InMemoryInventory::new();
    let history = InMemoryHistory::new();
    let payday = PaydaySchedule::default();

    for item in demo_items() {
        let product_id = ProductId::new(item.code)?;
        let product = Product::new(
            product_id.clone(),
            item.name,
            item.category,
            item.unit,
            item.cost_per_unit,
            item.shelf_life_days,
            item.supplier,
        )?;
        catalog.insert(product)?;

        inventory.insert(InventoryLot::new(
            LotId::new(),
            product_id.clone(),
            item.stock,
            item.unit,
            offset_date(today, item.expiry_offset_days)?,
            item.reorder_point,
            item.supplier,
        )?)?;

        for i in 0..HISTORY_DAYS {
            let date = today
                .checked_sub_days(Days::new(HISTORY_DAYS - i))
                .ok_or_else(|| DomainError::validation("demo date out of range"))?;
            let weekend = if date.weekday().num_days_from_monday() >= 5 {
                WEEKEND_FACTOR
            } else {
                1.0
            };
            let payday_factor = if payday.covers(date) { PAYDAY_FACTOR } else { 1.0 };

            history.append(
                &product_id,
                DemandObservation {
                    date,
                    demand: item.base_demand * weekend * payday_factor,
                },
            )?;
        }
    }

    let calendar = FestivalCalendar::malaysian_spanning(today.year());
    Ok(DecisionEngine::new(catalog, inventory, history, calendar).with_clock(clock))
}
