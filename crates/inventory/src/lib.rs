//! `freshpredict-inventory` — stock lots on hand and observed demand.

pub mod history;
pub mod lot;

pub use history::{DemandHistory, DemandObservation};
pub use lot::InventoryLot;
