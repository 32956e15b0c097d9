//! `freshpredict-engine`
//!
//! **Responsibility:** bind the catalog/inventory/history stores, the
//! forecaster, the alert rules and the sustainability ledger into the
//! operations boundary layers call.
//!
//! The store traits are the persistence seam: the HTTP/database wiring of a
//! deployment implements them, the in-memory implementations back tests,
//! demos and single-process use.

pub mod demo;
pub mod engine;
pub mod in_memory;
pub mod stores;
pub mod summary;

pub use engine::{DecisionEngine, MarkSoldRequest};
pub use in_memory::{InMemoryCatalog, InMemoryHistory, InMemoryInventory};
pub use stores::{DemandHistoryStore, InventoryStore, ProductCatalog};
pub use summary::DashboardSummary;
