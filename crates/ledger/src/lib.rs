//! `freshpredict-ledger`
//!
//! **Responsibility:** the append-only sustainability ledger and the ESG
//! metrics derived from it.
//!
//! The ledger is the only mutable shared state in the core. Events are
//! facts: append-only, immutable, idempotent by event id. Everything
//! cumulative (waste saved, methane offset, cost recovered) is a fold over
//! the log, never a stored counter.

pub mod event;
pub mod ledger;
pub mod metrics;

pub use event::RescueRecorded;
pub use ledger::SustainabilityLedger;
pub use metrics::{
    EsgConfig, EsgMetrics, METHANE_FACTOR_KG_CO2E_PER_KG, MonthlyTrendPoint, WasteExposure,
    compute_metrics,
};
