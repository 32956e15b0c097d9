//! `freshpredict-alerts`
//!
//! **Responsibility:** deterministic alert rules over forecasts + inventory.
//!
//! Alerts are stateless derived facts: every evaluation recomputes them from
//! the current snapshot, there is no persisted alert lifecycle. Resolution
//! happens indirectly — selling rescued stock changes the snapshot and the
//! rule stops firing.

pub mod config;
pub mod engine;
pub mod preparation;
pub mod severity;
pub mod sustainability;

pub use config::AlertConfig;
pub use engine::AlertEngine;
pub use preparation::{PreparationAlert, PreparationAlertType};
pub use severity::Severity;
pub use sustainability::{SustainabilityAlert, SustainabilityAlertType};
