//! `freshpredict-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod category;
pub mod clock;
pub mod error;
pub mod id;

pub use category::{Category, Unit};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DomainError, DomainResult};
pub use id::{AlertId, LotId, ProductId, RescueId};
