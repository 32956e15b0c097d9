//! `freshpredict-calendar` — named demand events and the payday cycle.
//!
//! Festival dates are static per year (lunar/Islamic/Hindu calendar dates are
//! maintained externally); the engine only looks them up by proximity to
//! "today".

pub mod festival;
pub mod payday;

pub use festival::{Festival, FestivalCalendar};
pub use payday::PaydaySchedule;
