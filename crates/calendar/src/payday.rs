use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use freshpredict_core::{DomainError, DomainResult};

/// Day-of-month ranges with elevated grocery spend.
///
/// Most Malaysian salaries land between the 25th and month end, and spending
/// carries into the first days of the next month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaydaySchedule {
    periods: Vec<(u32, u32)>,
}

impl Default for PaydaySchedule {
    fn default() -> Self {
        Self {
            periods: vec![(25, 31), (1, 5)],
        }
    }
}

impl PaydaySchedule {
    pub fn new(periods: impl IntoIterator<Item = (u32, u32)>) -> DomainResult<Self> {
        let periods: Vec<(u32, u32)> = periods.into_iter().collect();
        for &(start, end) in &periods {
            if !(1..=31).contains(&start) || !(1..=31).contains(&end) || start > end {
                return Err(DomainError::validation(format!(
                    "invalid payday period {start}..={end}"
                )));
            }
        }
        Ok(Self { periods })
    }

    pub fn periods(&self) -> &[(u32, u32)] {
        &self.periods
    }

    pub fn is_payday_day_of_month(&self, day: u32) -> bool {
        self.periods
            .iter()
            .any(|&(start, end)| (start..=end).contains(&day))
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.is_payday_day_of_month(date.day())
    }
}
