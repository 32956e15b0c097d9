use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use freshpredict_inventory::DemandHistory;

use crate::stats::{mean, stddev_sample};

/// Training-data summary reported alongside a forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDiagnostics {
    pub training_samples: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub mean_daily_demand: f64,
    pub demand_stddev: f64,
}

impl ModelDiagnostics {
    pub fn from_history(history: &DemandHistory) -> Self {
        let demands: Vec<f64> = history.observations().iter().map(|o| o.demand).collect();
        let mean_daily_demand = mean(&demands);

        Self {
            training_samples: demands.len(),
            first_date: history.first_date(),
            last_date: history.last_date(),
            mean_daily_demand,
            demand_stddev: stddev_sample(&demands, mean_daily_demand),
        }
    }
}
