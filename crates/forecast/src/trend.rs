use freshpredict_inventory::DemandHistory;

use crate::stats::mean;

/// Least-squares linear baseline over a trailing demand window.
///
/// The fit is over observation index, not calendar distance; the history is
/// date-ordered, so gaps only soften the slope, they never reorder it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    /// Fitted demand level at the end of the window.
    level: f64,
    /// Per-day change in baseline demand.
    slope: f64,
    window_len: usize,
}

impl TrendLine {
    /// Fit over the trailing `window` observations.
    ///
    /// Degenerate windows (fewer than 2 points) fall back to a flat line at
    /// the history mean, and an empty history to zero demand.
    pub fn fit(history: &DemandHistory, window: usize) -> Self {
        let observations = history.trailing(window);
        let n = observations.len();

        if n < 2 {
            return Self {
                level: history.mean(),
                slope: 0.0,
                window_len: n,
            };
        }

        let demands: Vec<f64> = observations.iter().map(|o| o.demand).collect();
        let y_bar = mean(&demands);
        let x_bar = (n - 1) as f64 / 2.0;

        let mut covariance = 0.0;
        let mut variance = 0.0;
        for (i, y) in demands.iter().enumerate() {
            let dx = i as f64 - x_bar;
            covariance += dx * (y - y_bar);
            variance += dx * dx;
        }

        let slope = if variance > 0.0 { covariance / variance } else { 0.0 };
        let level = y_bar + slope * ((n - 1) as f64 - x_bar);

        Self {
            level,
            slope,
            window_len: n,
        }
    }

    /// Projected baseline demand `lead` days after the window end, floored
    /// at zero.
    pub fn baseline(&self, lead: usize) -> f64 {
        (self.level + self.slope * lead as f64).max(0.0)
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn window_len(&self) -> usize {
        self.window_len
    }
}
