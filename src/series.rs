use serde::Serialize;

use crate::store::SimulationRow;

/// A plottable time series as parallel coordinate vectors, the shape the
/// chart sink consumes directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub x: Vec<u32>,
    pub y: Vec<f64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Largest plotted value, if any.
    pub fn max_y(&self) -> Option<f64> {
        if self.y.is_empty() {
            None
        } else {
            Some(self.y.iter().cloned().fold(f64::NEG_INFINITY, f64::max))
        }
    }
}

/// Extract the (time, value) sequence for one outcome. Rows where the
/// outcome is null are dropped; the rest sort ascending by period, ties
/// keeping row order.
pub fn build_series(rows: &[&SimulationRow], outcome: &str) -> Series {
    let mut points: Vec<(u32, f64)> = rows
        .iter()
        .filter_map(|r| r.outcome(outcome).map(|v| (r.time, v)))
        .collect();
    points.sort_by_key(|&(t, _)| t);

    Series {
        x: points.iter().map(|p| p.0).collect(),
        y: points.iter().map(|p| p.1).collect(),
    }
}
