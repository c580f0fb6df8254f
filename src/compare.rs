use serde::Serialize;

use crate::aggregate::{aggregate, CompareMode};
use crate::config::PolicyConstants;
use crate::outcomes::OutcomeSpec;
use crate::store::SimulationRow;

/// One outcome's delta between scenario A and scenario B.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonEntry {
    pub outcome: String,
    pub label: String,
    pub percent_change: f64,
    pub value_a: f64,
    pub value_b: f64,
}

/// Either per-outcome deltas, or the explicit signal that no outcome
/// survived. An empty table of zero-percent changes and "nothing was
/// comparable" are different answers.
#[derive(Debug, Clone)]
pub enum ComparisonResult {
    Entries(Vec<ComparisonEntry>),
    NothingToCompare,
}

/// Compare two independently selected scenarios across the outcome list,
/// in list order. An outcome is skipped when either side has no value or
/// when the baseline magnitude sits inside the epsilon guard; percent
/// change against a ~zero baseline is noise, not signal.
pub fn compare(
    rows_a: &[&SimulationRow],
    rows_b: &[&SimulationRow],
    mode: CompareMode,
    outcomes: &[OutcomeSpec],
    constants: &PolicyConstants,
) -> ComparisonResult {
    let mut entries = Vec::new();

    for spec in outcomes {
        let value_a = aggregate(rows_a, spec.key, mode, constants);
        let value_b = aggregate(rows_b, spec.key, mode, constants);
        let (value_a, value_b) = match (value_a, value_b) {
            (Some(a), Some(b)) => (a, b),
            _ => continue,
        };
        if value_a.abs() <= constants.baseline_epsilon {
            continue;
        }

        let percent_change = (value_b - value_a) / value_a.abs() * 100.0;
        entries.push(ComparisonEntry {
            outcome: spec.key.to_string(),
            label: spec.label.to_string(),
            percent_change,
            value_a,
            value_b,
        });
    }

    if entries.is_empty() {
        ComparisonResult::NothingToCompare
    } else {
        ComparisonResult::Entries(entries)
    }
}
