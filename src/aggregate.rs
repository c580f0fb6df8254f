use crate::config::PolicyConstants;
use crate::store::SimulationRow;

/// How a scenario collapses to a single number per outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompareMode {
    /// Discounted sum across all periods.
    PresentValue,
    /// Value in the period covering the given calendar year.
    AtYear(i32),
}

/// Discounted sum of an outcome across periods:
/// sum of value(t) * discount_factor^(t * period_length_years).
///
/// Null terms are skipped, not zeroed. None when no row contributes at
/// all; a sum over nothing is missing data, not zero.
pub fn present_value(
    rows: &[&SimulationRow],
    outcome: &str,
    constants: &PolicyConstants,
) -> Option<f64> {
    let mut sum = 0.0;
    let mut contributed = false;

    for row in rows {
        if let Some(value) = row.outcome(outcome) {
            let years = (row.time * constants.period_length_years) as i32;
            sum += value * constants.discount_factor.powi(years);
            contributed = true;
        }
    }

    if contributed {
        Some(sum)
    } else {
        None
    }
}

/// Value of an outcome in the period that starts at `year`. The year must
/// sit exactly on the period grid; off-grid years resolve to no period
/// rather than the nearest one.
pub fn value_at_year(
    rows: &[&SimulationRow],
    outcome: &str,
    year: i32,
    constants: &PolicyConstants,
) -> Option<f64> {
    let offset = i64::from(year) - i64::from(constants.base_year);
    let period_len = i64::from(constants.period_length_years);
    if period_len == 0 || offset % period_len != 0 {
        return None;
    }
    let period = offset / period_len;

    rows.iter()
        .find(|r| i64::from(r.time) == period)
        .and_then(|r| r.outcome(outcome))
}

/// Mode dispatch used by the comparator.
pub fn aggregate(
    rows: &[&SimulationRow],
    outcome: &str,
    mode: CompareMode,
    constants: &PolicyConstants,
) -> Option<f64> {
    match mode {
        CompareMode::PresentValue => present_value(rows, outcome, constants),
        CompareMode::AtYear(year) => value_at_year(rows, outcome, year, constants),
    }
}
