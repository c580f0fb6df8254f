use crate::store::{RowStore, SimulationRow};

/// The three-way family key a dashboard selection starts from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioKey {
    pub market: String,
    pub instrument: String,
    pub cbam: u8,
}

impl ScenarioKey {
    pub fn new(market: &str, instrument: &str, cbam: u8) -> ScenarioKey {
        ScenarioKey {
            market: market.to_string(),
            instrument: instrument.to_string(),
            cbam,
        }
    }

    fn matches(&self, row: &SimulationRow) -> bool {
        row.market == self.market && row.instrument == self.instrument && row.cbam == self.cbam
    }
}

/// One complete dashboard selection, passed by value into queries so the
/// core stays free of ambient UI state.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub key: ScenarioKey,
    pub level_index: usize,
    pub outcome: String,
}

impl Selection {
    /// The selection the dashboard opens with: "Total" and "Tax" when
    /// present (first categories otherwise), CBAM off, lowest level, first
    /// outcome the table actually carries.
    pub fn default_for(store: &RowStore) -> Option<Selection> {
        let market = prefer(&store.markets(), "Total")?;
        let instrument = prefer(&store.instruments(), "Tax")?;
        let outcome = store.available_outcomes().first()?.key.to_string();
        Some(Selection {
            key: ScenarioKey {
                market,
                instrument,
                cbam: 0,
            },
            level_index: 0,
            outcome,
        })
    }
}

fn prefer(values: &[String], preferred: &str) -> Option<String> {
    if values.iter().any(|v| v == preferred) {
        return Some(preferred.to_string());
    }
    values.first().cloned()
}

/// Distinct policy levels available for a scenario family, ascending.
pub fn level_grid(store: &RowStore, key: &ScenarioKey) -> Vec<f64> {
    let mut levels: Vec<f64> = store
        .rows()
        .iter()
        .filter(|r| key.matches(r))
        .map(|r| r.level)
        .collect();
    levels.sort_by(f64::total_cmp);
    levels.dedup();
    levels
}

/// Clamp a slider index into the grid. None only when the grid is empty;
/// a stale out-of-range index resolves to the last level instead of
/// failing.
pub fn resolve_level(grid: &[f64], index: usize) -> Option<f64> {
    let last = grid.len().checked_sub(1)?;
    Some(grid[index.min(last)])
}

/// Display string for the resolved level; empty when there is nothing to
/// resolve.
pub fn level_label(grid: &[f64], index: usize) -> String {
    match resolve_level(grid, index) {
        Some(level) => format!("{level}"),
        None => String::new(),
    }
}

/// All rows of the fully specified scenario: the family key plus the level
/// the clamped index resolves to. Empty when the family has no rows.
pub fn select<'a>(
    store: &'a RowStore,
    key: &ScenarioKey,
    level_index: usize,
) -> Vec<&'a SimulationRow> {
    let grid = level_grid(store, key);
    let level = match resolve_level(&grid, level_index) {
        Some(level) => level,
        None => return Vec::new(),
    };
    store
        .rows()
        .iter()
        .filter(|r| key.matches(r) && r.level == level)
        .collect()
}
