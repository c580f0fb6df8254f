/// Presentation and scaling configuration for one outcome column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeSpec {
    /// Column key used in queries and CLI arguments.
    pub key: &'static str,
    /// Human-readable axis and legend label.
    pub label: &'static str,
    /// Display unit after `scale` is applied.
    pub unit: &'static str,
    /// Multiplier applied to raw values for display.
    pub scale: f64,
    /// Tonnage quantity; sinks annotate these differently.
    pub tonnage: bool,
}

/// Every outcome the table can carry, in the fixed order comparisons are
/// reported in.
pub const OUTCOMES: &[OutcomeSpec] = &[
    OutcomeSpec {
        key: "emissions_total",
        label: "Emissions (total)",
        unit: "MtCO2",
        scale: 1.0,
        tonnage: true,
    },
    OutcomeSpec {
        key: "profit_total",
        label: "Profit (total)",
        unit: "USD",
        scale: 1.0,
        tonnage: false,
    },
    OutcomeSpec {
        key: "market_quantity",
        label: "Market quantity",
        unit: "Mt",
        scale: 1.0,
        tonnage: true,
    },
    OutcomeSpec {
        key: "imports",
        label: "Imports",
        unit: "Mt",
        scale: 1.0,
        tonnage: true,
    },
    OutcomeSpec {
        key: "price",
        label: "Price",
        unit: "USD/t",
        scale: 1.0,
        tonnage: false,
    },
    OutcomeSpec {
        key: "leakage",
        label: "Leakage",
        unit: "MtCO2",
        scale: 1.0,
        tonnage: true,
    },
    OutcomeSpec {
        key: "consumer_surplus",
        label: "Consumer surplus",
        unit: "USD",
        scale: 1.0,
        tonnage: false,
    },
    OutcomeSpec {
        key: "carbon_revenue",
        label: "Carbon revenue",
        unit: "USD",
        scale: 1.0,
        tonnage: false,
    },
    OutcomeSpec {
        key: "damage",
        label: "Climate damage",
        unit: "USD",
        scale: 1.0,
        tonnage: false,
    },
];

/// Catalog entry for an outcome key.
pub fn outcome_spec(key: &str) -> Option<&'static OutcomeSpec> {
    OUTCOMES.iter().find(|s| s.key == key)
}

/// Display label for an outcome key; unknown keys fall back to the key
/// itself.
pub fn outcome_label(key: &str) -> &str {
    outcome_spec(key).map(|s| s.label).unwrap_or(key)
}
