use serde::Deserialize;
use std::path::Path;

/// Fixed policy constants behind the aggregation math. Defaults match the
/// published dashboard; a TOML file can override any subset.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PolicyConstants {
    /// Per-year geometric discount factor.
    pub discount_factor: f64,
    /// Calendar years covered by one period index.
    pub period_length_years: u32,
    /// Calendar year of period 0.
    pub base_year: i32,
    /// Baselines at or below this magnitude are never divided by.
    pub baseline_epsilon: f64,
}

impl Default for PolicyConstants {
    fn default() -> Self {
        PolicyConstants {
            discount_factor: 0.975,
            period_length_years: 3,
            base_year: 2025,
            baseline_epsilon: 1e-10,
        }
    }
}

impl PolicyConstants {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&text)?)
    }

    /// Calendar year a period index maps to.
    pub fn year_of(&self, time: u32) -> i32 {
        self.base_year + (time * self.period_length_years) as i32
    }
}
