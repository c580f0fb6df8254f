use serde::Serialize;
use std::path::Path;

use crate::compare::ComparisonEntry;
use crate::config::PolicyConstants;
use crate::outcomes::OutcomeSpec;
use crate::series::Series;
use crate::ticks;

/// Everything the chart sink needs to draw one scenario line.
#[derive(Debug, Clone, Serialize)]
pub struct PlotData {
    pub x: Vec<u32>,
    pub y: Vec<f64>,
    pub label: String,
    pub unit: String,
    pub tick_values: Vec<f64>,
    pub tick_labels: Vec<String>,
}

/// Assemble the render payload: display-scaled values plus axis ticks
/// derived from the scaled maximum.
pub fn plot_data(series: &Series, spec: &OutcomeSpec) -> PlotData {
    let y: Vec<f64> = series.y.iter().map(|v| v * spec.scale).collect();
    let upper = y.iter().cloned().fold(0.0_f64, f64::max);
    let axis_ticks = ticks::build_ticks(upper);

    PlotData {
        x: series.x.clone(),
        y,
        label: spec.label.to_string(),
        unit: spec.unit.to_string(),
        tick_values: axis_ticks.iter().map(|t| t.value).collect(),
        tick_labels: axis_ticks.into_iter().map(|t| t.label).collect(),
    }
}

/// Serialize a plotted series to CSV text (time, year, value) for the
/// download sink.
pub fn series_csv(
    series: &Series,
    constants: &PolicyConstants,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["time", "year", "value"])?;

    for (t, v) in series.x.iter().zip(&series.y) {
        wtr.write_record(&[
            t.to_string(),
            constants.year_of(*t).to_string(),
            v.to_string(),
        ])?;
    }

    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Save the series CSV blob to disk.
pub fn save_series_csv(
    series: &Series,
    constants: &PolicyConstants,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, series_csv(series, constants)?)?;
    Ok(())
}

/// Save comparison entries as JSON for the comparison chart sink.
pub fn save_comparison_json(
    entries: &[ComparisonEntry],
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, json)?;
    Ok(())
}
