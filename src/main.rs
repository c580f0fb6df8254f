use clap::{Parser, Subcommand};
use std::path::PathBuf;

use carbon_dash::aggregate::CompareMode;
use carbon_dash::compare::{compare, ComparisonResult};
use carbon_dash::config::PolicyConstants;
use carbon_dash::data_source;
use carbon_dash::outcomes;
use carbon_dash::output;
use carbon_dash::scenario::{self, ScenarioKey, Selection};
use carbon_dash::series::build_series;
use carbon_dash::store::RowStore;

#[derive(Parser)]
#[command(
    name = "carbon-dash",
    about = "Scenario explorer for precomputed carbon policy simulation paths"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the simulation table CSV
    Fetch {
        /// Table URL
        #[arg(long)]
        url: String,

        /// Output path for the raw CSV
        #[arg(long, default_value = "data/dashboard_paths.csv")]
        output: String,
    },

    /// Print the discrete policy level grid for a scenario family
    Levels {
        /// Simulation table CSV file
        #[arg(long)]
        data: String,

        /// Market (defaults to "Total" when present)
        #[arg(long)]
        market: Option<String>,

        /// Instrument (defaults to "Tax" when present)
        #[arg(long)]
        instrument: Option<String>,

        /// CBAM toggle (0 or 1)
        #[arg(long, default_value = "0")]
        cbam: u8,
    },

    /// Print or export the time series for one scenario
    Series {
        /// Simulation table CSV file
        #[arg(long)]
        data: String,

        /// Market (defaults to "Total" when present)
        #[arg(long)]
        market: Option<String>,

        /// Instrument (defaults to "Tax" when present)
        #[arg(long)]
        instrument: Option<String>,

        /// CBAM toggle (0 or 1)
        #[arg(long, default_value = "0")]
        cbam: u8,

        /// Slider index into the level grid (clamped)
        #[arg(long, default_value = "0")]
        level_index: usize,

        /// Outcome key (defaults to the first available)
        #[arg(long)]
        outcome: Option<String>,

        /// TOML file overriding the policy constants
        #[arg(long)]
        config: Option<PathBuf>,

        /// Save the series as CSV (time, year, value)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Emit the chart payload as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Compare two scenarios across all outcomes
    Compare {
        /// Simulation table CSV file
        #[arg(long)]
        data: String,

        /// Market of scenario A
        #[arg(long)]
        market_a: String,

        /// Instrument of scenario A
        #[arg(long)]
        instrument_a: String,

        /// CBAM toggle of scenario A
        #[arg(long, default_value = "0")]
        cbam_a: u8,

        /// Level index of scenario A (clamped)
        #[arg(long, default_value = "0")]
        level_a: usize,

        /// Market of scenario B
        #[arg(long)]
        market_b: String,

        /// Instrument of scenario B
        #[arg(long)]
        instrument_b: String,

        /// CBAM toggle of scenario B
        #[arg(long, default_value = "0")]
        cbam_b: u8,

        /// Level index of scenario B (clamped)
        #[arg(long, default_value = "0")]
        level_b: usize,

        /// Aggregation mode: "npv" or "year"
        #[arg(long, default_value = "npv")]
        mode: String,

        /// Calendar year for --mode year
        #[arg(long)]
        year: Option<i32>,

        /// TOML file overriding the policy constants
        #[arg(long)]
        config: Option<PathBuf>,

        /// Save comparison entries as JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List known outcomes and their availability in the table
    Outcomes {
        /// Simulation table CSV file
        #[arg(long)]
        data: String,
    },
}

fn load_store(path: &str) -> Option<RowStore> {
    match data_source::load_table(std::path::Path::new(path)) {
        Ok(store) => Some(store),
        Err(e) => {
            eprintln!("Error loading table: {e}");
            None
        }
    }
}

fn load_constants(path: Option<&PathBuf>) -> Option<PolicyConstants> {
    match path {
        Some(p) => match PolicyConstants::load(p) {
            Ok(c) => Some(c),
            Err(e) => {
                eprintln!("Error loading config: {e}");
                None
            }
        },
        None => Some(PolicyConstants::default()),
    }
}

/// Fill missing selection parts from the table defaults (Total / Tax /
/// first available outcome).
fn build_selection(
    store: &RowStore,
    market: Option<String>,
    instrument: Option<String>,
    cbam: u8,
    level_index: usize,
    outcome: Option<String>,
) -> Option<Selection> {
    let (d_market, d_instrument, d_outcome) = match Selection::default_for(store) {
        Some(d) => (Some(d.key.market), Some(d.key.instrument), Some(d.outcome)),
        None => (None, None, None),
    };

    let market = match market.or(d_market) {
        Some(v) => v,
        None => {
            eprintln!("No market available in the table");
            return None;
        }
    };
    let instrument = match instrument.or(d_instrument) {
        Some(v) => v,
        None => {
            eprintln!("No instrument available in the table");
            return None;
        }
    };
    let outcome = match outcome.or(d_outcome) {
        Some(v) => v,
        None => {
            eprintln!("No outcome available in the table");
            return None;
        }
    };

    Some(Selection {
        key: ScenarioKey {
            market,
            instrument,
            cbam,
        },
        level_index,
        outcome,
    })
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch { url, output } => {
            println!("Fetching table from {url}...");
            match data_source::fetch_csv(&url) {
                Ok(text) => {
                    match RowStore::from_csv_str(&text) {
                        Ok(store) => println!("Fetched {} simulation rows", store.len()),
                        Err(e) => {
                            eprintln!("Error parsing fetched table: {e}");
                            return;
                        }
                    }
                    let path = PathBuf::from(&output);
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        if let Err(e) = std::fs::create_dir_all(parent) {
                            eprintln!("Error creating {}: {e}", parent.display());
                            return;
                        }
                    }
                    match std::fs::write(&path, &text) {
                        Ok(()) => println!("Saved table to {}", path.display()),
                        Err(e) => eprintln!("Error saving table: {e}"),
                    }
                }
                Err(e) => eprintln!("Error fetching table: {e}"),
            }
        }

        Commands::Levels {
            data,
            market,
            instrument,
            cbam,
        } => {
            let store = match load_store(&data) {
                Some(s) => s,
                None => return,
            };
            let sel = match build_selection(&store, market, instrument, cbam, 0, None) {
                Some(s) => s,
                None => return,
            };

            let grid = scenario::level_grid(&store, &sel.key);
            if grid.is_empty() {
                println!(
                    "No levels for {} / {} / CBAM {}",
                    sel.key.market, sel.key.instrument, sel.key.cbam
                );
            } else {
                println!(
                    "{} levels for {} / {} / CBAM {}: {:?}",
                    grid.len(),
                    sel.key.market,
                    sel.key.instrument,
                    sel.key.cbam,
                    grid
                );
            }
        }

        Commands::Series {
            data,
            market,
            instrument,
            cbam,
            level_index,
            outcome,
            config,
            output,
            json,
        } => {
            let store = match load_store(&data) {
                Some(s) => s,
                None => return,
            };
            let constants = match load_constants(config.as_ref()) {
                Some(c) => c,
                None => return,
            };
            let sel = match build_selection(&store, market, instrument, cbam, level_index, outcome)
            {
                Some(s) => s,
                None => return,
            };

            let grid = scenario::level_grid(&store, &sel.key);
            let rows = scenario::select(&store, &sel.key, sel.level_index);
            let level = scenario::level_label(&grid, sel.level_index);
            let s = build_series(&rows, &sel.outcome);

            if s.is_empty() {
                println!(
                    "No data points for {} / {} / CBAM {} level {} ({})",
                    sel.key.market, sel.key.instrument, sel.key.cbam, level, sel.outcome
                );
                return;
            }

            if json {
                match outcomes::outcome_spec(&sel.outcome) {
                    Some(spec) => match serde_json::to_string_pretty(&output::plot_data(&s, spec))
                    {
                        Ok(payload) => println!("{payload}"),
                        Err(e) => eprintln!("Error encoding payload: {e}"),
                    },
                    None => eprintln!("Unknown outcome key: {}", sel.outcome),
                }
            } else {
                println!(
                    "{} for {} / {} / CBAM {} at level {} ({} points):",
                    outcomes::outcome_label(&sel.outcome),
                    sel.key.market,
                    sel.key.instrument,
                    sel.key.cbam,
                    level,
                    s.len()
                );
                for (t, v) in s.x.iter().zip(&s.y) {
                    println!("  t={:<3} ({}) {}", t, constants.year_of(*t), v);
                }
            }

            if let Some(path) = output {
                match output::save_series_csv(&s, &constants, &path) {
                    Ok(()) => println!("Saved series to {}", path.display()),
                    Err(e) => eprintln!("Error saving series: {e}"),
                }
            }
        }

        Commands::Compare {
            data,
            market_a,
            instrument_a,
            cbam_a,
            level_a,
            market_b,
            instrument_b,
            cbam_b,
            level_b,
            mode,
            year,
            config,
            output,
        } => {
            let store = match load_store(&data) {
                Some(s) => s,
                None => return,
            };
            let constants = match load_constants(config.as_ref()) {
                Some(c) => c,
                None => return,
            };

            let mode = match mode.as_str() {
                "npv" => CompareMode::PresentValue,
                "year" => match year {
                    Some(y) => CompareMode::AtYear(y),
                    None => {
                        eprintln!("--mode year requires --year");
                        return;
                    }
                },
                other => {
                    eprintln!("Unknown mode: {other} (use npv or year)");
                    return;
                }
            };

            let key_a = ScenarioKey::new(&market_a, &instrument_a, cbam_a);
            let key_b = ScenarioKey::new(&market_b, &instrument_b, cbam_b);
            let rows_a = scenario::select(&store, &key_a, level_a);
            let rows_b = scenario::select(&store, &key_b, level_b);

            match compare(&rows_a, &rows_b, mode, outcomes::OUTCOMES, &constants) {
                ComparisonResult::NothingToCompare => {
                    println!("Nothing to compare: no outcome has values on both sides.");
                }
                ComparisonResult::Entries(entries) => {
                    println!(
                        "{:<22} {:>16} {:>16} {:>9}",
                        "Outcome", "A", "B", "Change"
                    );
                    for e in &entries {
                        println!(
                            "{:<22} {:>16.4} {:>16.4} {:>8.2}%",
                            e.label, e.value_a, e.value_b, e.percent_change
                        );
                    }
                    if let Some(path) = output {
                        match output::save_comparison_json(&entries, &path) {
                            Ok(()) => println!("Saved comparison to {}", path.display()),
                            Err(e) => eprintln!("Error saving comparison: {e}"),
                        }
                    }
                }
            }
        }

        Commands::Outcomes { data } => {
            let store = match load_store(&data) {
                Some(s) => s,
                None => return,
            };
            let available = store.available_outcomes();

            println!("Known outcomes ({} available in table):", available.len());
            for spec in outcomes::OUTCOMES {
                let status = if available.iter().any(|a| a.key == spec.key) {
                    "available"
                } else {
                    "missing"
                };
                println!(
                    "  {:<18} {:<20} [{:<6}] {}",
                    spec.key, spec.label, spec.unit, status
                );
            }
        }
    }
}
