//! Scenario explorer for precomputed carbon policy simulation paths.
//!
//! The crate answers the queries an interactive dashboard needs over a flat
//! table of simulation rows: discrete level grids, filtered time series,
//! discounted aggregates, two-scenario comparisons, and axis tick steps.

pub mod aggregate;
pub mod compare;
pub mod config;
pub mod data_source;
pub mod outcomes;
pub mod output;
pub mod scenario;
pub mod series;
pub mod store;
pub mod ticks;
