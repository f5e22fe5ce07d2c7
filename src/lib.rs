//! Colortally - wardrobe color survey analyzer.
//!
//! Colortally reads a small HTML table of recorded clothing colors,
//! computes descriptive statistics over the color frequency table, and
//! upserts the table into PostgreSQL. A separate `demo` subcommand runs
//! three standalone algorithm exercises.
//!
//! # Architecture
//!
//! One linear pass: extract, analyze, report, persist.
//!
//! - `extract`: tolerant HTML table scanning and label normalization
//! - `stats`: frequency table and the five analysis results
//! - `report`: output formatting (pretty, JSON)
//! - `db`: PostgreSQL upsert of the frequency table
//! - `algos`: standalone algorithm exercises
//! - `cli`: argument parsing and command dispatch

pub mod algos;
pub mod cli;
pub mod db;
pub mod extract;
pub mod report;
pub mod stats;

pub use algos::{binary_search, fibonacci_sum, random_binary, BinaryConversion};
pub use db::{save_frequencies, DbConfig, DbError};
pub use extract::{parse_colors, parse_colors_from_str};
pub use report::JsonReport;
pub use stats::{analyze, median_color, Analysis, FrequencyTable};
