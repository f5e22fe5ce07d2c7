//! Command-line interface for colortally.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::algos;
use crate::db::{self, DbConfig};
use crate::extract;
use crate::report;
use crate::stats::{self, FrequencyTable};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Default survey document in the working directory.
pub const DEFAULT_INPUT: &str = "color_survey.html";

/// Fixed inputs for the algorithm demonstrations.
const SEARCH_SAMPLE: [i32; 10] = [2, 5, 8, 12, 16, 23, 38, 56, 72, 91];
const SEARCH_TARGET: i32 = 23;
const FIBONACCI_TERMS: u32 = 50;

/// Wardrobe color survey analyzer.
///
/// Extracts recorded clothing colors from an HTML survey table, computes
/// frequency statistics (mode, alphabetical median, mean-by-frequency,
/// variance, probability of RED), and records the frequency table in
/// PostgreSQL.
#[derive(Parser)]
#[command(name = "colortally")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract, analyze, persist, and demo in one pass
    Run(RunArgs),
    /// Run only the algorithm demonstrations
    Demo,
}

/// Arguments for the run command.
#[derive(Parser)]
pub struct RunArgs {
    /// Path to the HTML survey document
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Analyze without writing to the database
    #[arg(long)]
    pub skip_db: bool,

    /// Dotenv file to load before reading the DB_* variables
    #[arg(long)]
    pub env_file: Option<PathBuf>,
}

/// Run the full survey pass.
pub fn run(args: &RunArgs) -> anyhow::Result<i32> {
    // Validate format
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    // Check the input before handing it to the extractor
    if !args.input.is_file() {
        eprintln!("Error: input file {:?} was not found", args.input);
        return Ok(EXIT_FAILED);
    }

    let labels = extract::parse_colors(&args.input)?;
    let Some((table, analysis)) = stats::analyze(&labels) else {
        eprintln!("Warning: no colors to analyze in {:?}", args.input);
        return Ok(EXIT_FAILED);
    };

    let source = args.input.to_string_lossy();
    match args.format.as_str() {
        "json" => report::write_json(&source, &table, &analysis)?,
        _ => report::write_pretty(&source, &table, &analysis),
    }

    if !args.skip_db {
        persist(&table, args.env_file.as_deref(), args.format == "pretty");
    }

    // The demos print free-form text, which would corrupt json output;
    // they stay reachable via the demo subcommand.
    if args.format == "pretty" {
        write_demos();
    }

    Ok(EXIT_SUCCESS)
}

/// Run only the algorithm demonstrations.
pub fn run_demo() -> anyhow::Result<i32> {
    write_demos();
    Ok(EXIT_SUCCESS)
}

/// Upsert the frequency table, reporting failures without aborting the run.
fn persist(table: &FrequencyTable, env_file: Option<&Path>, verbose: bool) {
    match env_file {
        Some(path) => {
            if let Err(e) = dotenvy::from_path(path) {
                eprintln!("Error: cannot load env file {:?}: {}", path, e);
                return;
            }
        }
        None => {
            // A missing .env is fine; the variables may be set directly.
            let _ = dotenvy::dotenv();
        }
    }

    let config = match DbConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    match db::save_frequencies(&config, table) {
        Ok(()) => {
            if verbose {
                println!("  Saved color frequencies to the database.");
            }
        }
        Err(e @ db::DbError::Connection(_)) => {
            eprintln!("Error: {}", e);
            eprintln!("Ensure PostgreSQL is running and the DB_* credentials are correct");
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}

/// Compute and print the three demonstrations.
fn write_demos() {
    let found = algos::binary_search(&SEARCH_SAMPLE, &SEARCH_TARGET);
    let conversion = algos::random_binary();
    let total = algos::fibonacci_sum(FIBONACCI_TERMS);

    report::write_demo(
        &SEARCH_SAMPLE,
        SEARCH_TARGET,
        found,
        &conversion,
        FIBONACCI_TERMS,
        total,
    );
}
