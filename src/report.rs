//! Output formatting for survey results.
//!
//! Two formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};

use crate::algos::BinaryConversion;
use crate::stats::{Analysis, FrequencyTable};

// =============================================================================
// JSON Format
// =============================================================================

/// JSON report structure.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub source: String,
    pub total_colors: usize,
    pub frequencies: Vec<FrequencyEntry>,
    pub analysis: Analysis,
}

/// One frequency table entry.
#[derive(Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub color: String,
    pub count: u64,
}

/// Assemble the JSON report structure.
pub fn build_json(source: &str, table: &FrequencyTable, analysis: &Analysis) -> JsonReport {
    let frequencies = table
        .iter()
        .map(|(color, count)| FrequencyEntry {
            color: color.to_string(),
            count,
        })
        .collect();

    JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        source: source.to_string(),
        total_colors: analysis.total_observed,
        frequencies,
        analysis: analysis.clone(),
    }
}

/// Write results in JSON format.
pub fn write_json(source: &str, table: &FrequencyTable, analysis: &Analysis) -> anyhow::Result<()> {
    let report = build_json(source, table, analysis);
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in pretty (human-readable) format.
pub fn write_pretty(source: &str, table: &FrequencyTable, analysis: &Analysis) {
    // Header
    println!();
    print!("  ");
    print!("{}", "colortally".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Source: ".dimmed());
    println!("{}", source);
    print!("  {}", "Colors recorded: ".dimmed());
    println!("{}", analysis.total_observed);
    println!();

    // Frequency listing in first-seen order
    println!("  {}", "Color frequencies".bold());
    for (color, count) in table.iter() {
        println!("    {:<12} {}", color, count);
    }
    println!();

    // The five analysis results
    println!("  {}", "Analysis".bold());
    println!("    1. Mean color (by frequency):   {}", analysis.mean_color);
    println!("    2. Most worn color (mode):      {}", analysis.mode);
    println!("    3. Median color (alphabetical): {}", analysis.median_color);
    println!("    4. Variance of frequencies:     {:.2}", analysis.variance);
    println!(
        "    5. Probability of choosing RED: {:.2}%",
        analysis.red_probability
    );
    println!();
}

/// Write the algorithm demonstration results.
pub fn write_demo(
    search_data: &[i32],
    search_target: i32,
    search_result: Option<usize>,
    conversion: &BinaryConversion,
    fibonacci_terms: u32,
    fibonacci_total: u64,
) {
    println!();
    println!("  {}", "Algorithm demonstrations".bold());
    println!();

    println!("  {}", "Recursive binary search".dimmed());
    println!("    Searching for {} in {:?}", search_target, search_data);
    match search_result {
        Some(index) => println!("    Found at index: {}", index.to_string().green()),
        None => println!("    {}", "Target not found".yellow()),
    }
    println!();

    println!("  {}", "Random binary to decimal".dimmed());
    println!("    Random 4-digit binary number: {}", conversion.bits);
    println!("    Decimal equivalent: {}", conversion.decimal);
    println!();

    println!("  {}", "Fibonacci summation".dimmed());
    println!(
        "    Sum of the first {} Fibonacci numbers: {}",
        fibonacci_terms, fibonacci_total
    );
    println!();
}
