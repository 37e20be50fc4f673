//! Project one principal from every start year in the table
//!
//! Outputs one CSV row per year for side-by-side comparison

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use sp500_whatif::{projection::current_year, render::format_currency, ScenarioRunner};

#[derive(Parser)]
#[command(name = "compare_years")]
#[command(about = "Compare an S&P 500 investment across every start year", long_about = None)]
struct Args {
    /// Amount invested in dollars (minimum 100)
    #[arg(short, long, default_value_t = 1000.0)]
    amount: f64,

    /// Treat this as the current year instead of the system clock
    #[arg(long)]
    as_of: Option<i32>,

    /// Load multipliers from a CSV file (columns: year,multiplier)
    #[arg(short, long)]
    table: Option<PathBuf>,

    /// Output CSV path
    #[arg(short, long, default_value = "year_comparison.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let runner = match &args.table {
        Some(path) => ScenarioRunner::from_csv_path(path)
            .with_context(|| format!("Failed to load return table from {}", path.display()))?,
        None => ScenarioRunner::new(),
    };
    let today = args.as_of.unwrap_or_else(current_year);

    let results = runner.run_all_years(args.amount, today)?;
    println!("Projected {} start years in {:?}", results.len(), start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Unable to create {}", args.output.display()))?;
    writer.write_record(["year", "multiplier", "current_value", "gain", "years_held"])?;

    println!("{:>6} {:>10} {:>16} {:>16} {:>6}", "Year", "Multiple", "Value", "Gain", "Years");
    println!("{}", "-".repeat(58));

    for result in &results {
        let summary = result.summary();
        writer.write_record([
            summary.start_year.to_string(),
            summary.multiplier.to_string(),
            format!("{:.2}", summary.current_value),
            format!("{:.2}", summary.gain),
            summary.years_held.to_string(),
        ])?;

        println!(
            "{:>6} {:>10.2} {:>16} {:>16} {:>6}",
            summary.start_year,
            summary.multiplier,
            format!("${}", format_currency(summary.current_value)),
            format!("${}", format_currency(summary.gain)),
            summary.years_held,
        );
    }
    writer.flush()?;

    println!("\nFull results written to: {}", args.output.display());
    Ok(())
}
