//! sp500_whatif CLI
//!
//! Shows what an investment in the S&P 500 made in a past year would be worth today

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sp500_whatif::{
    projection::{current_year, CalculatorConfig},
    render::{self, DEFAULT_CHART_HEIGHT},
    ProjectionCalculator, RenderState, ReturnTable,
};

#[derive(Parser)]
#[command(name = "sp500_whatif")]
#[command(about = "What if I invested in the S&P 500?", long_about = None)]
struct Cli {
    /// Amount invested in dollars (minimum 100)
    #[arg(short, long, default_value_t = 1000.0)]
    amount: f64,

    /// Year of investment (default: earliest year in the table)
    #[arg(short, long)]
    year: Option<i32>,

    /// Hide the growth chart
    #[arg(long)]
    no_chart: bool,

    /// Treat this as the current year instead of the system clock
    #[arg(long)]
    as_of: Option<i32>,

    /// Load multipliers from a CSV file (columns: year,multiplier); `-` reads stdin
    #[arg(short, long)]
    table: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Write the growth series to a CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List the years with data and exit
    #[arg(long)]
    list_years: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let table = match &cli.table {
        Some(path) if path.as_os_str() == "-" => ReturnTable::from_csv_reader(std::io::stdin().lock())
            .context("Failed to read return table from stdin")?,
        Some(path) => ReturnTable::from_csv_path(path)
            .with_context(|| format!("Failed to load return table from {}", path.display()))?,
        None => ReturnTable::sp500_total_return(),
    };
    let calculator = ProjectionCalculator::new(table, CalculatorConfig::default());

    if cli.list_years {
        for (year, multiplier) in calculator.table().iter() {
            println!("{}  {}", year, render::format_multiplier(multiplier));
        }
        return Ok(());
    }

    let state = RenderState {
        amount: cli.amount,
        year: cli.year.unwrap_or_else(|| calculator.table().first_year()),
        show_chart: !cli.no_chart,
    };
    let today = cli.as_of.unwrap_or_else(current_year);

    let output = render::render(&calculator, &state, today)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output.title);
        println!("{}\n", output.subtitle);

        if let Some(warning) = &output.warning {
            println!("Warning: {}", warning);
        }
        if let Some(headline) = &output.headline {
            println!("{}", headline);
        }
        if let Some(caption) = &output.caption {
            println!("{}", caption);
        }
        if let Some(chart) = &output.chart {
            println!("\n{}", chart.to_text(DEFAULT_CHART_HEIGHT));
        }
    }

    match (&cli.output, &output.chart) {
        (Some(path), Some(chart)) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Unable to create {}", path.display()))?;
            chart.write_csv(file)?;
            log::info!("Growth series written to {}", path.display());
        }
        (Some(path), None) => {
            let reason = if output.is_warning() { "no data for that year" } else { "the chart is turned off" };
            log::warn!("Not writing {}: {}", path.display(), reason);
            eprintln!("No growth series written to {} ({})", path.display(), reason);
        }
        _ => {}
    }

    Ok(())
}
