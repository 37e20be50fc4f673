//! CSV-based return table loader
//!
//! Loads year/multiplier pairs from CSV files in data/returns/

use std::io::Read;
use std::path::Path;

use csv::Reader;

use crate::error::Result;

/// Default path to the returns directory
pub const DEFAULT_RETURNS_PATH: &str = "data/returns";

/// File name of the built-in S&P 500 table
pub const DEFAULT_RETURNS_FILE: &str = "sp500_total_return.csv";

/// Raw CSV row matching the `year,multiplier` columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    year: i32,
    multiplier: f64,
}

/// Load (year, multiplier) pairs from a CSV file, in file order
pub fn load_multipliers(path: &Path) -> Result<Vec<(i32, f64)>> {
    let reader = Reader::from_path(path)?;
    read_rows(reader)
}

/// Load (year, multiplier) pairs from a stream (stdin, an in-memory buffer)
pub(crate) fn load_multipliers_from_reader<R: Read>(reader: R) -> Result<Vec<(i32, f64)>> {
    read_rows(Reader::from_reader(reader))
}

fn read_rows<R: Read>(mut reader: Reader<R>) -> Result<Vec<(i32, f64)>> {
    let mut entries = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        entries.push((row.year, row.multiplier));
    }

    Ok(entries)
}
