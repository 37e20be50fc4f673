//! Year-indexed total-return multiplier table

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use super::loader;
use crate::error::{CalculatorError, Result};

/// Approximate S&P 500 total return multipliers (dividends reinvested),
/// growth of $1 invested at the start of each year through the present
const SP500_TOTAL_RETURN: [(i32, f64); 24] = [
    (2000, 7.54), (2001, 6.94), (2002, 6.46), (2003, 5.28), (2004, 4.82),
    (2005, 4.42), (2006, 3.92), (2007, 3.44), (2008, 2.26), (2009, 3.47),
    (2010, 3.02), (2011, 2.73), (2012, 2.35), (2013, 1.98), (2014, 1.80),
    (2015, 1.63), (2016, 1.47), (2017, 1.31), (2018, 1.21), (2019, 1.12),
    (2020, 1.00), (2021, 0.90), (2022, 0.80), (2023, 0.75),
];

/// Accepted calendar years for table entries
pub const MIN_TABLE_YEAR: i32 = 1;
pub const MAX_TABLE_YEAR: i32 = 9999;

/// Immutable mapping from calendar year to total-return multiplier.
///
/// Built once at startup and shared by reference. Years iterate ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnTable {
    multipliers: BTreeMap<i32, f64>,
}

impl ReturnTable {
    /// Build a table from (year, multiplier) pairs.
    ///
    /// Rejects empty input, duplicate years, years outside
    /// `MIN_TABLE_YEAR..=MAX_TABLE_YEAR`, and multipliers that are negative
    /// or not finite.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i32, f64)>,
    {
        let mut multipliers = BTreeMap::new();

        for (year, multiplier) in entries {
            if !(MIN_TABLE_YEAR..=MAX_TABLE_YEAR).contains(&year) {
                return Err(CalculatorError::InvalidTable(format!(
                    "year {} is outside {}-{}",
                    year, MIN_TABLE_YEAR, MAX_TABLE_YEAR
                )));
            }
            if !multiplier.is_finite() || multiplier < 0.0 {
                return Err(CalculatorError::InvalidTable(format!(
                    "multiplier for {} must be a non-negative number, got {}",
                    year, multiplier
                )));
            }
            if multipliers.insert(year, multiplier).is_some() {
                return Err(CalculatorError::InvalidTable(format!("duplicate year {}", year)));
            }
        }

        if multipliers.is_empty() {
            return Err(CalculatorError::InvalidTable("table has no years".to_string()));
        }

        Ok(Self { multipliers })
    }

    /// Built-in S&P 500 table covering 2000-2023
    pub fn sp500_total_return() -> Self {
        Self {
            multipliers: SP500_TOTAL_RETURN.iter().copied().collect(),
        }
    }

    /// Load the table from the default location (data/returns/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(&Path::new(loader::DEFAULT_RETURNS_PATH).join(loader::DEFAULT_RETURNS_FILE))
    }

    /// Load the table from a specific CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let entries = loader::load_multipliers(path)?;
        log::debug!("Loaded {} return multipliers from {}", entries.len(), path.display());
        Self::from_entries(entries)
    }

    /// Load the table from CSV text read from `reader`
    pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Self::from_entries(loader::load_multipliers_from_reader(reader)?)
    }

    /// Multiplier for a year, if the table has one
    pub fn get(&self, year: i32) -> Option<f64> {
        self.multipliers.get(&year).copied()
    }

    /// Available years, ascending
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.multipliers.keys().copied()
    }

    /// (year, multiplier) pairs, ascending by year
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.multipliers.iter().map(|(&year, &m)| (year, m))
    }

    pub fn first_year(&self) -> i32 {
        // from_entries guarantees at least one entry
        self.multipliers.keys().next().copied().unwrap_or_default()
    }

    pub fn last_year(&self) -> i32 {
        self.multipliers.keys().next_back().copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }
}

impl Default for ReturnTable {
    fn default() -> Self {
        Self::sp500_total_return()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_covers_2000_to_2023() {
        let table = ReturnTable::sp500_total_return();
        assert_eq!(table.len(), 24);
        assert_eq!(table.first_year(), 2000);
        assert_eq!(table.last_year(), 2023);
        assert_eq!(table.get(2000), Some(7.54));
        assert_eq!(table.get(2023), Some(0.75));
        assert_eq!(table.get(1999), None);
    }

    #[test]
    fn test_years_sorted_ascending() {
        let table = ReturnTable::from_entries(vec![(2010, 3.0), (2001, 6.9), (2005, 4.4)]).unwrap();
        let years: Vec<i32> = table.years().collect();
        assert_eq!(years, vec![2001, 2005, 2010]);
    }

    #[test]
    fn test_rejects_duplicate_year() {
        let err = ReturnTable::from_entries(vec![(2001, 6.9), (2001, 7.0)]).unwrap_err();
        assert!(matches!(err, CalculatorError::InvalidTable(_)));
    }

    #[test]
    fn test_rejects_negative_and_nan_multipliers() {
        assert!(ReturnTable::from_entries(vec![(2001, -0.1)]).is_err());
        assert!(ReturnTable::from_entries(vec![(2001, f64::NAN)]).is_err());
        // Zero is allowed
        assert!(ReturnTable::from_entries(vec![(2001, 0.0)]).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_years() {
        for year in [i32::MIN, -1, 0, 10_000, i32::MAX] {
            let err = ReturnTable::from_entries(vec![(2001, 6.9), (year, 1.5)]).unwrap_err();
            assert!(matches!(err, CalculatorError::InvalidTable(_)), "year {} accepted", year);
        }
        assert!(ReturnTable::from_entries(vec![(MIN_TABLE_YEAR, 1.0), (MAX_TABLE_YEAR, 1.0)]).is_ok());
    }

    #[test]
    fn test_rejects_empty_table() {
        assert!(ReturnTable::from_entries(Vec::new()).is_err());
    }

    #[test]
    fn test_from_csv_reader_validates() {
        let table = ReturnTable::from_csv_reader("year,multiplier\n2022,0.80\n2023,0.75\n".as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert!(ReturnTable::from_csv_reader("year,multiplier\n99999,1.0\n".as_bytes()).is_err());
    }

    #[test]
    fn test_csv_matches_builtin() {
        let loaded = ReturnTable::from_csv().expect("Failed to load returns");
        assert_eq!(loaded, ReturnTable::sp500_total_return());
    }
}
