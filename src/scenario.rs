//! Scenario runner for comparing start years
//!
//! Holds one calculator (and its return table) and runs many requests against
//! it without reloading the table.

use rayon::prelude::*;

use crate::error::Result;
use crate::projection::{CalculatorConfig, ProjectionCalculator, ProjectionRequest, ProjectionResult};
use crate::returns::ReturnTable;

/// Pre-loaded runner for batches of projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv()?;
///
/// // Value of $1,000 invested in every available year
/// let results = runner.run_all_years(1000.0, 2026)?;
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    calculator: ProjectionCalculator,
}

impl ScenarioRunner {
    /// Create runner over the built-in S&P 500 table
    pub fn new() -> Self {
        Self {
            calculator: ProjectionCalculator::sp500(),
        }
    }

    /// Create runner by loading the table from the default CSV file
    pub fn from_csv() -> Result<Self> {
        Ok(Self::with_table(ReturnTable::from_csv()?))
    }

    /// Create runner from a specific table file
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self> {
        Ok(Self::with_table(ReturnTable::from_csv_path(path)?))
    }

    /// Create runner with a pre-built table and default input bounds
    pub fn with_table(table: ReturnTable) -> Self {
        Self {
            calculator: ProjectionCalculator::new(table, CalculatorConfig::default()),
        }
    }

    /// Run a single projection, including the growth series
    pub fn run(&self, request: &ProjectionRequest, current_year: i32) -> Result<ProjectionResult> {
        self.calculator.project(request, current_year, true)
    }

    /// Run many requests, preserving input order. Fails on the first invalid request.
    pub fn run_batch(&self, requests: &[ProjectionRequest], current_year: i32) -> Result<Vec<ProjectionResult>> {
        requests
            .par_iter()
            .map(|request| self.calculator.project(request, current_year, false))
            .collect()
    }

    /// Project the same principal from every year in the table, ascending by year
    pub fn run_all_years(&self, principal: f64, current_year: i32) -> Result<Vec<ProjectionResult>> {
        let requests: Vec<ProjectionRequest> = self
            .calculator
            .table()
            .years()
            .map(|year| ProjectionRequest::new(principal, year))
            .collect();

        log::info!("Projecting ${:.2} from {} start years", principal, requests.len());
        self.run_batch(&requests, current_year)
    }

    pub fn calculator(&self) -> &ProjectionCalculator {
        &self.calculator
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
