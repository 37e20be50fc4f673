//! Projection calculator: multiplier lookup, headline value, and growth series

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::series::{round_to_cents, GrowthPoint, ProjectionResult};
use crate::error::{CalculatorError, Result};
use crate::returns::ReturnTable;

/// Current calendar year from the local clock
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// How far past the clock year an as-of override may reach
pub const MAX_YEARS_AHEAD: i32 = 1;

/// Input bounds and defaults for a calculator session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Smallest accepted principal
    pub min_amount: f64,

    /// Principal used when none is given
    pub default_amount: f64,

    /// Increment offered by input widgets
    pub amount_step: f64,

    /// Whether the growth chart is shown unless turned off
    pub show_chart: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            min_amount: 100.0,
            default_amount: 1000.0,
            amount_step: 100.0,
            show_chart: true,
        }
    }
}

/// A single "what if" question: invest `principal` in `start_year`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    pub principal: f64,
    pub start_year: i32,
}

impl ProjectionRequest {
    pub fn new(principal: f64, start_year: i32) -> Self {
        Self { principal, start_year }
    }
}

/// Stateless calculator over an immutable return table
#[derive(Debug, Clone)]
pub struct ProjectionCalculator {
    table: ReturnTable,
    config: CalculatorConfig,
}

impl ProjectionCalculator {
    pub fn new(table: ReturnTable, config: CalculatorConfig) -> Self {
        Self { table, config }
    }

    /// Calculator over the built-in S&P 500 table with default bounds
    pub fn sp500() -> Self {
        Self::new(ReturnTable::sp500_total_return(), CalculatorConfig::default())
    }

    pub fn table(&self) -> &ReturnTable {
        &self.table
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Multiplier for the start year, or `UnknownYear`
    pub fn lookup_multiplier(&self, year: i32) -> Result<f64> {
        match self.table.get(year) {
            Some(multiplier) => {
                log::debug!("Multiplier for {}: {}", year, multiplier);
                Ok(multiplier)
            }
            None => Err(CalculatorError::UnknownYear(year)),
        }
    }

    /// Headline value: principal * multiplier rounded to cents
    pub fn compute_current_value(principal: f64, multiplier: f64) -> f64 {
        round_to_cents(principal * multiplier)
    }

    /// Straight-line ramp from the first year's share of the final value up
    /// to the final value itself. Not a compounding curve.
    ///
    /// One point per year in `[start_year, current_year]`; when the clock is
    /// behind `start_year` the series is the single final point.
    pub fn compute_growth_series(
        principal: f64,
        multiplier: f64,
        start_year: i32,
        current_year: i32,
    ) -> Vec<GrowthPoint> {
        let end_year = current_year.max(start_year);
        let span = (i64::from(end_year) - i64::from(start_year) + 1) as f64;
        let final_value = principal * multiplier;

        (start_year..=end_year)
            .map(|year| {
                let elapsed = (i64::from(year) - i64::from(start_year) + 1) as f64;
                GrowthPoint {
                    year,
                    value: final_value * (elapsed / span),
                }
            })
            .collect()
    }

    /// Check the principal against the configured minimum
    pub fn validate(&self, request: &ProjectionRequest) -> Result<()> {
        if !request.principal.is_finite() || request.principal < self.config.min_amount {
            return Err(CalculatorError::InvalidAmount {
                amount: request.principal,
                minimum: self.config.min_amount,
            });
        }
        Ok(())
    }

    /// Range of years accepted as "today": from the table's first year up to
    /// the clock year plus `MAX_YEARS_AHEAD` (or the table's last year, if later)
    pub fn as_of_window(&self) -> (i32, i32) {
        let latest = (current_year() + MAX_YEARS_AHEAD).max(self.table.last_year());
        (self.table.first_year(), latest)
    }

    /// Check an as-of year against [`as_of_window`](Self::as_of_window)
    pub fn validate_as_of(&self, as_of_year: i32) -> Result<()> {
        let (earliest, latest) = self.as_of_window();
        if as_of_year < earliest || as_of_year > latest {
            return Err(CalculatorError::InvalidAsOfYear { year: as_of_year, earliest, latest });
        }
        Ok(())
    }

    /// Run a full projection for one request
    pub fn project(
        &self,
        request: &ProjectionRequest,
        current_year: i32,
        include_series: bool,
    ) -> Result<ProjectionResult> {
        // Unknown year is reported before a bad amount
        let multiplier = self.lookup_multiplier(request.start_year)?;
        self.validate(request)?;
        self.validate_as_of(current_year)?;

        let unrounded_value = request.principal * multiplier;
        if !unrounded_value.is_finite() {
            return Err(CalculatorError::InvalidAmount {
                amount: request.principal,
                minimum: self.config.min_amount,
            });
        }
        let growth_series = include_series.then(|| {
            Self::compute_growth_series(request.principal, multiplier, request.start_year, current_year)
        });

        Ok(ProjectionResult {
            principal: request.principal,
            start_year: request.start_year,
            end_year: current_year.max(request.start_year),
            multiplier,
            unrounded_value,
            current_value: Self::compute_current_value(request.principal, multiplier),
            growth_series,
        })
    }
}

impl Default for ProjectionCalculator {
    fn default() -> Self {
        Self::sp500()
    }
}
