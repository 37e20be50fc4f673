//! Projection output structures

use serde::{Deserialize, Serialize};

/// Round a dollar amount to 2 decimal places, half away from zero
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One point of the growth series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub year: i32,
    /// Interpolated value, not rounded
    pub value: f64,
}

/// Complete projection result for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub principal: f64,
    pub start_year: i32,
    pub end_year: i32,
    pub multiplier: f64,

    /// principal * multiplier, before rounding
    pub unrounded_value: f64,

    /// Headline value, rounded to cents
    pub current_value: f64,

    /// Yearly points from start_year to end_year, when requested
    pub growth_series: Option<Vec<GrowthPoint>>,
}

impl ProjectionResult {
    /// Number of calendar years covered, counting both ends
    pub fn years_held(&self) -> u32 {
        (self.end_year - self.start_year + 1).max(1) as u32
    }

    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary {
            start_year: self.start_year,
            years_held: self.years_held(),
            multiplier: self.multiplier,
            principal: self.principal,
            current_value: self.current_value,
            gain: round_to_cents(self.unrounded_value - self.principal),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub start_year: i32,
    pub years_held: u32,
    pub multiplier: f64,
    pub principal: f64,
    pub current_value: f64,
    pub gain: f64,
}
