//! Value projection for a historical investment

mod calculator;
mod series;

pub use calculator::{current_year, CalculatorConfig, ProjectionCalculator, ProjectionRequest};
pub use series::{round_to_cents, GrowthPoint, ProjectionResult, ProjectionSummary};
