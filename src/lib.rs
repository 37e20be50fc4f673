//! S&P 500 "what if I invested" calculator
//!
//! This library provides:
//! - A year-indexed table of total-return multipliers (built in or loaded from CSV)
//! - Present-value projection of a principal invested in a given year
//! - A linear growth series from the start year to the current year for charting
//! - A pure render model shared by the CLI and the HTTP handler
//! - Batch comparison across all start years

pub mod error;
pub mod returns;
pub mod projection;
pub mod render;
pub mod scenario;

// Re-export commonly used types
pub use error::{CalculatorError, Result};
pub use returns::ReturnTable;
pub use projection::{ProjectionCalculator, ProjectionRequest, ProjectionResult, GrowthPoint};
pub use render::{render, RenderOutput, RenderState};
pub use scenario::ScenarioRunner;
