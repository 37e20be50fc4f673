//! Presentation model: turns one set of user inputs into what the page shows
//!
//! Every interaction re-runs [`render`] from scratch; nothing is kept between calls.

mod chart;
mod format;

pub use chart::{GrowthChart, DEFAULT_CHART_HEIGHT};
pub use format::{format_currency, format_multiplier};

use serde::{Deserialize, Serialize};

use crate::error::{CalculatorError, Result};
use crate::projection::{CalculatorConfig, ProjectionCalculator, ProjectionRequest, ProjectionResult};

pub const PAGE_TITLE: &str = "What If I Invested in the S&P 500?";
pub const PAGE_SUBTITLE: &str = "See how much your investment would be worth today.";
pub const UNKNOWN_YEAR_WARNING: &str = "Data not available for that year.";

/// Current values of the input widgets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    pub amount: f64,
    pub year: i32,
    pub show_chart: bool,
}

impl RenderState {
    /// Widget defaults: configured amount, earliest table year, configured chart toggle
    pub fn initial(calculator: &ProjectionCalculator) -> Self {
        let config = calculator.config();
        Self {
            amount: config.default_amount,
            year: calculator.table().first_year(),
            show_chart: config.show_chart,
        }
    }
}

/// Everything the page displays for one state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOutput {
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<GrowthChart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ProjectionResult>,
}

impl RenderOutput {
    fn page() -> Self {
        Self {
            title: PAGE_TITLE.to_string(),
            subtitle: PAGE_SUBTITLE.to_string(),
            headline: None,
            caption: None,
            chart: None,
            warning: None,
            result: None,
        }
    }

    pub fn is_warning(&self) -> bool {
        self.warning.is_some()
    }
}

/// Input widget options a front end needs to draw the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputOptions {
    pub amount_min: f64,
    pub amount_default: f64,
    pub amount_step: f64,
    /// Selectable start years, ascending
    pub years: Vec<i32>,
    pub show_chart_default: bool,
}

impl InputOptions {
    pub fn from_calculator(calculator: &ProjectionCalculator) -> Self {
        let CalculatorConfig { min_amount, default_amount, amount_step, show_chart } = calculator.config().clone();
        Self {
            amount_min: min_amount,
            amount_default: default_amount,
            amount_step,
            years: calculator.table().years().collect(),
            show_chart_default: show_chart,
        }
    }
}

/// Headline sentence for a projected value
pub fn headline(result: &ProjectionResult) -> String {
    format!("Your investment would be worth: ${}", format_currency(result.current_value))
}

/// Caption citing the multiplier and start year
pub fn caption(result: &ProjectionResult) -> String {
    format!(
        "Based on an approximate total return multiplier of {} since {}.",
        format_multiplier(result.multiplier),
        result.start_year
    )
}

/// Compute the page for one input state.
///
/// An unknown year yields a warning page with no headline or chart. Only an
/// out-of-range amount or as-of year is returned as an error.
pub fn render(calculator: &ProjectionCalculator, state: &RenderState, current_year: i32) -> Result<RenderOutput> {
    let request = ProjectionRequest::new(state.amount, state.year);
    let mut output = RenderOutput::page();

    match calculator.project(&request, current_year, state.show_chart) {
        Ok(mut result) => {
            output.headline = Some(headline(&result));
            output.caption = Some(caption(&result));
            output.chart = result.growth_series.take().map(GrowthChart::new);
            output.result = Some(result);
        }
        Err(CalculatorError::UnknownYear(year)) => {
            log::warn!("No return multiplier for {}", year);
            output.warning = Some(UNKNOWN_YEAR_WARNING.to_string());
        }
        Err(e) => return Err(e),
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(amount: f64, year: i32, show_chart: bool) -> RenderState {
        RenderState { amount, year, show_chart }
    }

    #[test]
    fn test_render_year_2000() {
        let calc = ProjectionCalculator::sp500();
        let output = render(&calc, &state(1000.0, 2000, true), 2023).unwrap();

        assert_eq!(output.headline.as_deref(), Some("Your investment would be worth: $7,540.00"));
        assert_eq!(
            output.caption.as_deref(),
            Some("Based on an approximate total return multiplier of 7.54 since 2000.")
        );
        assert!(output.warning.is_none());

        let chart = output.chart.unwrap();
        assert_eq!(chart.points.len(), 24);
        assert_eq!(chart.points.first().unwrap().year, 2000);
        assert_eq!(chart.points.last().unwrap().year, 2023);
    }

    #[test]
    fn test_render_year_2023() {
        let calc = ProjectionCalculator::sp500();
        let output = render(&calc, &state(500.0, 2023, true), 2023).unwrap();

        assert_eq!(output.headline.as_deref(), Some("Your investment would be worth: $375.00"));
        assert_eq!(output.chart.unwrap().points.len(), 1);
    }

    #[test]
    fn test_render_without_chart() {
        let calc = ProjectionCalculator::sp500();
        let output = render(&calc, &state(1000.0, 2020, false), 2023).unwrap();

        assert!(output.headline.is_some());
        assert!(output.chart.is_none());
        assert_eq!(
            output.caption.as_deref(),
            Some("Based on an approximate total return multiplier of 1.0 since 2020.")
        );
    }

    #[test]
    fn test_render_unknown_year_warns() {
        let calc = ProjectionCalculator::sp500();

        for amount in [100.0, 1000.0, 250_000.0] {
            let output = render(&calc, &state(amount, 1999, true), 2023).unwrap();
            assert!(output.is_warning());
            assert_eq!(output.warning.as_deref(), Some(UNKNOWN_YEAR_WARNING));
            assert!(output.headline.is_none());
            assert!(output.chart.is_none());
            assert!(output.result.is_none());
        }
    }

    #[test]
    fn test_render_invalid_amount_is_error() {
        let calc = ProjectionCalculator::sp500();
        let err = render(&calc, &state(50.0, 2010, true), 2023).unwrap_err();
        assert!(matches!(err, CalculatorError::InvalidAmount { .. }));
    }

    #[test]
    fn test_render_far_future_as_of_is_error() {
        let calc = ProjectionCalculator::sp500();
        let err = render(&calc, &state(1000.0, 2000, true), i32::MAX).unwrap_err();
        assert!(matches!(err, CalculatorError::InvalidAsOfYear { .. }));
    }

    #[test]
    fn test_render_is_idempotent() {
        let calc = ProjectionCalculator::sp500();
        let s = state(1500.0, 2008, true);
        assert_eq!(render(&calc, &s, 2026).unwrap(), render(&calc, &s, 2026).unwrap());
    }

    #[test]
    fn test_initial_state_and_input_options() {
        let calc = ProjectionCalculator::sp500();

        let initial = RenderState::initial(&calc);
        assert_eq!(initial, state(1000.0, 2000, true));

        let inputs = InputOptions::from_calculator(&calc);
        assert_eq!(inputs.amount_min, 100.0);
        assert_eq!(inputs.amount_step, 100.0);
        assert_eq!(inputs.years.len(), 24);
        assert!(inputs.years.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_warning_serializes_without_headline() {
        let calc = ProjectionCalculator::sp500();
        let output = render(&calc, &state(1000.0, 1999, true), 2023).unwrap();
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["warning"], UNKNOWN_YEAR_WARNING);
        assert!(json.get("headline").is_none());
        assert!(json.get("chart").is_none());
    }
}
