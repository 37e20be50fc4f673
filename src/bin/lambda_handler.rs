//! AWS Lambda handler for the what-if calculator
//!
//! GET returns the input form options; POST accepts the current inputs as JSON
//! and returns the rendered page (headline, caption, chart points, or warning).
//!
//! Supports Lambda Function URLs for direct HTTP access.

use std::sync::Arc;

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};
use sp500_whatif::{
    projection::{current_year, CalculatorConfig},
    render::{render, InputOptions, RenderState},
    ProjectionCalculator,
};

/// Input state posted by the page
#[derive(Debug, Deserialize)]
pub struct WhatIfRequest {
    /// Amount invested (default: 1000)
    #[serde(default = "default_amount")]
    pub amount: f64,

    /// Year of investment (default: earliest year in the table)
    #[serde(default)]
    pub year: Option<i32>,

    /// Whether to include the growth chart (default: true)
    #[serde(default = "default_show_chart")]
    pub show_chart: bool,

    /// Override for the current year
    #[serde(default)]
    pub as_of_year: Option<i32>,
}

fn default_amount() -> f64 { CalculatorConfig::default().default_amount }
fn default_show_chart() -> bool { CalculatorConfig::default().show_chart }

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn cors(builder: lambda_http::http::response::Builder) -> lambda_http::http::response::Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    let response = cors(Response::builder())
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(body)?))?;
    Ok(response)
}

fn error_response(status: u16, message: String) -> Result<Response<Body>, Error> {
    json_response(status, &ErrorBody { error: message })
}

/// Lambda handler function
async fn handler(calculator: Arc<ProjectionCalculator>, event: Request) -> Result<Response<Body>, Error> {
    match event.method().as_str() {
        // CORS preflight
        "OPTIONS" => return Ok(cors(Response::builder()).status(200).body(Body::Empty)?),
        "GET" => return json_response(200, &InputOptions::from_calculator(&calculator)),
        _ => {}
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: WhatIfRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => return error_response(400, format!("Invalid JSON: {}", e)),
    };

    let state = RenderState {
        amount: request.amount,
        year: request.year.unwrap_or_else(|| calculator.table().first_year()),
        show_chart: request.show_chart,
    };
    let today = request.as_of_year.unwrap_or_else(current_year);

    match render(&calculator, &state, today) {
        Ok(output) => json_response(200, &output),
        Err(e) if e.is_invalid_input() => error_response(400, e.to_string()),
        Err(e) => {
            log::error!("Render failed: {}", e);
            error_response(500, e.to_string())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let calculator = Arc::new(ProjectionCalculator::sp500());
    run(service_fn(move |event: Request| {
        let calculator = Arc::clone(&calculator);
        async move { handler(calculator, event).await }
    }))
    .await
}
