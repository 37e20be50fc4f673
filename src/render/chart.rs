//! Growth chart model and terminal rendering

use serde::{Deserialize, Serialize};

use super::format::format_currency;
use crate::error::Result;
use crate::projection::GrowthPoint;

/// Default plot height in rows for terminal output
pub const DEFAULT_CHART_HEIGHT: usize = 12;

/// Width of one year column, wide enough for a 4-digit year plus a gap
const COLUMN_WIDTH: usize = 5;

/// Line chart of value by year, one marker per year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<GrowthPoint>,
}

impl GrowthChart {
    pub fn new(points: Vec<GrowthPoint>) -> Self {
        Self {
            title: "Investment Growth Over Time".to_string(),
            x_label: "Year".to_string(),
            y_label: "Value ($)".to_string(),
            points,
        }
    }

    /// Write the points as `year,value` CSV rows
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(["year", "value"])?;
        for point in &self.points {
            writer.write_record([point.year.to_string(), format!("{:.8}", point.value)])?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Plot the chart as text, `o` marking each year's value.
    ///
    /// The y axis runs from 0 to the largest value; rows are `height` tall
    /// (at least 2).
    pub fn to_text(&self, height: usize) -> String {
        let height = height.max(2);
        let max_value = self.points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
        let scale = if max_value > 0.0 { max_value } else { 1.0 };

        let rows: Vec<usize> = self
            .points
            .iter()
            .map(|p| ((p.value.max(0.0) / scale) * (height - 1) as f64).round() as usize)
            .collect();

        let top_label = format!("${}", format_currency(max_value));
        let label_width = top_label.len().max(self.y_label.len());

        let mut out = String::new();
        out.push_str(&format!("{:^width$}\n", self.title, width = label_width + 2 + self.points.len() * COLUMN_WIDTH));
        out.push_str(&format!("{:>width$}\n", self.y_label, width = label_width));

        for level in (0..height).rev() {
            let label = match level {
                l if l == height - 1 => top_label.as_str(),
                0 => "$0.00",
                _ => "",
            };
            out.push_str(&format!("{:>width$} |", label, width = label_width));

            for &row in &rows {
                let cell = if row == level { "o" } else { " " };
                out.push_str(&format!("{:^width$}", cell, width = COLUMN_WIDTH));
            }
            out.push('\n');
        }

        out.push_str(&format!("{:>width$} +{}\n", "", "-".repeat(self.points.len() * COLUMN_WIDTH), width = label_width));
        out.push_str(&format!("{:>width$}  ", "", width = label_width));
        for point in &self.points {
            out.push_str(&format!("{:^width$}", point.year, width = COLUMN_WIDTH));
        }
        out.push('\n');
        out.push_str(&format!("{:^width$}\n", self.x_label, width = label_width + 2 + self.points.len() * COLUMN_WIDTH));

        out
    }
}
