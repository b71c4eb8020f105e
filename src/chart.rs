//! View count line chart geometry.
//!
//! Maps a series of monthly view counts onto a 100x100 SVG viewBox. The x
//! axis spreads points evenly from 0 to 100; the y axis maps the lowest
//! value to 90 and the highest to 10, leaving a margin for point markers.

use maud::Markup;
use serde::Deserialize;
use std::path::Path;

use crate::components::chart::line_chart;
use crate::error::{Error, Result};

/// Top of the plotting band in viewBox units.
const PLOT_TOP: f64 = 10.0;
/// Height of the plotting band in viewBox units.
const PLOT_HEIGHT: f64 = 80.0;

/// One month of views.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataPoint {
    pub month: String,
    pub views: f64,
}

impl DataPoint {
    pub fn new(month: impl Into<String>, views: f64) -> Self {
        Self {
            month: month.into(),
            views,
        }
    }
}

/// Accepted series file layouts.
#[derive(Deserialize)]
#[serde(untagged)]
enum SeriesFile {
    Points(Vec<DataPoint>),
    Dashboard {
        #[serde(rename = "viewsOverTime")]
        views_over_time: Vec<DataPoint>,
    },
}

/// Line chart over a view count series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineChart {
    points: Vec<DataPoint>,
}

impl LineChart {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    /// Parses a series from a bare array or a `{ "viewsOverTime": [...] }`
    /// dashboard object.
    ///
    /// # Errors
    ///
    /// Returns error if JSON matches neither layout
    pub fn from_json(json: &str) -> Result<Self> {
        let points = match serde_json::from_str::<SeriesFile>(json)? {
            SeriesFile::Points(points) => points,
            SeriesFile::Dashboard { views_over_time } => views_over_time,
        };
        tracing::debug!(points = points.len(), "Parsed chart series");
        Ok(Self::new(points))
    }

    /// Reads and parses series file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// ViewBox coordinates of every point.
    ///
    /// A single point sits at x = 0. A flat series sits at mid height.
    pub fn coordinates(&self) -> Vec<(f64, f64)> {
        let (min, max) = self
            .points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.views), hi.max(p.views))
            });
        let range = max - min;
        let last = self.points.len().saturating_sub(1);

        self.points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let x = if last == 0 {
                    0.0
                } else {
                    index as f64 / last as f64 * 100.0
                };
                let y = if range > 0.0 {
                    PLOT_TOP + PLOT_HEIGHT - (point.views - min) / range * PLOT_HEIGHT
                } else {
                    PLOT_TOP + PLOT_HEIGHT / 2.0
                };
                (x, y)
            })
            .collect()
    }

    /// SVG path data through all points, empty for an empty series.
    pub fn path(&self) -> String {
        self.coordinates()
            .iter()
            .enumerate()
            .map(|(index, (x, y))| {
                let command = if index == 0 { 'M' } else { 'L' };
                format!("{command} {x} {y}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Path closed along the bottom edge for the shaded area.
    pub fn area_path(&self) -> String {
        if self.points.is_empty() {
            return String::new();
        }
        format!("{} L 100 100 L 0 100 Z", self.path())
    }

    /// Renders the chart as an SVG with month labels.
    pub fn svg(&self) -> Markup {
        line_chart(self)
    }
}
