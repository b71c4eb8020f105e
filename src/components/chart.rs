//! Dashboard line chart component

use maud::{Markup, html};

use crate::chart::LineChart;

const LINE_COLOR: &str = "#3B82F6";
const GRID_COLOR: &str = "rgba(75, 85, 99, 0.3)";
const GRID_LINES: [u32; 5] = [0, 25, 50, 75, 100];

/// Renders views line chart with grid, shaded area, markers and labels
///
/// The SVG stretches to its container (`preserveAspectRatio="none"`), so
/// month labels sit in a separate row below it rather than inside the
/// viewBox.
pub fn line_chart(chart: &LineChart) -> Markup {
    let line_path = chart.path();
    let area_path = chart.area_path();

    html! {
        div class="line-chart relative h-64 w-full" {
            svg xmlns="http://www.w3.org/2000/svg" class="w-full h-full" viewBox="0 0 100 100" preserveAspectRatio="none" {
                defs {
                    linearGradient id="gradient" x1="0%" y1="0%" x2="0%" y2="100%" {
                        stop offset="0%" stop-color=(LINE_COLOR) stop-opacity="0.3" {}
                        stop offset="100%" stop-color=(LINE_COLOR) stop-opacity="0" {}
                    }
                }
                @for y in GRID_LINES {
                    line x1="0" y1=(y) x2="100" y2=(y) stroke=(GRID_COLOR) stroke-width="0.2" {}
                }
                @if !line_path.is_empty() {
                    path class="chart-area" d=(area_path) fill="url(#gradient)" opacity="0.2" {}
                    path class="chart-line" d=(line_path) fill="none" stroke=(LINE_COLOR) stroke-width="0.8" stroke-linecap="round" {}
                }
                @for (x, y) in chart.coordinates() {
                    circle cx=(x.to_string()) cy=(y.to_string()) r="1" fill=(LINE_COLOR) {}
                }
            }
            div class="chart-labels flex justify-between text-xs text-gray-400 mt-2" {
                @for point in chart.points() {
                    span { (point.month) }
                }
            }
        }
    }
}
