//! Plotly rendering of a [`ChartArtifact`].
//!
//! Produces either a standalone HTML document (the chart file written on
//! every render) or an inline fragment for embedding in the form page.

use plotly::color::{NamedColor, Rgba};
use plotly::common::{DashType, Fill, HoverInfo, Line, Marker, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Plot, Scatter};

use crate::chart::{ChartArtifact, MARKER_SIZE, TREND_LINE_WIDTH, X_AXIS_LABEL, Y_AXIS_LABEL};

/// Element id of the chart `<div>` on the form page.
pub const CHART_DIV_ID: &str = "scatter_plot";

/// Build a plotly figure from the chart model.
///
/// Trace order is fixed: entries, then trend line, then confidence band.
pub fn to_plot(chart: &ChartArtifact) -> Plot {
    let mut plot = Plot::new();

    if !chart.points.is_empty() {
        let xs: Vec<i64> = chart.points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = chart.points.iter().map(|p| p.y).collect();
        let hover: Vec<String> = chart
            .points
            .iter()
            .map(|p| {
                format!(
                    "Last Name={}<br>First Name={}",
                    hover_escape(&p.last_name),
                    hover_escape(&p.first_name)
                )
            })
            .collect();

        let entries = Scatter::new(xs, ys)
            .name("Entries")
            .mode(Mode::Markers)
            .marker(Marker::new().size(MARKER_SIZE))
            .text_array(hover)
            .hover_info(HoverInfo::All)
            .show_legend(false);
        plot.add_trace(entries);
    }

    if let Some(trend) = &chart.trend {
        let line = Scatter::new(trend.xs.clone(), trend.ys.clone())
            .name("OLS trendline")
            .mode(Mode::Lines)
            .line(
                Line::new()
                    .color(NamedColor::Red)
                    .dash(DashType::Dash)
                    .width(TREND_LINE_WIDTH),
            )
            .show_legend(false);
        plot.add_trace(line);
    }

    if let Some(band) = &chart.band {
        let (xs, ys) = band.outline();
        let area = Scatter::new(xs, ys)
            .name(format!("{:.0}% confidence", band.level * 100.0).as_str())
            .mode(Mode::Lines)
            .fill(Fill::ToSelf)
            .fill_color(Rgba::new(0, 200, 255, 0.25))
            .line(Line::new().dash(DashType::Dash).width(TREND_LINE_WIDTH))
            .hover_info(HoverInfo::Skip)
            .show_legend(false);
        plot.add_trace(area);
    }

    let layout = Layout::new()
        .title(Title::with_text(chart.title.as_str()))
        .x_axis(
            Axis::new()
                .title(Title::with_text(X_AXIS_LABEL))
                .visible(chart.axes_visible),
        )
        .y_axis(
            Axis::new()
                .title(Title::with_text(Y_AXIS_LABEL))
                .visible(chart.axes_visible),
        );
    plot.set_layout(layout);

    plot
}

/// Names are user input and end up inside an inline `<script>`; keep them
/// from closing the tag or injecting hover markup. plotly.js decodes these
/// entities when drawing the label.
fn hover_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Self-contained HTML document for the chart file.
pub fn standalone_html(chart: &ChartArtifact) -> String {
    to_plot(chart).to_html()
}

/// `<div>` + `<script>` fragment for the form page. Requires plotly.js to
/// be loaded by the surrounding document.
pub fn inline_html(chart: &ChartArtifact) -> String {
    to_plot(chart).to_inline_html(Some(CHART_DIV_ID))
}
