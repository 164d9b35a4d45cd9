//! Chart model for the pennies-versus-volume scatter plot.
//!
//! [`render`] is pure: it turns the full record set into a [`ChartArtifact`]
//! describing the points, the fitted trend line and its confidence band.
//! Drawing is left to [`crate::plot`].

use crate::record::BoatRecord;
use crate::regression::{fit_ols, OlsFit, DEFAULT_CONFIDENCE_LEVEL};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Title of the populated chart.
pub const CHART_TITLE: &str = "Number of Pennies Used vs. Boat Volume (cm^3)";

/// Title of the placeholder shown before any entry exists.
pub const EMPTY_CHART_TITLE: &str = "No data yet!";

/// X axis label (penny count column).
pub const X_AXIS_LABEL: &str = "Number of Pennies";

/// Y axis label (boat volume column).
pub const Y_AXIS_LABEL: &str = "Boat Volume";

/// Marker size shared by every point.
pub const MARKER_SIZE: usize = 15;

/// Trend line stroke width (the plotly default is 2).
pub const TREND_LINE_WIDTH: f64 = 4.0;

/// Number of x positions the confidence band is evaluated at.
pub const BAND_SAMPLES: usize = 50;

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

/// One plotted entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: i64,
    pub y: f64,
    pub last_name: String,
    pub first_name: String,
}

/// Fitted OLS line, sampled at the extremes of the data.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

/// Confidence band of the mean response around the trend line.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceBand {
    pub level: f64,
    pub xs: Vec<f64>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

impl ConfidenceBand {
    /// Closed polygon outline: upper edge left to right, then lower edge
    /// right to left. Suitable for a `toself` fill.
    pub fn outline(&self) -> (Vec<f64>, Vec<f64>) {
        let xs = self.xs.iter().chain(self.xs.iter().rev()).copied().collect();
        let ys = self
            .upper
            .iter()
            .chain(self.lower.iter().rev())
            .copied()
            .collect();
        (xs, ys)
    }
}

/// Everything needed to draw the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartArtifact {
    pub title: String,
    pub axes_visible: bool,
    pub points: Vec<ChartPoint>,
    pub trend: Option<TrendLine>,
    pub band: Option<ConfidenceBand>,
}

impl ChartArtifact {
    /// The "no data yet" placeholder: no series, hidden axes.
    pub fn placeholder() -> Self {
        Self {
            title: EMPTY_CHART_TITLE.to_string(),
            axes_visible: false,
            points: Vec::new(),
            trend: None,
            band: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Build the chart for the given records.
///
/// - No records: [`ChartArtifact::placeholder`].
/// - One record, or every record sharing one penny count: points only.
/// - Two or more distinct penny counts: points plus trend line.
/// - Three or more records with scatter around the line: also the band.
pub fn render(records: &[BoatRecord]) -> ChartArtifact {
    if records.is_empty() {
        return ChartArtifact::placeholder();
    }

    let points: Vec<ChartPoint> = records
        .iter()
        .map(|r| ChartPoint {
            x: r.penny_count,
            y: r.boat_volume,
            last_name: r.last_name.clone(),
            first_name: r.first_name.clone(),
        })
        .collect();

    let xs: Vec<f64> = points.iter().map(|p| p.x as f64).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();

    let (trend, band) = match fit_ols(&xs, &ys) {
        Some(fit) => {
            let (min_x, max_x) = x_extent(&xs);
            (
                Some(trend_line(&fit, min_x, max_x)),
                confidence_band(&fit, min_x, max_x),
            )
        }
        None => (None, None),
    };

    ChartArtifact {
        title: CHART_TITLE.to_string(),
        axes_visible: true,
        points,
        trend,
        band,
    }
}

fn x_extent(xs: &[f64]) -> (f64, f64) {
    xs.iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        })
}

fn trend_line(fit: &OlsFit, min_x: f64, max_x: f64) -> TrendLine {
    TrendLine {
        slope: fit.slope,
        intercept: fit.intercept,
        r_squared: fit.r_squared,
        xs: vec![min_x, max_x],
        ys: vec![fit.predict(min_x), fit.predict(max_x)],
    }
}

fn confidence_band(fit: &OlsFit, min_x: f64, max_x: f64) -> Option<ConfidenceBand> {
    // A perfect fit gives a zero-width band; nothing to draw.
    if fit.residual_std_error? == 0.0 {
        return None;
    }

    let step = (max_x - min_x) / (BAND_SAMPLES - 1) as f64;
    let mut xs = Vec::with_capacity(BAND_SAMPLES);
    let mut lower = Vec::with_capacity(BAND_SAMPLES);
    let mut upper = Vec::with_capacity(BAND_SAMPLES);
    for i in 0..BAND_SAMPLES {
        let x = min_x + step * i as f64;
        let (lo, hi) = fit.confidence_interval(x, DEFAULT_CONFIDENCE_LEVEL)?;
        xs.push(x);
        lower.push(lo);
        upper.push(hi);
    }

    Some(ConfidenceBand {
        level: DEFAULT_CONFIDENCE_LEVEL,
        xs,
        lower,
        upper,
    })
}
