//! HTML pages rendered with askama (auto-escaped).

use askama::Template;
use boatlog_core::plot;

use crate::controller::{EntryFields, FormOutcome};

/// plotly.js bundle matching the figures produced by `boatlog_core::plot`.
pub const PLOTLY_JS_URL: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

/// The entry form with its error region and chart.
#[derive(Template)]
#[template(path = "form.html")]
pub struct FormPage<'a> {
    pub last_name: &'a str,
    pub first_name: &'a str,
    pub num_pennies: &'a str,
    pub boat_volume: &'a str,
    pub error: &'a str,
    pub chart_html: String,
    pub plotly_js_url: &'a str,
}

impl<'a> FormPage<'a> {
    /// Page for a controller outcome, keeping the submitted values in the
    /// inputs.
    pub fn new(fields: &'a EntryFields, outcome: &'a FormOutcome) -> Self {
        Self {
            last_name: fields.last_name.as_deref().unwrap_or_default(),
            first_name: fields.first_name.as_deref().unwrap_or_default(),
            num_pennies: fields.num_pennies.as_deref().unwrap_or_default(),
            boat_volume: fields.boat_volume.as_deref().unwrap_or_default(),
            error: &outcome.error,
            chart_html: plot::inline_html(&outcome.chart),
            plotly_js_url: PLOTLY_JS_URL,
        }
    }
}

/// Generic failure page for store and internal errors.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage<'a> {
    pub code: &'a str,
    pub message: &'a str,
}
