//! Domain logic for the tinfoil boat entry form.
//!
//! Everything in this crate is pure: record validation, the least-squares
//! trend fit, and the chart model that the API layer turns into HTML.

pub mod chart;
pub mod error;
pub mod plot;
pub mod record;
pub mod regression;
pub mod validation;
