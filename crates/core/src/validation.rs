//! Form field validation.
//!
//! Turns the four raw form inputs into a [`BoatRecord`]. Rules are checked
//! in order and the first failure is returned:
//!
//! 1. every field present and non-empty ([`ValidationError::MissingField`])
//! 2. pennies parse as an integer, volume as a finite float
//!    ([`ValidationError::ParseError`])
//! 3. both numbers strictly positive ([`ValidationError::OutOfRange`])

use crate::error::ValidationError;
use crate::record::BoatRecord;

/// Validate raw form input and build a record.
///
/// Name fields are passed through unmodified. Numeric fields may carry
/// surrounding whitespace.
///
/// # Examples
///
/// ```
/// use boatlog_core::error::ValidationError;
/// use boatlog_core::validation::validate;
///
/// let record = validate(Some("Smith"), Some("Jane"), Some("5"), Some("12.3")).unwrap();
/// assert_eq!(record.penny_count, 5);
///
/// let err = validate(Some("Smith"), Some("Jane"), None, Some("12.3")).unwrap_err();
/// assert_eq!(err, ValidationError::MissingField);
/// ```
pub fn validate(
    last_name: Option<&str>,
    first_name: Option<&str>,
    penny_count_raw: Option<&str>,
    boat_volume_raw: Option<&str>,
) -> Result<BoatRecord, ValidationError> {
    let (Some(last_name), Some(first_name), Some(pennies), Some(volume)) = (
        non_empty(last_name),
        non_empty(first_name),
        non_empty(penny_count_raw),
        non_empty(boat_volume_raw),
    ) else {
        return Err(ValidationError::MissingField);
    };

    let penny_count: i64 = pennies
        .trim()
        .parse()
        .map_err(|_| ValidationError::ParseError)?;
    let boat_volume: f64 = volume
        .trim()
        .parse()
        .map_err(|_| ValidationError::ParseError)?;
    if !boat_volume.is_finite() {
        return Err(ValidationError::ParseError);
    }

    if penny_count <= 0 || boat_volume <= 0.0 {
        return Err(ValidationError::OutOfRange);
    }

    Ok(BoatRecord {
        last_name: last_name.to_string(),
        first_name: first_name.to_string(),
        penny_count,
        boat_volume,
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
