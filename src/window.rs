//! Date handling shared by the handlers.
//!
//! Dates travel as `YYYY-MM-DD` strings end to end; they are only parsed to
//! do calendar arithmetic or to check a client-supplied bound.

use chrono::{Duration, NaiveDate};

use crate::error::{Result, SurfsUpError};

/// Storage and wire format for calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the "last 12 months" window, in days
pub const WINDOW_DAYS: i64 = 365;

/// Inclusive lower bound of the window ending at `latest`: exactly 365 days
/// earlier, not one calendar year.
pub fn window_start(latest: &str) -> Result<String> {
    let latest_date = NaiveDate::parse_from_str(latest, DATE_FORMAT).map_err(|e| {
        SurfsUpError::MalformedDataset {
            message: format!("latest observation date {latest:?} is not YYYY-MM-DD: {e}"),
        }
    })?;

    let start = latest_date
        .checked_sub_signed(Duration::days(WINDOW_DAYS))
        .ok_or_else(|| SurfsUpError::MalformedDataset {
            message: format!("latest observation date {latest:?} is out of range"),
        })?;

    Ok(start.format(DATE_FORMAT).to_string())
}

/// Check that a path segment is exactly a `YYYY-MM-DD` calendar date.
///
/// The value must survive a parse/format round trip, so `2017-1-5` and
/// `2017-02-30` are both rejected.
pub fn validate_date(param: &str, value: &str) -> Result<()> {
    let parsed = NaiveDate::parse_from_str(value, DATE_FORMAT).ok();

    match parsed {
        Some(date) if date.format(DATE_FORMAT).to_string() == value => Ok(()),
        _ => Err(SurfsUpError::InvalidParameter {
            param: param.to_string(),
            message: format!("{value:?} is not a YYYY-MM-DD date"),
        }),
    }
}
