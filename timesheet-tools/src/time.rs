use serde_json::Value;
use timesheet_types::{Error, Result};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Largest accepted input: beyond this the total seconds no longer fit
/// exactly in an `f64` and the minutes would be noise.
pub const MAX_HOURS: f64 = (1u64 << 53) as f64 / SECONDS_PER_HOUR;

/// Formats fractional hours as an `HH:MM` clock string.
///
/// Seconds are truncated, never rounded. Hours below 10 are zero-padded;
/// larger values print every digit (`123:45`). Negative, non-finite and
/// above-[`MAX_HOURS`] input is rejected.
pub fn format_time(hours: f64) -> Result<String> {
    if !hours.is_finite() || hours < 0.0 || hours > MAX_HOURS {
        return Err(Error::InvalidHours(hours));
    }

    let total_secs = hours * SECONDS_PER_HOUR;
    let h = (total_secs / 3600.0).floor() as u64;
    let m = (total_secs / 60.0).floor() as u64 % 60;

    Ok(format!("{h:02}:{m:02}"))
}

/// Like [`format_time`], for an hours value read straight out of a record.
pub fn format_time_value(value: &Value) -> Result<String> {
    let hours = value.as_f64().ok_or_else(|| Error::InvalidField {
        field: "hours".to_string(),
        expected: "a number",
    })?;
    format_time(hours)
}
