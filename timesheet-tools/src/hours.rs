use crate::validate_get;
use serde_json::Value;
use timesheet_types::{Error, Result};

/// Returns the effective hours of a day entry: the larger of `hours` and
/// `hours_with_timer`.
///
/// `hours` is required. `hours_with_timer` counts as zero when absent or
/// falsy (`null`, `false`, `0`, `""`), so the result is never below `hours`.
/// Any other non-numeric timer value is rejected.
pub fn get_hours(resource: &Value) -> Result<f64> {
    let regular = validate_get(resource, "hours", None)?
        .as_f64()
        .ok_or_else(|| invalid("hours"))?;

    let with_timer = match resource.get("hours_with_timer") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => 0.0,
        Some(Value::String(s)) if s.is_empty() => 0.0,
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| invalid("hours_with_timer"))?,
        Some(_) => return Err(invalid("hours_with_timer")),
    };

    Ok(regular.max(with_timer))
}

fn invalid(field: &str) -> Error {
    Error::InvalidField {
        field: field.to_string(),
        expected: "a number",
    }
}
