use serde_json::Value;
use timesheet_types::{Error, Result};

/// Returns `obj[field]`, or fails with [`Error::MissingField`] when the
/// field is absent.
///
/// `message` replaces the default `Param <field> does not exist.` text; an
/// empty message counts as none. A field that is present but `null` is
/// returned as-is. Non-object values have no fields.
pub fn validate_get<'a>(obj: &'a Value, field: &str, message: Option<&str>) -> Result<&'a Value> {
    match obj.get(field) {
        Some(value) => Ok(value),
        None => Err(match message.filter(|m| !m.is_empty()) {
            Some(message) => Error::MissingField {
                field: field.to_string(),
                message: message.to_string(),
            },
            None => Error::missing_field(field),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_message_falls_back_to_default() {
        let err = validate_get(&json!({}), "a", Some("")).unwrap_err();
        assert_eq!(err.to_string(), "Param a does not exist.");
    }

    #[test]
    fn array_has_no_named_fields() {
        assert!(validate_get(&json!([1, 2]), "0", None).is_err());
    }
}
