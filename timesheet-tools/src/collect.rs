//! Id collection and re-keying over wrapped records.

use crate::validate_get;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use timesheet_types::{Error, Identifier, Result};
use tracing::debug;

/// Returns the record stored under `main_key` in a wrapper object.
fn nested<'a>(entry: &'a Value, main_key: &str) -> Result<&'a Value> {
    let record = validate_get(entry, main_key, None)?;
    if record.is_object() {
        Ok(record)
    } else {
        Err(Error::InvalidField {
            field: main_key.to_string(),
            expected: "an object",
        })
    }
}

/// Collects the distinct `index_key` values of the records nested under
/// `main_key`, sorted ascending.
///
/// The result does not depend on the order of `entries`. Integer ids sort
/// before string ids.
pub fn get_ids(entries: &[Value], main_key: &str, index_key: &str) -> Result<Vec<Identifier>> {
    let mut ids = BTreeSet::new();
    for entry in entries {
        let record = nested(entry, main_key)?;
        let id = Identifier::from_json(validate_get(record, index_key, None)?)?;
        ids.insert(id);
    }

    Ok(ids.into_iter().collect())
}

/// Re-keys the records nested under `main_key` by their `id` field,
/// dropping the wrapper.
///
/// When several records share an id the last one wins.
pub fn by_id(entries: &[Value], main_key: &str) -> Result<BTreeMap<Identifier, Value>> {
    let mut results = BTreeMap::new();
    for entry in entries {
        let record = nested(entry, main_key)?;
        let id = Identifier::from_json(validate_get(record, "id", None)?)?;
        if results.insert(id.clone(), record.clone()).is_some() {
            debug!(%id, main_key, "duplicate id, keeping later record");
        }
    }

    Ok(results)
}
