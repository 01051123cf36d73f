//! Stateless helpers for timesheet resources.
//!
//! Resources from the time-tracking API arrive as wrapper objects holding
//! the actual record under a resource-specific key (`client`, `project`,
//! `day_entry`, ...). The helpers here work directly on those
//! `serde_json::Value` wrappers:
//!
//! - [`format_time`]: fractional hours as an `HH:MM` clock string
//! - [`get_ids`]: unique, sorted identifiers from nested records
//! - [`by_id`]: nested records re-keyed by their `id`
//! - [`get_hours`]: the effective hours of a day entry
//! - [`date_from_string`]: date resolution through an injected [`DateParser`]
//! - [`validate_get`]: required-field lookup with a typed failure
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use timesheet_tools::{by_id, format_time, get_ids, Identifier};
//!
//! let entries = vec![
//!     json!({"client": {"id": 7, "name": "Acme"}}),
//!     json!({"client": {"id": 3, "name": "Globex"}}),
//! ];
//!
//! let ids = get_ids(&entries, "client", "id").unwrap();
//! assert_eq!(ids, vec![Identifier::Int(3), Identifier::Int(7)]);
//!
//! let clients = by_id(&entries, "client").unwrap();
//! assert_eq!(clients[&Identifier::Int(7)]["name"], "Acme");
//!
//! assert_eq!(format_time(1.5).unwrap(), "01:30");
//! ```

mod collect;
pub mod date;
mod hours;
mod time;
mod validate;

pub use collect::{by_id, get_ids};
pub use date::{date_from_string, DateParser, ParserConfig, StrToTime};
pub use hours::get_hours;
pub use time::{format_time, format_time_value, MAX_HOURS};
pub use validate::validate_get;

pub use timesheet_types::{Error, Identifier, ParseOutcome, ParsedDate, Result};
