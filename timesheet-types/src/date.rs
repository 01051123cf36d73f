//! Date parsing results.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// What a date parser produced for an input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// A fully resolved instant.
    Date(DateTime<Utc>),
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    /// The parser did not understand the input.
    Unparsed(String),
}

/// The result of resolving a date string.
///
/// Serializes untagged: an RFC 3339 string for dates, the raw input
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParsedDate {
    Date(DateTime<Utc>),
    /// Input passed through unchanged because it could not be resolved.
    Raw(String),
}

impl ParsedDate {
    /// Returns the resolved date, if any.
    #[must_use]
    pub const fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Date(d) => Some(d),
            Self::Raw(_) => None,
        }
    }

    /// Returns true if the input resolved to a date.
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }
}

impl fmt::Display for ParsedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => f.write_str(&d.to_rfc3339()),
            Self::Raw(s) => f.write_str(s),
        }
    }
}

impl From<DateTime<Utc>> for ParsedDate {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}
