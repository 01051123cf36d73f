//! Identifier values read out of nested records.
//!
//! Ids arrive as JSON integers or strings depending on the resource. Both
//! are accepted and ordered so a mixed list still sorts deterministically:
//! integers compare numerically, strings by byte order, and every integer
//! sorts before every string.

use crate::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// An identifier extracted from a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    /// Integer id, the common case for API resources.
    Int(i64),
    /// String id (slugs, UUIDs, codes).
    Str(String),
}

impl Identifier {
    /// Converts a JSON value into an identifier.
    ///
    /// Floats, booleans, null, arrays, objects and integers outside the
    /// `i64` range are rejected.
    pub fn from_json(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .ok_or_else(|| Error::InvalidIdentifier(n.to_string())),
            Value::String(s) => Ok(Self::Str(s.clone())),
            other => Err(Error::InvalidIdentifier(other.to_string())),
        }
    }

    /// Converts the identifier back into a JSON value.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Int(i) => Value::from(*i),
            Self::Str(s) => Value::from(s.as_str()),
        }
    }

    /// Returns the integer id, if this is one.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Str(_) => None,
        }
    }

    /// Returns the string id, if this is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Str(s) => Some(s),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl TryFrom<&Value> for Identifier {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_json(value)
    }
}
