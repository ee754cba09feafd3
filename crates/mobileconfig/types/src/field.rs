//! Tagged field values and the kinds fields are declared to hold.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind a field is declared to hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Boolean,
    Integer,
    Data,
    Date,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Boolean => write!(f, "boolean"),
            Self::Integer => write!(f, "integer"),
            Self::Data => write!(f, "data"),
            Self::Date => write!(f, "date"),
        }
    }
}

/// A loosely-typed caller-supplied value, tagged with its kind.
///
/// Profile construction accepts dynamic input (organization names, flags,
/// binary blobs) from callers that may not control their data's types.
/// `FieldValue` carries that input to the [`crate::validate`] checks, which
/// accept or reject it against the declared [`FieldKind`].
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Boolean(bool),
    Integer(i64),
    Data(Vec<u8>),
    Date(DateTime<Utc>),
}

impl FieldValue {
    /// The kind this value actually holds.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Boolean(_) => FieldKind::Boolean,
            Self::Integer(_) => FieldKind::Integer,
            Self::Data(_) => FieldKind::Data,
            Self::Date(_) => FieldKind::Date,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Data(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_reporting() {
        assert_eq!(FieldValue::from("a").kind(), FieldKind::Text);
        assert_eq!(FieldValue::from(true).kind(), FieldKind::Boolean);
        assert_eq!(FieldValue::from(7i64).kind(), FieldKind::Integer);
        assert_eq!(FieldValue::from(vec![0u8]).kind(), FieldKind::Data);
        assert_eq!(FieldValue::from(Utc::now()).kind(), FieldKind::Date);
    }

    #[test]
    fn test_kind_display_is_lowercase() {
        assert_eq!(FieldKind::Text.to_string(), "text");
        assert_eq!(FieldKind::Boolean.to_string(), "boolean");
    }
}
