//! Parameter values and DQL literal rendering.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format used when a structured date/time value is rendered as a
/// DQL literal (`Y-m-d H:i:s`).
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A value that can be bound to a query parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// String value.
    String(String),
    /// Date/time value, rendered as `Y-m-d H:i:s` when inlined.
    DateTime(NaiveDateTime),
    /// JSON value.
    Json(serde_json::Value),
    /// List of values.
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// Check if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Coerce this value to a list.
    ///
    /// A list stays as-is; any scalar becomes a one-element list. This is
    /// the coercion membership predicates apply to their operand.
    pub fn into_list(self) -> Vec<ParamValue> {
        match self {
            Self::List(values) => values,
            other => vec![other],
        }
    }

    /// Render this value as an inline DQL literal.
    ///
    /// Strings are single-quoted with embedded quotes doubled; timestamps
    /// render quoted in `Y-m-d H:i:s` form; lists render comma-separated.
    pub fn to_literal(&self) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Bool(true) => "TRUE".to_string(),
            Self::Bool(false) => "FALSE".to_string(),
            Self::Int(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::String(s) => quote(s),
            Self::DateTime(t) => quote(&t.format(DATETIME_FORMAT).to_string()),
            Self::Json(v) => quote(&v.to_string()),
            Self::List(values) => values
                .iter()
                .map(ParamValue::to_literal)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Single-quote a string for inline use, doubling embedded quotes.
fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<NaiveDateTime> for ParamValue {
    fn from(v: NaiveDateTime) -> Self {
        Self::DateTime(v)
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(v: DateTime<Utc>) -> Self {
        Self::DateTime(v.naive_utc())
    }
}

impl From<serde_json::Value> for ParamValue {
    fn from(v: serde_json::Value) -> Self {
        Self::Json(v)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_value_from() {
        assert_eq!(ParamValue::from(42i32), ParamValue::Int(42));
        assert_eq!(ParamValue::from("hello"), ParamValue::String("hello".to_string()));
        assert_eq!(ParamValue::from(true), ParamValue::Bool(true));
        assert_eq!(ParamValue::from(None::<i64>), ParamValue::Null);
    }

    #[test]
    fn test_into_list_wraps_scalars() {
        assert_eq!(ParamValue::Int(1).into_list(), vec![ParamValue::Int(1)]);
        assert_eq!(
            ParamValue::from(vec![1i64, 2]).into_list(),
            vec![ParamValue::Int(1), ParamValue::Int(2)]
        );
    }

    #[test]
    fn test_literal_strings_quoted() {
        assert_eq!(ParamValue::from("abc").to_literal(), "'abc'");
        assert_eq!(ParamValue::from("it's").to_literal(), "'it''s'");
    }

    #[test]
    fn test_literal_scalars() {
        assert_eq!(ParamValue::Int(5).to_literal(), "5");
        assert_eq!(ParamValue::Bool(true).to_literal(), "TRUE");
        assert_eq!(ParamValue::Null.to_literal(), "NULL");
    }

    #[test]
    fn test_literal_datetime_format() {
        let t = NaiveDateTime::parse_from_str("2021-03-04 05:06:07", DATETIME_FORMAT).unwrap();
        assert_eq!(ParamValue::DateTime(t).to_literal(), "'2021-03-04 05:06:07'");
    }

    #[test]
    fn test_literal_list() {
        let v = ParamValue::from(vec!["a", "b"]);
        assert_eq!(v.to_literal(), "'a', 'b'");
    }
}
