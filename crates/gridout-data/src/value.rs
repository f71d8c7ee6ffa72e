//! Raw cell values as supplied by ingestion adapters.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

/// A raw scalar (or structured) cell value before classification.
///
/// This is a closed set: every value an ingestion adapter can hand to a
/// table writer is one of these kinds. Classification maps each kind to
/// a [`TypeCode`](crate::TypeCode); string values are additionally
/// sniffed for embedded booleans, numbers, datetimes, and IP addresses.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Missing value (rendered as an empty string by default).
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    DateTime(NaiveDateTime),
    Str(String),
    /// Ordered list, rendered in JSON notation.
    List(Vec<Value>),
    /// Key/value mapping, rendered in JSON notation.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// JSON representation used to render list and mapping cells.
    ///
    /// Non-finite floats have no JSON number form and degrade to their
    /// display tokens.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::None => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or_else(|| serde_json::Value::String(float_token(*f))),
            Value::DateTime(dt) => {
                serde_json::Value::String(dt.format("%Y-%m-%d %H:%M:%S").to_string())
            }
            Value::Str(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Map(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

/// Display token for a non-finite float.
pub(crate) fn float_token(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f == f64::INFINITY {
        "Infinity".to_string()
    } else if f == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        format!("{}", f)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::DateTime(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Value::Map(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i64>), Value::None);
        assert_eq!(Value::from(Some(3)), Value::Int(3));
    }

    #[test]
    fn test_list_to_json() {
        let value = Value::List(vec![Value::Int(1), Value::Str("x".into())]);
        assert_eq!(value.to_json().to_string(), r#"[1,"x"]"#);
    }

    #[test]
    fn test_map_to_json_sorted_keys() {
        let mut map = BTreeMap::new();
        map.insert("b".to_string(), Value::Int(2));
        map.insert("a".to_string(), Value::Int(1));
        assert_eq!(Value::Map(map).to_json().to_string(), r#"{"a":1,"b":2}"#);
    }

    #[test]
    fn test_non_finite_float_in_json() {
        let value = Value::List(vec![Value::Float(f64::INFINITY)]);
        assert_eq!(value.to_json().to_string(), r#"["Infinity"]"#);
    }
}
