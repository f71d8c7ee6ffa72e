//! The value classifier: raw values to classified cells.
//!
//! Classification is a pure function of the input value, an optional
//! per-column type hint, and the classifier options. It never fails;
//! anything unrecognized falls back to the generic string type.

use std::collections::BTreeSet;
use std::net::IpAddr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::cell::CellValue;
use crate::typecode::TypeCode;
use crate::value::{float_token, Value};

/// Per-type quoting flags: which type tags get their display string
/// wrapped in double quotes.
///
/// All flags default to off; delimited-text renderers opt in for the
/// text-like types.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuotingFlags(BTreeSet<TypeCode>);

impl QuotingFlags {
    /// No type is quoted.
    pub fn none() -> Self {
        QuotingFlags::default()
    }

    /// Quote the text-like types: `String`, `NullString`, `DateTime`,
    /// and `IpAddress`.
    pub fn text_types() -> Self {
        QuotingFlags::none()
            .quote(TypeCode::String)
            .quote(TypeCode::NullString)
            .quote(TypeCode::DateTime)
            .quote(TypeCode::IpAddress)
    }

    /// Enable quoting for one type tag.
    pub fn quote(mut self, code: TypeCode) -> Self {
        self.0.insert(code);
        self
    }

    /// Whether the given type tag is quote-wrapped.
    pub fn is_quoted(&self, code: TypeCode) -> bool {
        self.0.contains(&code)
    }
}

/// Classifies raw values into [`CellValue`]s.
#[derive(Clone, Debug)]
pub struct Classifier {
    /// When true, real numbers are re-rendered in canonical shortest
    /// form; when false, float-looking strings keep their source text.
    pub is_formatting_float: bool,
    /// Which type tags get quote-wrapped display strings.
    pub quoting: QuotingFlags,
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier {
            is_formatting_float: true,
            quoting: QuotingFlags::none(),
        }
    }
}

impl Classifier {
    /// Classify a single value, honoring an optional type hint.
    ///
    /// A hint re-coerces the value toward the hinted type when the
    /// conversion succeeds; otherwise the natural classification is
    /// kept, so a hinted column may remain mixed-type.
    pub fn classify(&self, value: &Value, hint: Option<TypeCode>) -> CellValue {
        if let Some(hint) = hint {
            if let Some(cell) = self.coerce(value, hint) {
                return cell;
            }
        }
        let (code, text) = self.natural(value);
        self.cell(code, text)
    }

    /// Natural (hint-free) classification: type tag plus unquoted text.
    fn natural(&self, value: &Value) -> (TypeCode, String) {
        match value {
            Value::None => (TypeCode::None, String::new()),
            Value::Bool(b) => (TypeCode::Bool, b.to_string()),
            Value::Int(i) => (TypeCode::Integer, i.to_string()),
            Value::Float(f) => self.classify_float(*f, None),
            Value::DateTime(dt) => (
                TypeCode::DateTime,
                dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            ),
            Value::List(_) => (TypeCode::List, value.to_json().to_string()),
            Value::Map(_) => (TypeCode::Dictionary, value.to_json().to_string()),
            Value::Str(s) => self.sniff_str(s),
        }
    }

    /// String sniffing in precedence order: empty, boolean, integer,
    /// real/special-real, datetime, IP address, generic string.
    fn sniff_str(&self, s: &str) -> (TypeCode, String) {
        if s.is_empty() {
            return (TypeCode::NullString, String::new());
        }
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            return (TypeCode::Bool, "true".to_string());
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return (TypeCode::Bool, "false".to_string());
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return (TypeCode::Integer, i.to_string());
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return self.classify_float(f, Some(trimmed));
        }
        if is_datetime_str(trimmed) {
            return (TypeCode::DateTime, trimmed.to_string());
        }
        if trimmed.parse::<IpAddr>().is_ok() {
            return (TypeCode::IpAddress, trimmed.to_string());
        }
        (TypeCode::String, s.to_string())
    }

    /// Tag a float as real, infinity, or NaN, and pick its display
    /// string. `source` is the original text when the float came from a
    /// string, preserved when float formatting is off.
    fn classify_float(&self, f: f64, source: Option<&str>) -> (TypeCode, String) {
        if f.is_nan() {
            return (TypeCode::Nan, "NaN".to_string());
        }
        if f.is_infinite() {
            return (TypeCode::Infinity, float_token(f));
        }
        let text = match source {
            Some(text) if !self.is_formatting_float => text.to_string(),
            _ => format!("{}", f),
        };
        (TypeCode::RealNumber, text)
    }

    /// Attempt to convert `value` toward the hinted type.
    ///
    /// Returns `None` when the conversion is not possible, in which
    /// case the caller falls back to natural classification.
    fn coerce(&self, value: &Value, hint: TypeCode) -> Option<CellValue> {
        match hint {
            TypeCode::Integer => {
                let i = match value {
                    Value::Int(i) => *i,
                    Value::Bool(b) => *b as i64,
                    Value::Float(f)
                        if f.is_finite()
                            && f.fract() == 0.0
                            && f.abs() < i64::MAX as f64 =>
                    {
                        *f as i64
                    }
                    Value::Str(s) => s.trim().parse::<i64>().ok()?,
                    _ => return None,
                };
                Some(self.cell(TypeCode::Integer, i.to_string()))
            }
            TypeCode::RealNumber => {
                let f = match value {
                    Value::Int(i) => *i as f64,
                    Value::Float(f) if f.is_finite() => *f,
                    Value::Str(s) => {
                        let f = s.trim().parse::<f64>().ok()?;
                        if !f.is_finite() {
                            return None;
                        }
                        f
                    }
                    _ => return None,
                };
                Some(self.cell(TypeCode::RealNumber, format!("{}", f)))
            }
            TypeCode::Bool => {
                let b = match value {
                    Value::Bool(b) => *b,
                    Value::Str(s) if s.trim().eq_ignore_ascii_case("true") => true,
                    Value::Str(s) if s.trim().eq_ignore_ascii_case("false") => false,
                    _ => return None,
                };
                Some(self.cell(TypeCode::Bool, b.to_string()))
            }
            TypeCode::String => {
                // Everything converts to a string; keep the natural
                // display text but re-tag (and so re-align) as string.
                let (_, text) = self.natural(value);
                Some(self.cell(TypeCode::String, text))
            }
            TypeCode::DateTime => match value {
                Value::DateTime(_) => {
                    let (code, text) = self.natural(value);
                    Some(self.cell(code, text))
                }
                Value::Str(s) if is_datetime_str(s.trim()) => {
                    Some(self.cell(TypeCode::DateTime, s.trim().to_string()))
                }
                _ => None,
            },
            _ => {
                let (code, text) = self.natural(value);
                (code == hint).then(|| self.cell(code, text))
            }
        }
    }

    /// Final cell construction: apply quoting, measure width.
    fn cell(&self, code: TypeCode, text: String) -> CellValue {
        let text = if self.quoting.is_quoted(code) {
            format!("\"{}\"", text)
        } else {
            text
        };
        CellValue::new(code, text)
    }
}

/// Whether a string parses as one of the recognized datetime shapes:
/// RFC 3339, `%Y-%m-%d %H:%M:%S`, `%Y-%m-%dT%H:%M:%S`, or `%Y-%m-%d`.
fn is_datetime_str(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").is_ok()
        || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}
