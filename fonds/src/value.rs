//! Domain values, the typed side of every conversion.
//!
//! A [`FieldValue`] is what a [`crate::Record`] holds. Raw external data is
//! `serde_json::Value`; decode hooks go raw → domain and can fail, encode
//! hooks go domain → raw and cannot. Keeping the two sides as distinct types
//! means a builder can never accidentally ship an unparsed payload onward.

use chrono::NaiveDateTime;
use serde_json::{Map, Value};

/// Canonical timestamp text format. Round-trips exactly.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Human-readable timestamp format used by display rendering.
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A typed field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Unset. Distinct from an empty list or empty text only in encoding.
    Empty,
    Text(String),
    Integer(i64),
    /// An enumerated-vocabulary code, stored raw. Label resolution happens
    /// only at display time.
    Code(String),
    Timestamp(NaiveDateTime),
    /// One keyed sub-record of a structured list.
    Entry(Map<String, Value>),
    /// Ordered multi-value.
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Whether this value should be treated as absent by exporters.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(s) | FieldValue::Code(s) => s.is_empty(),
            FieldValue::Integer(_) | FieldValue::Timestamp(_) => false,
            FieldValue::Entry(map) => map.is_empty(),
            FieldValue::List(items) => items.is_empty(),
        }
    }

    /// The canonical raw JSON shape of this value.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Empty => Value::Null,
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::Integer(i) => Value::Number((*i).into()),
            FieldValue::Code(c) => Value::String(c.clone()),
            FieldValue::Timestamp(ts) => {
                Value::String(ts.format(TIMESTAMP_FORMAT).to_string())
            }
            FieldValue::Entry(map) => Value::Object(map.clone()),
            FieldValue::List(items) => {
                Value::Array(items.iter().map(FieldValue::to_json).collect())
            }
        }
    }

    /// The canonical single-line text rendering, used by the CSV and EAD
    /// defaults. Lists join with `"; "`; structured entries render as
    /// compact JSON so they survive a round trip through a text cell.
    pub fn render_text(&self) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Integer(i) => i.to_string(),
            FieldValue::Code(c) => c.clone(),
            FieldValue::Timestamp(ts) => ts.format(TIMESTAMP_FORMAT).to_string(),
            FieldValue::Entry(_) => self.to_json().to_string(),
            FieldValue::List(items) => {
                if items.iter().any(|i| matches!(i, FieldValue::Entry(_))) {
                    self.to_json().to_string()
                } else {
                    items
                        .iter()
                        .map(FieldValue::render_text)
                        .collect::<Vec<_>>()
                        .join("; ")
                }
            }
        }
    }
}
