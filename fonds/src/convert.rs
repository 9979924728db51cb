//! Type-driven default conversions.
//!
//! These are the fallbacks the hook resolver hands out when no specific hook
//! is registered for a `(field, representation)` pair. Decoding is lenient
//! about raw shapes (numbers may arrive as strings, scalars where lists are
//! expected) but strict about meaning; encoding is total.

use chrono::{Local, NaiveDateTime};
use fonds_fields::{FieldDef, FieldDefault, ValueType};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{Result, TranscodeError};
use crate::hooks::Representation;
use crate::schema::Schema;
use crate::value::{FieldValue, TIMESTAMP_DISPLAY_FORMAT, TIMESTAMP_FORMAT};

/// Decode a raw value into the field's domain type.
///
/// `Null` always decodes to [`FieldValue::Empty`]. List-shaped fields accept
/// arrays, delimited text (for the textual representations) and bare scalars,
/// which are wrapped as a one-item list.
pub fn default_decode(
    field: &FieldDef,
    representation: Representation,
    raw: &Value,
) -> Result<FieldValue> {
    if raw.is_null() {
        return Ok(FieldValue::Empty);
    }
    if field.is_list_shaped() {
        return decode_list(field, representation, raw);
    }
    decode_scalar(field, raw)
}

/// Encode a domain value into the raw shape of one representation.
///
/// Never fails: values without a more specific rendering fall back to
/// their canonical text.
pub fn default_encode(field: &FieldDef, representation: Representation, value: &FieldValue) -> Value {
    match representation {
        Representation::Json | Representation::Index => value.to_json(),
        Representation::Csv | Representation::Ead => Value::String(value.render_text()),
        Representation::Form => encode_form(value),
        Representation::Display => Value::String(display_text(field, value)),
    }
}

fn decode_list(field: &FieldDef, representation: Representation, raw: &Value) -> Result<FieldValue> {
    match raw {
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(decode_scalar(field, item)?);
            }
            Ok(FieldValue::List(out))
        }
        Value::String(text)
            if matches!(representation, Representation::Csv | Representation::Form) =>
        {
            decode_list_text(field, text)
        }
        other => Ok(FieldValue::List(vec![decode_scalar(field, other)?])),
    }
}

/// Textual list encodings: structured lists arrive as compact JSON text,
/// plain lists as `"; "`-delimited items.
fn decode_list_text(field: &FieldDef, text: &str) -> Result<FieldValue> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(FieldValue::List(Vec::new()));
    }
    if field.value_type == ValueType::StructuredList {
        let parsed: Value = serde_json::from_str(trimmed).map_err(|e| {
            TranscodeError::decode(&field.name, format!("structured text is not valid JSON: {e}"))
        })?;
        return decode_list(field, Representation::Json, &parsed);
    }
    let mut out = Vec::new();
    for piece in trimmed.split(';') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        out.push(decode_scalar(field, &Value::String(piece.to_string()))?);
    }
    Ok(FieldValue::List(out))
}

fn decode_scalar(field: &FieldDef, raw: &Value) -> Result<FieldValue> {
    match field.value_type {
        ValueType::Text => decode_text(field, raw),
        ValueType::Integer => decode_integer(field, raw),
        ValueType::EnumeratedCode => decode_code(field, raw),
        ValueType::Timestamp => decode_timestamp(field, raw),
        ValueType::StructuredList => decode_entry(field, raw),
    }
}

fn decode_text(field: &FieldDef, raw: &Value) -> Result<FieldValue> {
    match raw {
        Value::String(s) => Ok(FieldValue::Text(s.clone())),
        Value::Number(n) => Ok(FieldValue::Text(n.to_string())),
        Value::Bool(b) => Ok(FieldValue::Text(b.to_string())),
        other => Err(TranscodeError::decode(
            &field.name,
            format!("expected text, got {}", kind_of(other)),
        )),
    }
}

fn decode_integer(field: &FieldDef, raw: &Value) -> Result<FieldValue> {
    match raw {
        Value::Number(n) => n.as_i64().map(FieldValue::Integer).ok_or_else(|| {
            TranscodeError::decode(&field.name, format!("{n} is not a 64-bit integer"))
        }),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(FieldValue::Empty);
            }
            trimmed.parse::<i64>().map(FieldValue::Integer).map_err(|_| {
                TranscodeError::decode(&field.name, format!("'{trimmed}' is not an integer"))
            })
        }
        other => Err(TranscodeError::decode(
            &field.name,
            format!("expected an integer, got {}", kind_of(other)),
        )),
    }
}

fn decode_code(field: &FieldDef, raw: &Value) -> Result<FieldValue> {
    // Codes are stored raw; membership in the vocabulary is not enforced.
    match raw {
        Value::String(s) => Ok(FieldValue::Code(s.clone())),
        Value::Number(n) => Ok(FieldValue::Code(n.to_string())),
        Value::Bool(b) => Ok(FieldValue::Code(b.to_string())),
        other => Err(TranscodeError::decode(
            &field.name,
            format!("expected a code, got {}", kind_of(other)),
        )),
    }
}

fn decode_timestamp(field: &FieldDef, raw: &Value) -> Result<FieldValue> {
    match raw {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(FieldValue::Empty);
            }
            NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT)
                .map(FieldValue::Timestamp)
                .map_err(|e| {
                    TranscodeError::decode(
                        &field.name,
                        format!("'{trimmed}' is not a {TIMESTAMP_FORMAT} timestamp: {e}"),
                    )
                })
        }
        other => Err(TranscodeError::decode(
            &field.name,
            format!("expected a timestamp, got {}", kind_of(other)),
        )),
    }
}

fn decode_entry(field: &FieldDef, raw: &Value) -> Result<FieldValue> {
    match raw {
        Value::Object(map) => Ok(FieldValue::Entry(map.clone())),
        other => Err(TranscodeError::decode(
            &field.name,
            format!("structured entries must be objects, got {}", kind_of(other)),
        )),
    }
}

/// Form controls edit structured data as compact JSON text; everything else
/// keeps its canonical JSON shape.
fn encode_form(value: &FieldValue) -> Value {
    match value {
        FieldValue::Entry(_) => Value::String(value.to_json().to_string()),
        FieldValue::List(items) if items.iter().any(|i| matches!(i, FieldValue::Entry(_))) => {
            Value::String(value.to_json().to_string())
        }
        other => other.to_json(),
    }
}

/// Human-readable rendering: vocabulary labels for codes, pretty timestamps,
/// one line per list item.
fn display_text(field: &FieldDef, value: &FieldValue) -> String {
    match value {
        FieldValue::Empty => String::new(),
        FieldValue::Code(code) => field
            .vocab_label(code)
            .map(str::to_string)
            .unwrap_or_else(|| code.clone()),
        FieldValue::Timestamp(ts) => ts.format(TIMESTAMP_DISPLAY_FORMAT).to_string(),
        FieldValue::Entry(map) => entry_text(map),
        FieldValue::List(items) => items
            .iter()
            .map(|item| display_text(field, item))
            .collect::<Vec<_>>()
            .join("\n"),
        other => other.render_text(),
    }
}

fn entry_text(map: &Map<String, Value>) -> String {
    map.iter()
        .map(|(key, val)| format!("{key}: {}", value_text(val)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Flatten a raw value to cell text. Strings stay verbatim, `Null` empties,
/// anything else keeps its JSON rendering.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// The seed value for a freshly created record.
pub(crate) fn default_value(field: &FieldDef) -> FieldValue {
    match &field.default {
        None => FieldValue::Empty,
        Some(FieldDefault::Now) => FieldValue::Timestamp(Local::now().naive_local()),
        Some(FieldDefault::Literal(raw)) => default_decode(field, Representation::Json, raw)
            .unwrap_or_else(|error| {
                warn!(field = %field.name, %error, "field default does not decode, seeding empty");
                FieldValue::Empty
            }),
    }
}

/// Decode one field with the malformed-payload policy applied: on failure,
/// required fields abort the conversion, everything else logs and falls back
/// to the field default.
pub(crate) fn decode_field(
    schema: &Schema,
    field: &FieldDef,
    representation: Representation,
    raw: &Value,
) -> Result<FieldValue> {
    let hook = schema.hooks().resolve_decode(&field.name, representation);
    match hook(field, raw) {
        Ok(value) => Ok(value),
        Err(error) if field.required => {
            Err(TranscodeError::required_field(&field.name, error.to_string()))
        }
        Err(error) => {
            warn!(
                field = %field.name,
                representation = ?representation,
                %error,
                "field value rejected, falling back to default"
            );
            Ok(default_value(field))
        }
    }
}
