//! Persisted-document (JSON) conversions.
//!
//! The persisted document is the canonical external shape: an object keyed
//! by field name, one key per registry field, in registry order. Loading is
//! forgiving about extra and missing keys; dumping always emits the full
//! field set so documents stay diffable.

use serde_json::{Map, Value};
use tracing::debug;

use crate::convert;
use crate::error::{Result, TranscodeError};
use crate::hooks::Representation;
use crate::record::Record;
use crate::schema::Schema;

/// Build a record from a persisted JSON document.
///
/// The document must be an object. Fields absent from it keep their seeded
/// default; keys the registry does not know are ignored. Malformed values
/// follow the per-field policy: default and `warn!`, unless the field is
/// `required`, which aborts with [`TranscodeError::RequiredField`].
pub fn load_record(document: &Value, schema: &Schema) -> Result<Record> {
    let object = document.as_object().ok_or_else(|| {
        TranscodeError::bad_document(format!(
            "expected a JSON object, got {}",
            convert::kind_of(document)
        ))
    })?;

    let mut record = Record::new(schema);
    for field in schema.fields() {
        if let Some(raw) = object.get(&field.name) {
            let value = convert::decode_field(schema, field, Representation::Json, raw)?;
            record.set(field.name.clone(), value);
        }
    }

    for key in object.keys() {
        if schema.registry().get(key).is_none() {
            debug!(field = %key, "ignoring unknown field in document");
        }
    }

    Ok(record)
}

/// Dump a record as a persisted JSON document.
pub fn dump_record(record: &Record, schema: &Schema) -> Value {
    let mut object = Map::with_capacity(schema.fields().len());
    for field in schema.fields() {
        let hook = schema
            .hooks()
            .resolve_encode(&field.name, Representation::Json);
        object.insert(field.name.clone(), hook(field, record.value(&field.name)));
    }
    Value::Object(object)
}
