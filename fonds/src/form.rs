//! HTML-form value conversions.
//!
//! Forms edit every field of a record. Scalar fields keep their canonical
//! JSON shape; structured lists ride in text controls as compact JSON, so
//! the decode side re-parses that text. Submitted payloads routinely carry
//! keys that are not fields (CSRF tokens, submit buttons); only registry
//! fields are consulted, so those pass by silently.

use serde_json::{Map, Value};

use crate::convert;
use crate::error::Result;
use crate::hooks::Representation;
use crate::record::Record;
use crate::schema::Schema;

/// Values shaped for edit controls, every field present, registry order.
pub fn form_values(record: &Record, schema: &Schema) -> Map<String, Value> {
    let mut values = Map::with_capacity(schema.fields().len());
    for field in schema.fields() {
        let hook = schema
            .hooks()
            .resolve_encode(&field.name, Representation::Form);
        values.insert(field.name.clone(), hook(field, record.value(&field.name)));
    }
    values
}

/// Apply submitted form values to a record.
///
/// Fields missing from the submission are left untouched. Malformed input
/// follows the per-field policy: default and `warn!`, unless `required`.
pub fn apply_form_values(
    record: &mut Record,
    values: &Map<String, Value>,
    schema: &Schema,
) -> Result<()> {
    for field in schema.fields() {
        if let Some(raw) = values.get(&field.name) {
            let value = convert::decode_field(schema, field, Representation::Form, raw)?;
            record.set(field.name.clone(), value);
        }
    }
    Ok(())
}
