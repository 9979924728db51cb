//! Read-only display rendering.

use serde_json::{Map, Value};

use crate::hooks::Representation;
use crate::record::Record;
use crate::schema::Schema;

/// Human-readable text per field, registry order.
///
/// Codes render as their vocabulary labels (raw code when unlisted),
/// timestamps in the pretty format, lists one line per item. Display text is
/// a one-way projection and is never decoded back into a record.
pub fn display_values(record: &Record, schema: &Schema) -> Map<String, Value> {
    let mut values = Map::with_capacity(schema.fields().len());
    for field in schema.fields() {
        let hook = schema
            .hooks()
            .resolve_encode(&field.name, Representation::Display);
        values.insert(field.name.clone(), hook(field, record.value(&field.name)));
    }
    values
}
