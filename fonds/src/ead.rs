//! Finding-aid (EAD) document writer.
//!
//! Fields carry location expressions into the finding aid; this builder
//! renders each located field to text and writes it at every location the
//! descriptor names, growing missing paths as it goes. The document is the
//! caller's: typically parsed from a template, written once, serialized.

use fonds_ead::{Document, Location, Step};

use crate::convert;
use crate::error::Result;
use crate::hooks::Representation;
use crate::record::Record;
use crate::schema::Schema;

/// Write a record's located fields into a finding aid document.
///
/// Fields without a primary location, and fields whose value is empty, are
/// skipped; empty values never grow paths. The primary location is written
/// first, then each duplicate location receives an identical copy of the
/// same rendered text. A location that fails its contract (unparsable, or
/// anchored at the wrong root) propagates [`fonds_ead::EadError`].
pub fn write_to_document(document: &mut Document, record: &Record, schema: &Schema) -> Result<()> {
    for field in schema.fields() {
        let Some(primary) = field.location.as_deref() else {
            continue;
        };
        if primary.is_empty() {
            continue;
        }
        let value = record.value(&field.name);
        if value.is_empty() {
            continue;
        }

        let hook = schema
            .hooks()
            .resolve_encode(&field.name, Representation::Ead);
        let text = convert::value_text(&hook(field, value));

        write_at(document, primary, &text)?;
        for duplicate in &field.duplicate_locations {
            write_at(document, duplicate, &text)?;
        }
    }
    Ok(())
}

/// Grow one location and place the text: on the element for element-step
/// targets, on the named attribute when the expression ends in `/@name`.
fn write_at(document: &mut Document, expr: &str, text: &str) -> Result<()> {
    let location = Location::parse(expr)?;
    let target = document.ensure(&location)?;
    match location.steps().last() {
        Some(Step::Attribute { name, value: None }) => target.set_attr(name.as_str(), text),
        _ => target.set_text(text),
    }
    Ok(())
}
