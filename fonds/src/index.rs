//! Search-index document builder.

use serde_json::{Map, Value};

use crate::hooks::Representation;
use crate::record::Record;
use crate::schema::Schema;

/// The public projection of a record for the search index.
///
/// Only fields with `visibility: public` appear; everything else is omitted
/// entirely rather than blanked. Enumerated codes stay raw so the index can
/// facet on them; label resolution is a display concern.
pub fn index_document(record: &Record, schema: &Schema) -> Map<String, Value> {
    let mut document = Map::new();
    for field in schema.fields() {
        if !field.is_public() {
            continue;
        }
        let hook = schema
            .hooks()
            .resolve_encode(&field.name, Representation::Index);
        document.insert(field.name.clone(), hook(field, record.value(&field.name)));
    }
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldValue;
    use fonds_fields::{FieldDef, FieldRegistry, ValueType, Visibility, VocabTerm};

    fn sample_schema() -> Schema {
        let registry = FieldRegistry::builder("collection")
            .field(FieldDef {
                visibility: Visibility::Public,
                ..FieldDef::new("title", ValueType::Text)
            })
            .field(FieldDef {
                visibility: Visibility::Public,
                vocabulary: Some(vec![VocabTerm {
                    code: "cc".into(),
                    label: "Creative Commons".into(),
                }]),
                ..FieldDef::new("rights", ValueType::EnumeratedCode)
            })
            .field(FieldDef::new("notes", ValueType::Text))
            .field(FieldDef::new("record_created", ValueType::Timestamp))
            .build()
            .unwrap();
        Schema::new(registry)
    }

    #[test]
    fn private_fields_never_reach_the_index() {
        let schema = sample_schema();
        let mut record = Record::new(&schema);
        record.set("notes", FieldValue::Text("internal staff remarks".into()));

        let document = index_document(&record, &schema);
        assert!(!document.contains_key("notes"));
        assert!(!document.contains_key("record_created"));
        for key in document.keys() {
            assert!(schema.registry().get(key).unwrap().is_public());
        }
    }

    #[test]
    fn codes_stay_raw_in_the_index() {
        let schema = sample_schema();
        let mut record = Record::new(&schema);
        record.set("rights", FieldValue::Code("cc".into()));

        let document = index_document(&record, &schema);
        assert_eq!(document["rights"], "cc");
    }
}
