//! The ordered field-to-value hub at the center of every conversion.

use indexmap::IndexMap;

use crate::convert;
use crate::schema::Schema;
use crate::value::FieldValue;

static EMPTY: FieldValue = FieldValue::Empty;

/// One entity's values, keyed by field name in registry order.
///
/// A record is a dumb hub: it holds no representation-specific state and no
/// reference to the schema that shaped it. Every conversion borrows the
/// record together with its schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    entity: String,
    values: IndexMap<String, FieldValue>,
}

impl Record {
    /// A fresh record with every registry field seeded from its default.
    pub fn new(schema: &Schema) -> Self {
        let mut values = IndexMap::with_capacity(schema.fields().len());
        for field in schema.fields() {
            values.insert(field.name.clone(), convert::default_value(field));
        }
        Self {
            entity: schema.entity().to_string(),
            values,
        }
    }

    /// The entity kind this record belongs to.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// The value of a field, [`FieldValue::Empty`] when not present.
    pub fn value(&self, name: &str) -> &FieldValue {
        self.values.get(name).unwrap_or(&EMPTY)
    }

    /// Set a field value. Fields seeded at construction keep their slot in
    /// registry order; names the schema never seeded append at the end.
    pub fn set(&mut self, name: impl Into<String>, value: FieldValue) {
        self.values.insert(name.into(), value);
    }

    /// `(name, value)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fonds_fields::{FieldDef, FieldDefault, FieldRegistry, ValueType};
    use serde_json::json;

    fn sample_schema() -> Schema {
        let registry = FieldRegistry::builder("collection")
            .field(FieldDef::new("id", ValueType::Text))
            .field(FieldDef {
                default: Some(FieldDefault::Literal(json!("inprocess"))),
                ..FieldDef::new("status", ValueType::EnumeratedCode)
            })
            .field(FieldDef {
                default: Some(FieldDefault::Now),
                ..FieldDef::new("record_created", ValueType::Timestamp)
            })
            .field(FieldDef::new("title", ValueType::Text))
            .build()
            .unwrap();
        Schema::new(registry)
    }

    #[test]
    fn new_record_seeds_defaults_in_registry_order() {
        let record = Record::new(&sample_schema());
        let names: Vec<_> = record.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["id", "status", "record_created", "title"]);

        assert_eq!(record.value("id"), &FieldValue::Empty);
        assert_eq!(record.value("status"), &FieldValue::Code("inprocess".into()));
        assert!(matches!(record.value("record_created"), FieldValue::Timestamp(_)));
    }

    #[test]
    fn set_keeps_the_seeded_slot() {
        let mut record = Record::new(&sample_schema());
        record.set("id", FieldValue::Text("ddr-densho-1".into()));

        let names: Vec<_> = record.iter().map(|(n, _)| n).collect();
        assert_eq!(names[0], "id");
        assert_eq!(record.value("id"), &FieldValue::Text("ddr-densho-1".into()));
    }

    #[test]
    fn value_falls_back_to_empty() {
        let record = Record::new(&sample_schema());
        assert_eq!(record.value("nonexistent"), &FieldValue::Empty);
        assert!(record.get("nonexistent").is_none());
    }

    #[test]
    fn entity_comes_from_the_schema() {
        let record = Record::new(&sample_schema());
        assert_eq!(record.entity(), "collection");
        assert_eq!(record.len(), 4);
    }
}
