//! Tabular (CSV) row conversions.
//!
//! Both directions share one column universe, `FieldRegistry::csv_fields`:
//! fields with `csv_included` minus the registry's exclusion list, in
//! registry order. Cells are plain text; lists join with `"; "` and
//! structured lists ride as compact JSON text.

use serde_json::Value;

use crate::convert;
use crate::error::{Result, TranscodeError};
use crate::hooks::Representation;
use crate::record::Record;
use crate::schema::Schema;

/// Render a record as one row over the schema's column universe.
pub fn to_csv_row(record: &Record, schema: &Schema) -> Vec<String> {
    schema
        .registry()
        .csv_fields()
        .iter()
        .map(|field| {
            let hook = schema
                .hooks()
                .resolve_encode(&field.name, Representation::Csv);
            convert::value_text(&hook(field, record.value(&field.name)))
        })
        .collect()
}

/// Build a record from one row.
///
/// The cell count must equal the column count ([`TranscodeError::RowShape`]
/// otherwise); excluded fields keep their seeded defaults. Malformed cells
/// follow the same per-field policy as document loading.
pub fn from_csv_row(cells: &[String], schema: &Schema) -> Result<Record> {
    let columns = schema.registry().csv_fields();
    if cells.len() != columns.len() {
        return Err(TranscodeError::RowShape {
            expected: columns.len(),
            found: cells.len(),
        });
    }

    let mut record = Record::new(schema);
    for (field, cell) in columns.iter().zip(cells) {
        let raw = Value::String(cell.clone());
        let value = convert::decode_field(schema, field, Representation::Csv, &raw)?;
        record.set(field.name.clone(), value);
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldValue;
    use fonds_fields::{FieldDef, FieldDefault, FieldRegistry, ValueType};
    use serde_json::json;

    fn sample_schema() -> Schema {
        let registry = FieldRegistry::builder("collection")
            .field(FieldDef::new("id", ValueType::Text))
            .field(FieldDef::new("title", ValueType::Text))
            .field(FieldDef {
                multiple: true,
                ..FieldDef::new("language", ValueType::EnumeratedCode)
            })
            .field(FieldDef::new("extent", ValueType::Integer))
            .field(FieldDef {
                default: Some(FieldDefault::Now),
                ..FieldDef::new("record_created", ValueType::Timestamp)
            })
            .field(FieldDef {
                csv_included: false,
                ..FieldDef::new("notes", ValueType::Text)
            })
            .csv_exclude("record_created")
            .build()
            .unwrap();
        Schema::new(registry)
    }

    #[test]
    fn row_covers_only_the_column_universe() {
        let schema = sample_schema();
        assert_eq!(
            schema.registry().csv_headers(),
            ["id", "title", "language", "extent"]
        );

        let record = Record::new(&schema);
        let row = to_csv_row(&record, &schema);
        assert_eq!(row.len(), schema.registry().csv_headers().len());
    }

    #[test]
    fn row_round_trips_through_a_record() {
        let schema = sample_schema();
        let mut record = Record::new(&schema);
        record.set("id", FieldValue::Text("ddr-densho-1".into()));
        record.set("title", FieldValue::Text("Yano Family Photographs".into()));
        record.set(
            "language",
            FieldValue::List(vec![
                FieldValue::Code("eng".into()),
                FieldValue::Code("jpn".into()),
            ]),
        );
        record.set("extent", FieldValue::Integer(434));

        let row = to_csv_row(&record, &schema);
        assert_eq!(row, ["ddr-densho-1", "Yano Family Photographs", "eng; jpn", "434"]);

        let reloaded = from_csv_row(&row, &schema).unwrap();
        assert_eq!(reloaded.value("id"), record.value("id"));
        assert_eq!(reloaded.value("language"), record.value("language"));
        assert_eq!(reloaded.value("extent"), record.value("extent"));
    }

    #[test]
    fn excluded_fields_keep_their_defaults_on_import() {
        let schema = sample_schema();
        let row: Vec<String> = ["ddr-densho-1", "", "", ""]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let record = from_csv_row(&row, &schema).unwrap();
        // record_created is column-excluded; the Now default survives import.
        assert!(matches!(record.value("record_created"), FieldValue::Timestamp(_)));
        assert_eq!(record.value("title"), &FieldValue::Text(String::new()));
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let schema = sample_schema();
        let row: Vec<String> = vec!["ddr-densho-1".into()];
        let err = from_csv_row(&row, &schema).unwrap_err();
        assert_eq!(err.to_string(), "row has 1 cells, expected 4");
    }

    #[test]
    fn structured_cell_round_trips_as_json_text() {
        let registry = FieldRegistry::builder("collection")
            .field(FieldDef::new("creators", ValueType::StructuredList))
            .build()
            .unwrap();
        let schema = Schema::new(registry);

        let entry = json!({"namepart": "Yano, Mas"});
        let Value::Object(map) = entry else { unreachable!() };
        let mut record = Record::new(&schema);
        record.set("creators", FieldValue::List(vec![FieldValue::Entry(map)]));

        let row = to_csv_row(&record, &schema);
        let reloaded = from_csv_row(&row, &schema).unwrap();
        assert_eq!(reloaded.value("creators"), record.value("creators"));
    }
}
