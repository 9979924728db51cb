//! Core descriptor types for the field registry.
//!
//! All types serialize to/from YAML via serde. A [`FieldDef`] describes one
//! named attribute of an archival entity: its domain type, list shape,
//! controlled vocabulary, search visibility, CSV participation, and where the
//! value lands in an EAD finding aid.

use serde::{Deserialize, Serialize};

/// The domain type of a field; determines what shape the value takes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ValueType {
    Text,
    Integer,
    /// A code drawn from the field's controlled vocabulary.
    EnumeratedCode,
    Timestamp,
    /// An ordered list of keyed sub-records (e.g. creators with roles).
    StructuredList,
}

/// Whether a field appears in search-index documents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

/// One `(code, label)` pair in a controlled vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VocabTerm {
    pub code: String,
    pub label: String,
}

/// Initial value for a field when a record is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum FieldDefault {
    /// The current timestamp, materialized at record creation.
    Now,
    /// A fixed raw value, decoded like a persisted one.
    Literal(serde_json::Value),
}

fn default_true() -> bool {
    true
}

/// A field descriptor: the complete schema for a single named attribute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDef {
    pub name: String,
    /// Logical section the field belongs to. Empty means ungrouped.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group: String,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    /// Ordered list of values rather than a single value.
    #[serde(default)]
    pub multiple: bool,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_yaml::with::singleton_map"
    )]
    pub default: Option<FieldDefault>,
    /// Presence marks the field as vocabulary-controlled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<Vec<VocabTerm>>,
    #[serde(default)]
    pub visibility: Visibility,
    /// Consumed by the external hierarchy resolver, carried untouched here.
    #[serde(default)]
    pub inheritable: bool,
    #[serde(default = "default_true")]
    pub csv_included: bool,
    /// Malformed payloads for required fields surface instead of defaulting.
    #[serde(default)]
    pub required: bool,
    /// Form-layer caption, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Form-layer help text, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    /// Primary location expression in the finding aid document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Additional locations that receive an identical copy of the value.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub duplicate_locations: Vec<String>,
}

impl FieldDef {
    /// Minimal descriptor: single text value, private, no locations.
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            group: String::new(),
            value_type,
            multiple: false,
            default: None,
            vocabulary: None,
            visibility: Visibility::Private,
            inheritable: false,
            csv_included: true,
            required: false,
            label: None,
            help: None,
            location: None,
            duplicate_locations: Vec::new(),
        }
    }

    /// Whether values of this field are list-shaped. Structured lists are
    /// list-shaped regardless of the `multiple` flag.
    pub fn is_list_shaped(&self) -> bool {
        self.multiple || self.value_type == ValueType::StructuredList
    }

    /// Whether the field carries a controlled vocabulary.
    pub fn has_vocabulary(&self) -> bool {
        self.vocabulary.is_some()
    }

    /// Resolve a vocabulary code to its label. `None` when the field has no
    /// vocabulary or the code is not part of it; callers fall back to the
    /// raw code.
    pub fn vocab_label(&self, code: &str) -> Option<&str> {
        self.vocabulary
            .as_deref()?
            .iter()
            .find(|t| t.code == code)
            .map(|t| t.label.as_str())
    }

    /// Whether the field participates in search-index documents.
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_type_yaml_round_trip() {
        for vt in [
            ValueType::Text,
            ValueType::Integer,
            ValueType::EnumeratedCode,
            ValueType::Timestamp,
            ValueType::StructuredList,
        ] {
            let yaml = serde_yaml::to_string(&vt).unwrap();
            let parsed: ValueType = serde_yaml::from_str(&yaml).unwrap();
            assert_eq!(vt, parsed);
        }
    }

    #[test]
    fn value_type_kebab_case_names() {
        let yaml = serde_yaml::to_string(&ValueType::EnumeratedCode).unwrap();
        assert_eq!(yaml.trim(), "enumerated-code");
        let yaml = serde_yaml::to_string(&ValueType::StructuredList).unwrap();
        assert_eq!(yaml.trim(), "structured-list");
    }

    #[test]
    fn field_default_now_from_bare_string() {
        let parsed: FieldDefault = serde_yaml::from_str("now").unwrap();
        assert_eq!(parsed, FieldDefault::Now);
        let yaml = serde_yaml::to_string(&FieldDefault::Now).unwrap();
        assert_eq!(yaml.trim(), "now");
    }

    #[test]
    fn field_default_literal_round_trip() {
        let default = FieldDefault::Literal(serde_json::json!("inprocess"));
        let yaml = serde_yaml::to_string(&default).unwrap();
        let parsed: FieldDefault = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(default, parsed);
    }

    #[test]
    fn field_def_yaml_round_trip() {
        let field = FieldDef {
            group: "administrative".into(),
            default: Some(FieldDefault::Literal(serde_json::json!("cc"))),
            vocabulary: Some(vec![
                VocabTerm {
                    code: "cc".into(),
                    label: "Creative Commons".into(),
                },
                VocabTerm {
                    code: "pdm".into(),
                    label: "Public Domain".into(),
                },
            ]),
            visibility: Visibility::Public,
            label: Some("Rights".into()),
            help: Some("Licensing that applies to these materials".into()),
            location: Some("/ead/archdesc/did/userestrict/p".into()),
            ..FieldDef::new("rights", ValueType::EnumeratedCode)
        };
        let yaml = serde_yaml::to_string(&field).unwrap();
        let parsed: FieldDef = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(field, parsed);
    }

    #[test]
    fn field_def_value_type_renames_to_type_in_yaml() {
        let field = FieldDef::new("title", ValueType::Text);
        let yaml = serde_yaml::to_string(&field).unwrap();
        assert!(yaml.contains("type:"));
        assert!(!yaml.contains("value_type:"));
    }

    #[test]
    fn csv_included_defaults_to_true() {
        let yaml = "name: title\ntype: text\n";
        let field: FieldDef = serde_yaml::from_str(yaml).unwrap();
        assert!(field.csv_included);
        assert!(!field.required);
        assert_eq!(field.visibility, Visibility::Private);
    }

    #[test]
    fn structured_list_is_always_list_shaped() {
        let field = FieldDef::new("creators", ValueType::StructuredList);
        assert!(field.is_list_shaped());

        let mut language = FieldDef::new("language", ValueType::EnumeratedCode);
        assert!(!language.is_list_shaped());
        language.multiple = true;
        assert!(language.is_list_shaped());
    }

    #[test]
    fn vocab_label_lookup_and_passthrough() {
        let field = FieldDef {
            vocabulary: Some(vec![VocabTerm {
                code: "cc".into(),
                label: "Creative Commons".into(),
            }]),
            ..FieldDef::new("rights", ValueType::EnumeratedCode)
        };
        assert_eq!(field.vocab_label("cc"), Some("Creative Commons"));
        assert_eq!(field.vocab_label("bogus"), None);

        let plain = FieldDef::new("title", ValueType::Text);
        assert_eq!(plain.vocab_label("cc"), None);
    }

    #[test]
    fn descriptor_from_yaml_document() {
        let yaml_input = r#"
name: status
group: administrative
type: enumerated-code
default:
  literal: inprocess
vocabulary:
  - code: inprocess
    label: In Progress
  - code: completed
    label: Completed
visibility: private
required: true
label: Status
help: Is this collection complete?
"#;
        let field: FieldDef = serde_yaml::from_str(yaml_input).unwrap();
        assert_eq!(field.name, "status");
        assert_eq!(field.group, "administrative");
        assert_eq!(field.value_type, ValueType::EnumeratedCode);
        assert_eq!(
            field.default,
            Some(FieldDefault::Literal(serde_json::json!("inprocess")))
        );
        assert!(field.required);
        assert!(!field.is_public());
        assert_eq!(field.vocab_label("completed"), Some("Completed"));

        // Round-trip
        let yaml_out = serde_yaml::to_string(&field).unwrap();
        let reparsed: FieldDef = serde_yaml::from_str(&yaml_out).unwrap();
        assert_eq!(field, reparsed);
    }

    #[test]
    fn descriptor_with_locations_from_yaml() {
        let yaml_input = r#"
name: title
type: text
visibility: public
location: /ead/eadheader/filedesc/titlestmt/titleproper
duplicate_locations:
  - /ead/archdesc/did/unittitle
"#;
        let field: FieldDef = serde_yaml::from_str(yaml_input).unwrap();
        assert_eq!(
            field.location.as_deref(),
            Some("/ead/eadheader/filedesc/titlestmt/titleproper")
        );
        assert_eq!(field.duplicate_locations.len(), 1);
    }
}
