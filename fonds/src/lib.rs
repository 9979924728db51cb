//! Schema-driven transcoding of archival collection records.
//!
//! One [`Schema`] (an ordered field registry plus per-field conversion
//! hooks) drives every shape a collection record takes:
//!
//! - persisted JSON documents: [`load_record`] / [`dump_record`]
//! - CSV rows: [`from_csv_row`] / [`to_csv_row`]
//! - HTML-form values: [`form_values`] / [`apply_form_values`]
//! - search-index documents (public fields only): [`index_document`]
//! - human-readable text: [`display_values`]
//! - EAD finding aids: [`write_to_document`]
//!
//! Raw external data is `serde_json::Value`; typed values are
//! [`FieldValue`]. Hooks are resolved by `(field name, representation)` and
//! fall back to type-driven defaults, so a schema with no hooks at all is
//! fully functional.
//!
//! ```
//! use fonds::{dump_record, load_record, FieldDef, FieldRegistry, Schema, ValueType};
//!
//! let registry = FieldRegistry::builder("collection")
//!     .field(FieldDef::new("title", ValueType::Text))
//!     .build()
//!     .unwrap();
//! let schema = Schema::new(registry);
//!
//! let document = serde_json::json!({"title": "Yano Family Photographs"});
//! let record = load_record(&document, &schema).unwrap();
//! assert_eq!(dump_record(&record, &schema), document);
//! ```

mod convert;
mod csv;
mod display;
mod ead;
mod error;
mod form;
mod hooks;
mod index;
mod json;
mod record;
mod schema;
mod value;

pub use convert::{default_decode, default_encode};
pub use csv::{from_csv_row, to_csv_row};
pub use display::display_values;
pub use ead::write_to_document;
pub use error::{Result, TranscodeError};
pub use form::{apply_form_values, form_values};
pub use hooks::{DecodeFn, EncodeFn, HookMap, Representation};
pub use index::index_document;
pub use json::{dump_record, load_record};
pub use record::Record;
pub use schema::{Schema, SchemaBuilder};
pub use value::{FieldValue, TIMESTAMP_DISPLAY_FORMAT, TIMESTAMP_FORMAT};

// The registry and document types most callers need alongside the engine.
pub use fonds_ead::{Document, EadError, Element, Location, Step};
pub use fonds_fields::{
    FieldDef, FieldDefault, FieldRegistry, FieldsError, RegistryBuilder, ValueType, Visibility,
    VocabTerm,
};
