//! Field descriptors and the ordered schema registry
//!
//! `fonds-fields` is a standalone, schema-only crate. It describes the named
//! attributes of an archival entity kind (domain type, list shape,
//! controlled vocabulary, search visibility, CSV participation, finding aid
//! locations) and holds them in an ordered, immutable registry.
//!
//! # Architecture
//!
//! - **Schema-only**: Owns field descriptors, never field values
//! - **Declaration order is canonical**: Every representation that iterates
//!   fields does so in registry order
//! - **Immutable after build**: A registry is constructed once (from YAML or
//!   the builder) and then shared read-only
//! - **Content-agnostic**: Labels, help text, and vocabularies are carried as
//!   configuration data, not interpreted here

pub mod error;
pub mod registry;
pub mod types;

pub use error::{FieldsError, Result};
pub use registry::{FieldRegistry, RegistryBuilder};
pub use types::{FieldDef, FieldDefault, ValueType, Visibility, VocabTerm};
