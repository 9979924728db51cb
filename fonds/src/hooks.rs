//! Per-field conversion hooks and their resolution.
//!
//! Every conversion a builder performs goes through a hook looked up by
//! `(field name, representation)`. Hooks are registered explicitly on the
//! [`HookMap`] at schema construction time; a missing entry is not an error
//! but the signal to use the type-driven default from [`crate::convert`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use fonds_fields::FieldDef;
use serde_json::Value;

use crate::convert;
use crate::error::Result;
use crate::value::FieldValue;

/// The external shape a conversion targets or originates from.
///
/// Decode hooks exist for `Json`, `Csv` and `Form`; encode hooks for all
/// six representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Persisted structured document.
    Json,
    /// Tabular export/import cell.
    Csv,
    /// HTML-form edit value.
    Form,
    /// Search-index document.
    Index,
    /// Human-readable text.
    Display,
    /// Finding-aid document text.
    Ead,
}

/// Raw → domain conversion. May fail on malformed input.
pub type DecodeFn = Arc<dyn Fn(&FieldDef, &Value) -> Result<FieldValue> + Send + Sync>;

/// Domain → raw conversion. Total; malformed data passes through as text.
pub type EncodeFn = Arc<dyn Fn(&FieldDef, &FieldValue) -> Value + Send + Sync>;

/// Explicit `(field name, representation) → function` tables.
///
/// Immutable once the owning [`crate::Schema`] is built. Resolution never
/// fails: fields without a registered hook get the type-driven default.
#[derive(Default, Clone)]
pub struct HookMap {
    decoders: HashMap<String, HashMap<Representation, DecodeFn>>,
    encoders: HashMap<String, HashMap<Representation, EncodeFn>>,
}

impl HookMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a decode hook for one field and representation.
    pub fn set_decode(
        &mut self,
        field: impl Into<String>,
        representation: Representation,
        hook: DecodeFn,
    ) {
        self.decoders
            .entry(field.into())
            .or_default()
            .insert(representation, hook);
    }

    /// Register an encode hook for one field and representation.
    pub fn set_encode(
        &mut self,
        field: impl Into<String>,
        representation: Representation,
        hook: EncodeFn,
    ) {
        self.encoders
            .entry(field.into())
            .or_default()
            .insert(representation, hook);
    }

    /// The registered decode hook, if any.
    pub fn decode_hook(&self, field: &str, representation: Representation) -> Option<&DecodeFn> {
        self.decoders.get(field)?.get(&representation)
    }

    /// The registered encode hook, if any.
    pub fn encode_hook(&self, field: &str, representation: Representation) -> Option<&EncodeFn> {
        self.encoders.get(field)?.get(&representation)
    }

    /// Resolve the decode function for a field. Always returns a callable;
    /// unregistered combinations fall back to the type-driven default.
    pub fn resolve_decode(&self, field: &str, representation: Representation) -> DecodeFn {
        if let Some(hook) = self.decode_hook(field, representation) {
            return Arc::clone(hook);
        }
        Arc::new(move |field, raw| convert::default_decode(field, representation, raw))
    }

    /// Resolve the encode function for a field. Always returns a callable.
    pub fn resolve_encode(&self, field: &str, representation: Representation) -> EncodeFn {
        if let Some(hook) = self.encode_hook(field, representation) {
            return Arc::clone(hook);
        }
        Arc::new(move |field, value| convert::default_encode(field, representation, value))
    }
}

impl fmt::Debug for HookMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookMap")
            .field("decoders", &self.decoders.len())
            .field("encoders", &self.encoders.len())
            .finish()
    }
}
