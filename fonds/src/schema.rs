//! A field registry bundled with its hook tables.
//!
//! The schema is the value every conversion borrows. There is no ambient
//! current-registry state anywhere in this crate; whoever calls a builder
//! says which schema governs it. Registry and hooks are both immutable after
//! [`SchemaBuilder::build`], which is what makes a schema freely shareable.

use std::sync::Arc;

use fonds_fields::{FieldDef, FieldRegistry};
use serde_json::Value;
use tracing::warn;

use crate::error::Result;
use crate::hooks::{HookMap, Representation};
use crate::value::FieldValue;

/// A field registry plus the hooks that customize its conversions.
#[derive(Debug, Clone)]
pub struct Schema {
    registry: Arc<FieldRegistry>,
    hooks: HookMap,
}

impl Schema {
    /// A schema using type-driven default conversions for every field.
    ///
    /// Accepts an owned registry or an `Arc` already shared with other
    /// schemas.
    pub fn new(registry: impl Into<Arc<FieldRegistry>>) -> Self {
        Self {
            registry: registry.into(),
            hooks: HookMap::new(),
        }
    }

    /// Start a schema that attaches field-specific hooks.
    pub fn builder(registry: impl Into<Arc<FieldRegistry>>) -> SchemaBuilder {
        SchemaBuilder {
            registry: registry.into(),
            hooks: HookMap::new(),
        }
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    pub fn hooks(&self) -> &HookMap {
        &self.hooks
    }

    /// The entity kind this schema describes.
    pub fn entity(&self) -> &str {
        self.registry.entity()
    }

    /// Descriptor lookup, failing on unknown names.
    pub fn describe(&self, name: &str) -> Result<&FieldDef> {
        Ok(self.registry.describe(name)?)
    }

    /// All descriptors in registry order.
    pub fn fields(&self) -> &[FieldDef] {
        self.registry.fields()
    }

    /// Decode one raw value through the resolved hook for the field.
    pub fn decode(
        &self,
        field: &str,
        representation: Representation,
        raw: &Value,
    ) -> Result<FieldValue> {
        let def = self.describe(field)?;
        let hook = self.hooks.resolve_decode(field, representation);
        hook(def, raw)
    }

    /// Encode one domain value through the resolved hook for the field.
    pub fn encode(
        &self,
        field: &str,
        representation: Representation,
        value: &FieldValue,
    ) -> Result<Value> {
        let def = self.describe(field)?;
        let hook = self.hooks.resolve_encode(field, representation);
        Ok(hook(def, value))
    }
}

/// Builder attaching field-specific hooks before the schema freezes.
#[derive(Debug)]
pub struct SchemaBuilder {
    registry: Arc<FieldRegistry>,
    hooks: HookMap,
}

impl SchemaBuilder {
    /// Register a decode hook for one field and representation.
    ///
    /// A hook naming a field the registry does not know is dropped with a
    /// warning rather than failing construction.
    pub fn decode<F>(mut self, field: &str, representation: Representation, hook: F) -> Self
    where
        F: Fn(&FieldDef, &Value) -> Result<FieldValue> + Send + Sync + 'static,
    {
        if self.registry.get(field).is_none() {
            warn!(field = %field, "decode hook targets unknown field, dropping");
            return self;
        }
        self.hooks.set_decode(field, representation, Arc::new(hook));
        self
    }

    /// Register an encode hook for one field and representation.
    pub fn encode<F>(mut self, field: &str, representation: Representation, hook: F) -> Self
    where
        F: Fn(&FieldDef, &FieldValue) -> Value + Send + Sync + 'static,
    {
        if self.registry.get(field).is_none() {
            warn!(field = %field, "encode hook targets unknown field, dropping");
            return self;
        }
        self.hooks.set_encode(field, representation, Arc::new(hook));
        self
    }

    pub fn build(self) -> Schema {
        Schema {
            registry: self.registry,
            hooks: self.hooks,
        }
    }
}
