//! The ordered, immutable field schema for one entity kind.
//!
//! Holds field descriptors in declaration order with a name index for O(1)
//! lookup. Built once from YAML or through [`RegistryBuilder`], then never
//! mutated; every transcoding operation borrows it read-only, so one registry
//! can back any number of concurrent conversions.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FieldsError, Result};
use crate::types::FieldDef;

/// On-disk shape of a registry document.
#[derive(Debug, Serialize, Deserialize)]
struct RegistryDoc {
    entity: String,
    #[serde(default)]
    fields: Vec<FieldDef>,
    #[serde(default)]
    csv_excluded: Vec<String>,
}

/// Builder for [`FieldRegistry`]. Created by [`FieldRegistry::builder`].
#[derive(Debug)]
pub struct RegistryBuilder {
    entity: String,
    fields: Vec<FieldDef>,
    csv_excluded: Vec<String>,
}

impl RegistryBuilder {
    /// Append a field descriptor. Declaration order is registry order.
    pub fn field(mut self, def: FieldDef) -> Self {
        self.fields.push(def);
        self
    }

    /// Exclude a field from CSV rows without touching its descriptor.
    pub fn csv_exclude(mut self, name: impl Into<String>) -> Self {
        self.csv_excluded.push(name.into());
        self
    }

    /// Build the registry, checking name uniqueness.
    pub fn build(self) -> Result<FieldRegistry> {
        FieldRegistry::from_parts(self.entity, self.fields, self.csv_excluded)
    }
}

/// An ordered, immutable collection of field descriptors for one entity kind.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    entity: String,
    fields: Vec<FieldDef>,
    name_index: HashMap<String, usize>,
    csv_excluded: Vec<String>,
}

impl FieldRegistry {
    /// Start a programmatic registry for the given entity kind.
    pub fn builder(entity: impl Into<String>) -> RegistryBuilder {
        RegistryBuilder {
            entity: entity.into(),
            fields: Vec::new(),
            csv_excluded: Vec::new(),
        }
    }

    /// Parse a registry from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let doc: RegistryDoc = serde_yaml::from_str(yaml)?;
        Self::from_parts(doc.entity, doc.fields, doc.csv_excluded)
    }

    /// Load a registry from a YAML file on disk.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    fn from_parts(entity: String, fields: Vec<FieldDef>, csv_excluded: Vec<String>) -> Result<Self> {
        if fields.is_empty() {
            return Err(FieldsError::EmptyRegistry { entity });
        }

        let mut name_index = HashMap::with_capacity(fields.len());
        for (idx, def) in fields.iter().enumerate() {
            if name_index.insert(def.name.clone(), idx).is_some() {
                return Err(FieldsError::duplicate_field(&def.name));
            }
        }

        let registry = Self {
            entity,
            fields,
            name_index,
            csv_excluded,
        };

        debug!(
            entity = %registry.entity,
            fields = registry.fields.len(),
            groups = registry.groups().len(),
            "field registry built"
        );

        Ok(registry)
    }

    /// The entity kind this registry describes.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Get a descriptor by name, failing loudly when it does not exist.
    pub fn describe(&self, name: &str) -> Result<&FieldDef> {
        self.get(name)
            .ok_or_else(|| FieldsError::unknown_field(name))
    }

    /// Get a descriptor by name.
    pub fn get(&self, name: &str) -> Option<&FieldDef> {
        self.name_index.get(name).map(|&i| &self.fields[i])
    }

    /// All descriptors in declaration order.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Descriptors belonging to a group, in declaration order.
    pub fn by_group(&self, group: &str) -> Vec<&FieldDef> {
        self.fields.iter().filter(|f| f.group == group).collect()
    }

    /// Distinct group names in first-appearance order.
    pub fn groups(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for field in &self.fields {
            if !field.group.is_empty() && !seen.contains(&field.group.as_str()) {
                seen.push(field.group.as_str());
            }
        }
        seen
    }

    /// The CSV column universe: descriptors with `csv_included` that are not
    /// on the registry exclusion list, in declaration order. Both the row
    /// writer and the row reader derive their columns from this.
    pub fn csv_fields(&self) -> Vec<&FieldDef> {
        self.fields
            .iter()
            .filter(|f| f.csv_included && !self.csv_excluded.iter().any(|x| x == &f.name))
            .collect()
    }

    /// Column headers for CSV rows, in declaration order.
    pub fn csv_headers(&self) -> Vec<&str> {
        self.csv_fields().iter().map(|f| f.name.as_str()).collect()
    }
}
