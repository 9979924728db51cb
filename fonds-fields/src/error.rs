//! Error types for the field registry

use thiserror::Error;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur in field registry operations
#[derive(Debug, Error)]
pub enum FieldsError {
    /// Field not found by name
    #[error("unknown field: {name}")]
    UnknownField { name: String },

    /// Two descriptors share a name
    #[error("duplicate field name: {name}")]
    DuplicateField { name: String },

    /// A registry must describe at least one field
    #[error("registry for '{entity}' declares no fields")]
    EmptyRegistry { entity: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl FieldsError {
    /// Create an unknown-field error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    /// Create a duplicate-field error
    pub fn duplicate_field(name: impl Into<String>) -> Self {
        Self::DuplicateField { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FieldsError::unknown_field("titel");
        assert_eq!(err.to_string(), "unknown field: titel");
    }

    #[test]
    fn test_duplicate_field_display() {
        let err = FieldsError::duplicate_field("title");
        assert_eq!(err.to_string(), "duplicate field name: title");
    }
}
