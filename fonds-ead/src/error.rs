//! Error types for finding aid documents

use thiserror::Error;

/// Result type for document operations
pub type Result<T> = std::result::Result<T, EadError>;

/// Errors that can occur reading, locating into, or growing a document
#[derive(Debug, Error)]
pub enum EadError {
    /// Location expression violates the grammar or the document contract
    #[error("invalid location '{expr}': {reason}")]
    InvalidLocation { expr: String, reason: String },

    /// Document is not well-formed
    #[error("malformed document: {message}")]
    Malformed { message: String },

    /// XML reader error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

impl EadError {
    /// Create an invalid-location error
    pub fn invalid_location(expr: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLocation {
            expr: expr.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed-document error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}
