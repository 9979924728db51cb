//! Error types for the transcoding engine

use thiserror::Error;

/// Result type for transcoding operations
pub type Result<T> = std::result::Result<T, TranscodeError>;

/// Errors that can occur converting records between representations
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// Registry lookup failed
    #[error("field error: {0}")]
    Fields(#[from] fonds_fields::FieldsError),

    /// Finding aid document or location error
    #[error("EAD error: {0}")]
    Ead(#[from] fonds_ead::EadError),

    /// A raw value does not fit the field's domain type
    #[error("cannot decode field '{field}': {message}")]
    Decode { field: String, message: String },

    /// A required field's payload failed to decode; not defaulted away
    #[error("required field '{field}' rejected its value: {message}")]
    RequiredField { field: String, message: String },

    /// The raw document has the wrong overall shape
    #[error("malformed document: {message}")]
    BadDocument { message: String },

    /// CSV row length does not match the column universe
    #[error("row has {found} cells, expected {expected}")]
    RowShape { expected: usize, found: usize },

    /// JSON parse error inside a textual cell
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TranscodeError {
    /// Create a decode error
    pub fn decode(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a required-field error
    pub fn required_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RequiredField {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a bad-document error
    pub fn bad_document(message: impl Into<String>) -> Self {
        Self::BadDocument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TranscodeError::decode("record_created", "bad timestamp");
        assert_eq!(
            err.to_string(),
            "cannot decode field 'record_created': bad timestamp"
        );
    }

    #[test]
    fn test_row_shape_display() {
        let err = TranscodeError::RowShape {
            expected: 12,
            found: 11,
        };
        assert_eq!(err.to_string(), "row has 11 cells, expected 12");
    }
}
