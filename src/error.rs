//! Error types for the sequence editor and sync gateway.

use std::collections::BTreeMap;

use thiserror::Error;

/// Result type alias for sequence operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur while editing or syncing sequences.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Transport-level failure: the request never completed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid header value while building the client.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Non-success response that carried no recognized error body.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Create/update rejected with per-field validation messages.
    #[error("{}", render_field_errors(.fields))]
    Validation { fields: BTreeMap<String, String> },

    /// Delete refused by the server, with its reason verbatim.
    #[error("{0}")]
    Refused(String),

    /// Index out of bounds for step-body operations.
    #[error("Index {index} out of bounds for body of length {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    /// No sequence at the given position in the working collection.
    #[error("No sequence at index {0}")]
    SequenceNotFound(usize),

    /// A command targeting the current sequence ran with none selected.
    #[error("No sequence selected")]
    NoSelection,

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Joins a field-error map into one display string, in field order.
fn render_field_errors(fields: &BTreeMap<String, String>) -> String {
    fields
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl SyncError {
    /// Creates an Api error from a response status and body text.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Creates a Validation error from a field-error map.
    pub fn validation(fields: BTreeMap<String, String>) -> Self {
        Self::Validation { fields }
    }

    /// Creates a Refused error carrying the server's reason.
    pub fn refused(reason: impl Into<String>) -> Self {
        Self::Refused(reason.into())
    }

    /// Creates an IndexOutOfBounds error.
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }

    /// Creates a Serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_joins_fields_in_order() {
        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), "is too long".to_string());
        fields.insert("body".to_string(), "is invalid".to_string());

        let err = SyncError::validation(fields);
        assert_eq!(err.to_string(), "body: is invalid, name: is too long");
    }

    #[test]
    fn refused_display_is_verbatim() {
        let err = SyncError::refused("Sequence is still in use by Regimen 4");
        assert_eq!(err.to_string(), "Sequence is still in use by Regimen 4");
    }

    #[test]
    fn index_display_names_both_parts() {
        let err = SyncError::index_out_of_bounds(5, 2);
        assert_eq!(
            err.to_string(),
            "Index 5 out of bounds for body of length 2"
        );
    }
}
