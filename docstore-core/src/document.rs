//! The stored unit of data.

use serde::{Deserialize, Serialize};

use crate::error::{DocumentStoreError, DocumentStoreResult};

/// A document keyed by a unique, non-empty identifier.
///
/// Documents are immutable values. Changing a stored document means replacing the
/// value held for its id; stores always keep their own copy, so a caller's value is
/// never aliased by the store.
///
/// The JSON representation is `{"id": ..., "data": ...}`.
///
/// # Example
///
/// ```
/// use docstore_core::document::Document;
///
/// let doc = Document::new("a", "x");
/// assert_eq!(doc.id(), "a");
/// assert_eq!(doc.data(), "x");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document {
    /// The unique key of the document.
    pub id: String,
    /// The document payload.
    pub data: String,
}

impl Document {
    /// Creates a new document from an id and a payload.
    pub fn new(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: data.into(),
        }
    }

    /// Returns the document's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the document's payload.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Checks that the document can be stored.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::InvalidDocument`] if the id is empty.
    pub fn validate(&self) -> DocumentStoreResult<()> {
        if self.id.is_empty() {
            return Err(DocumentStoreError::InvalidDocument(
                "document id must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Decodes a document from raw JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid JSON document.
    pub fn from_slice(bytes: &[u8]) -> DocumentStoreResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_id_is_rejected() {
        let err = Document::new("", "x").validate().unwrap_err();
        assert!(matches!(err, DocumentStoreError::InvalidDocument(_)));
        assert!(Document::new("a", "").validate().is_ok());
    }

    #[test]
    fn json_shape_uses_id_and_data() {
        let value = serde_json::to_value(Document::new("a", "x")).unwrap();
        assert_eq!(value, serde_json::json!({ "id": "a", "data": "x" }));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = Document::from_slice(b"{\"id\": 7}").unwrap_err();
        assert!(matches!(err, DocumentStoreError::Serialization(_)));
    }
}
