//! Error types and result types for document store operations.
//!
//! Expected conditions such as a missing id or an empty store are never reported
//! through [`DocumentStoreError`]; store operations return `false` or `None` for those.
//! Errors are reserved for invalid input and for faults in the transport between a
//! caller and the store (for example a stopped actor or an expired reply wait).

use std::time::Duration;

use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents all possible errors that can occur when interacting with a document store.
#[derive(Error, Debug)]
pub enum DocumentStoreError {
    /// Serialization/deserialization error when converting documents to or from JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Error during store construction or configuration.
    #[error("Initialization error: {0}")]
    Initialization(String),
    /// The document has an invalid structure, such as an empty id.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    /// A document with the given id already exists but could not be returned.
    #[error("Document {0} already exists")]
    DocumentAlreadyExists(String),
    /// The store actor is no longer accepting requests.
    #[error("Store actor has stopped")]
    ActorStopped,
    /// The store actor discarded a request without replying to it.
    #[error("Store actor dropped the reply channel without responding")]
    ReplyDropped,
    /// The store actor's inbox stayed full for the configured request timeout. The
    /// request was never accepted and will not be applied.
    #[error("Store actor inbox stayed full for {0:?}; request was not accepted")]
    ActorBusy(Duration),
    /// The request was accepted but no reply arrived within the configured request
    /// timeout. The store still applies it.
    #[error("Timed out after {0:?} waiting for the store to reply")]
    Timeout(Duration),
}

/// A specialized `Result` type for document store operations.
pub type DocumentStoreResult<T> = Result<T, DocumentStoreError>;

impl From<SerdeJsonError> for DocumentStoreError {
    fn from(err: SerdeJsonError) -> Self {
        DocumentStoreError::Serialization(err.to_string())
    }
}
