//! Convenient re-exports of commonly used types from docstore.
//!
//! ```ignore
//! use docstore::prelude::*;
//! ```
//!
//! [`DynStoreBackend`](crate::backend::DynStoreBackend) is not re-exported here. It
//! shares method names with [`StoreBackend`], and importing both makes calls on a
//! concrete store ambiguous.

pub use docstore_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::Document,
    map::{CreateOutcome, DocumentMap},
    error::{DocumentStoreError, DocumentStoreResult},
};
