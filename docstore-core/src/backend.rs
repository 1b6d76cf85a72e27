//! Storage backend abstraction for the document store.
//!
//! This module defines the contract shared by every access discipline. A deployment
//! picks exactly one implementation (the lock-guarded store or the actor handle) and
//! talks to it through [`StoreBackend`], so callers never depend on how access to the
//! underlying map is serialized.
//!
//! # Traits
//!
//! - [`StoreBackend`]: The core trait for storage backends
//! - [`DynStoreBackend`]: A trait for dynamic dispatch over backend implementations
//! - [`StoreBackendBuilder`]: Factory trait for creating backend instances
//!
//! # Examples
//!
//! ```ignore
//! use docstore::prelude::*;
//!
//! async fn rename<B: StoreBackend>(backend: &B) -> DocumentStoreResult<bool> {
//!     backend.update(Document::new("a", "renamed")).await
//! }
//! ```

use async_trait::async_trait;
use std::{any::Any, fmt::Debug, sync::Arc};

use crate::{
    document::Document,
    error::DocumentStoreResult,
    map::CreateOutcome,
};

/// Abstract interface for document storage backends.
///
/// # Thread Safety
///
/// Every operation may be called concurrently from any number of tasks. Writers are
/// mutually exclusive and a reader observes a state consistent with some serialization
/// of the writers. Implementations document the ordering guarantees they add on top.
///
/// # Error Handling
///
/// A missing id or an empty store are ordinary results (`false`, `None`, an empty
/// vector), never errors. `Err` signals invalid input or a transport fault.
#[async_trait]
pub trait StoreBackend: Send + Sync + Debug {
    /// Returns `true` iff a document with `id` is currently stored.
    async fn exists(&self, id: &str) -> DocumentStoreResult<bool>;

    /// Returns a copy of the stored document, or `None` if `id` is absent.
    async fn read(&self, id: &str) -> DocumentStoreResult<Option<Document>>;

    /// Inserts the document, unconditionally overwriting any document with the same id.
    ///
    /// Returns `Ok(true)` on success.
    async fn create(&self, document: Document) -> DocumentStoreResult<bool>;

    /// Inserts the document only if no document with the same id is stored.
    ///
    /// The presence check and the insert happen atomically, so concurrent callers
    /// racing on one id see exactly one [`CreateOutcome::Inserted`].
    async fn create_if_absent(&self, document: Document) -> DocumentStoreResult<CreateOutcome>;

    /// Replaces the stored document with the same id.
    ///
    /// Returns `Ok(false)` and leaves the store unchanged when the id is absent.
    async fn update(&self, document: Document) -> DocumentStoreResult<bool>;

    /// Removes the document with `id`.
    ///
    /// Returns `Ok(true)` whether or not the id was present.
    async fn delete(&self, id: &str) -> DocumentStoreResult<bool>;

    /// Returns a snapshot of every stored document in unspecified order.
    ///
    /// An empty vector means the store is empty.
    async fn list(&self) -> DocumentStoreResult<Vec<Document>>;

    /// Releases the caller's access to the backend.
    async fn shutdown(self) -> DocumentStoreResult<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

#[async_trait]
impl<B> StoreBackend for &B
where
    B: StoreBackend,
{
    async fn exists(&self, id: &str) -> DocumentStoreResult<bool> {
        StoreBackend::exists(*self, id).await
    }

    async fn read(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        StoreBackend::read(*self, id).await
    }

    async fn create(&self, document: Document) -> DocumentStoreResult<bool> {
        StoreBackend::create(*self, document).await
    }

    async fn create_if_absent(&self, document: Document) -> DocumentStoreResult<CreateOutcome> {
        StoreBackend::create_if_absent(*self, document).await
    }

    async fn update(&self, document: Document) -> DocumentStoreResult<bool> {
        StoreBackend::update(*self, document).await
    }

    async fn delete(&self, id: &str) -> DocumentStoreResult<bool> {
        StoreBackend::delete(*self, id).await
    }

    async fn list(&self) -> DocumentStoreResult<Vec<Document>> {
        StoreBackend::list(*self).await
    }
}

#[async_trait]
impl<B> StoreBackend for &mut B
where
    B: StoreBackend,
{
    async fn exists(&self, id: &str) -> DocumentStoreResult<bool> {
        StoreBackend::exists(&**self, id).await
    }

    async fn read(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        StoreBackend::read(&**self, id).await
    }

    async fn create(&self, document: Document) -> DocumentStoreResult<bool> {
        StoreBackend::create(&**self, document).await
    }

    async fn create_if_absent(&self, document: Document) -> DocumentStoreResult<CreateOutcome> {
        StoreBackend::create_if_absent(&**self, document).await
    }

    async fn update(&self, document: Document) -> DocumentStoreResult<bool> {
        StoreBackend::update(&**self, document).await
    }

    async fn delete(&self, id: &str) -> DocumentStoreResult<bool> {
        StoreBackend::delete(&**self, id).await
    }

    async fn list(&self) -> DocumentStoreResult<Vec<Document>> {
        StoreBackend::list(&**self).await
    }
}

#[async_trait]
impl<B> StoreBackend for Arc<B>
where
    B: StoreBackend,
{
    async fn exists(&self, id: &str) -> DocumentStoreResult<bool> {
        StoreBackend::exists(&**self, id).await
    }

    async fn read(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        StoreBackend::read(&**self, id).await
    }

    async fn create(&self, document: Document) -> DocumentStoreResult<bool> {
        StoreBackend::create(&**self, document).await
    }

    async fn create_if_absent(&self, document: Document) -> DocumentStoreResult<CreateOutcome> {
        StoreBackend::create_if_absent(&**self, document).await
    }

    async fn update(&self, document: Document) -> DocumentStoreResult<bool> {
        StoreBackend::update(&**self, document).await
    }

    async fn delete(&self, id: &str) -> DocumentStoreResult<bool> {
        StoreBackend::delete(&**self, id).await
    }

    async fn list(&self) -> DocumentStoreResult<Vec<Document>> {
        StoreBackend::list(&**self).await
    }
}

/// Object-safe counterpart of [`StoreBackend`] for selecting a backend at runtime.
///
/// Every [`StoreBackend`] that is `'static` implements this trait automatically.
#[async_trait]
pub trait DynStoreBackend: Send + Sync + Debug {
    async fn exists(&self, id: &str) -> DocumentStoreResult<bool>;
    async fn read(&self, id: &str) -> DocumentStoreResult<Option<Document>>;
    async fn create(&self, document: Document) -> DocumentStoreResult<bool>;
    async fn create_if_absent(&self, document: Document) -> DocumentStoreResult<CreateOutcome>;
    async fn update(&self, document: Document) -> DocumentStoreResult<bool>;
    async fn delete(&self, id: &str) -> DocumentStoreResult<bool>;
    async fn list(&self) -> DocumentStoreResult<Vec<Document>>;
    async fn shutdown_boxed(self: Box<Self>) -> DocumentStoreResult<()>;

    /// Returns the backend as `Any` so callers can recover the concrete type.
    fn as_any(&self) -> &dyn Any;
}

#[async_trait]
impl<B: StoreBackend + 'static> DynStoreBackend for B {
    async fn exists(&self, id: &str) -> DocumentStoreResult<bool> {
        StoreBackend::exists(self, id).await
    }

    async fn read(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        StoreBackend::read(self, id).await
    }

    async fn create(&self, document: Document) -> DocumentStoreResult<bool> {
        StoreBackend::create(self, document).await
    }

    async fn create_if_absent(&self, document: Document) -> DocumentStoreResult<CreateOutcome> {
        StoreBackend::create_if_absent(self, document).await
    }

    async fn update(&self, document: Document) -> DocumentStoreResult<bool> {
        StoreBackend::update(self, document).await
    }

    async fn delete(&self, id: &str) -> DocumentStoreResult<bool> {
        StoreBackend::delete(self, id).await
    }

    async fn list(&self) -> DocumentStoreResult<Vec<Document>> {
        StoreBackend::list(self).await
    }

    async fn shutdown_boxed(self: Box<Self>) -> DocumentStoreResult<()> {
        (*self).shutdown().await
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Factory trait for constructing backend instances.
#[async_trait]
pub trait StoreBackendBuilder {
    type Backend: StoreBackend;

    /// Builds the backend.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::Initialization`](crate::error::DocumentStoreError::Initialization)
    /// if the builder's configuration is invalid.
    async fn build(self) -> DocumentStoreResult<Self::Backend>;
}
