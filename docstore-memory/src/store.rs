//! Lock-guarded in-memory document store.
//!
//! This module provides the shared-state discipline: a single [`DocumentMap`] behind
//! one async-aware read-write lock, accessed directly by any number of concurrent
//! callers.

use std::sync::Arc;
use async_trait::async_trait;
use mea::rwlock::RwLock;

use docstore_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::Document,
    error::DocumentStoreResult,
    map::{CreateOutcome, DocumentMap},
};

/// Thread-safe in-memory document store guarded by a single read-write lock.
///
/// # Locking
///
/// `exists`, `read` and `list` take the lock in shared mode. `create`,
/// `create_if_absent`, `update` and `delete` take it in exclusive mode. The lock is
/// held only for the map access itself, never across another await point, and no
/// operation acquires it more than once: `update` checks for the id and writes under
/// the same exclusive guard.
///
/// # Thread Safety
///
/// `DocumentStore` is cloneable and uses an `Arc`-wrapped internal state. Multiple
/// clones of the same instance share the same underlying map.
///
/// # Example
///
/// ```ignore
/// use docstore_memory::DocumentStore;
/// use docstore_core::{backend::StoreBackend, document::Document};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = DocumentStore::new();
///
///     store.create(Document::new("a", "x")).await?;
///     assert_eq!(store.read("a").await?, Some(Document::new("a", "x")));
///
///     Ok(())
/// }
/// ```
#[derive(Default, Clone, Debug)]
pub struct DocumentStore {
    documents: Arc<RwLock<DocumentMap>>,
}

impl DocumentStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::from_map(DocumentMap::new())
    }

    /// Creates a store that starts out holding the documents in `map`.
    pub fn from_map(map: DocumentMap) -> Self {
        Self {
            documents: Arc::new(RwLock::new(map)),
        }
    }

    /// Creates a builder for constructing a `DocumentStore` with custom options.
    pub fn builder() -> DocumentStoreBuilder {
        DocumentStoreBuilder::default()
    }

    /// Returns the number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl StoreBackend for DocumentStore {
    async fn exists(&self, id: &str) -> DocumentStoreResult<bool> {
        let exists = self.documents.read().await.exists(id);
        tracing::debug!(id, exists, "check document");

        Ok(exists)
    }

    async fn read(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        let document = self.documents.read().await.read(id);
        tracing::debug!(id, found = document.is_some(), "read document");

        Ok(document)
    }

    async fn create(&self, document: Document) -> DocumentStoreResult<bool> {
        document.validate()?;
        tracing::debug!(id = %document.id, "create document");

        Ok(self.documents.write().await.create(document))
    }

    async fn create_if_absent(&self, document: Document) -> DocumentStoreResult<CreateOutcome> {
        document.validate()?;
        let id = document.id.clone();
        let outcome = self.documents.write().await.create_if_absent(document);
        tracing::debug!(id = %id, inserted = outcome.is_inserted(), "create document if absent");

        Ok(outcome)
    }

    async fn update(&self, document: Document) -> DocumentStoreResult<bool> {
        document.validate()?;
        let id = document.id.clone();
        let updated = self.documents.write().await.update(document);
        tracing::debug!(id = %id, updated, "update document");

        Ok(updated)
    }

    async fn delete(&self, id: &str) -> DocumentStoreResult<bool> {
        tracing::debug!(id, "delete document");

        Ok(self.documents.write().await.delete(id))
    }

    async fn list(&self) -> DocumentStoreResult<Vec<Document>> {
        let documents = self.documents.read().await.list();
        tracing::debug!(count = documents.len(), "list documents");

        Ok(documents)
    }
}

/// Builder for constructing [`DocumentStore`] instances.
///
/// # Example
///
/// ```ignore
/// use docstore_memory::DocumentStore;
/// use docstore_core::backend::StoreBackendBuilder;
///
/// #[tokio::main]
/// async fn main() {
///     let store = DocumentStore::builder().with_capacity(1024).build().await.unwrap();
/// }
/// ```
#[derive(Default, Debug, Clone)]
pub struct DocumentStoreBuilder {
    capacity: Option<usize>,
}

impl DocumentStoreBuilder {
    /// Pre-allocates room for at least `capacity` documents.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }
}

#[async_trait]
impl StoreBackendBuilder for DocumentStoreBuilder {
    type Backend = DocumentStore;

    /// Builds and returns a new [`DocumentStore`] instance.
    ///
    /// This always succeeds and returns a freshly initialized store.
    async fn build(self) -> DocumentStoreResult<Self::Backend> {
        let map = match self.capacity {
            Some(capacity) => DocumentMap::with_capacity(capacity),
            None => DocumentMap::new(),
        };

        Ok(DocumentStore::from_map(map))
    }
}
