//! Unsynchronized document map shared by every access discipline.
//!
//! [`DocumentMap`] holds the semantics of each store operation. It performs no
//! locking of its own: the lock-based store wraps it in a read-write lock and the
//! actor owns it outright, so both disciplines answer every operation identically.

use std::collections::HashMap;

use crate::document::Document;

/// Result of an atomic insert-if-absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The document was stored.
    Inserted,
    /// A document with the same id was already stored and was left untouched.
    Existing(Document),
}

impl CreateOutcome {
    /// Returns `true` if the document was stored.
    pub fn is_inserted(&self) -> bool {
        matches!(self, CreateOutcome::Inserted)
    }
}

/// Mapping from document id to document, holding at most one document per id.
#[derive(Debug, Default, Clone)]
pub struct DocumentMap {
    documents: HashMap<String, Document>,
}

impl DocumentMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for at least `capacity` documents.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            documents: HashMap::with_capacity(capacity),
        }
    }

    pub fn exists(&self, id: &str) -> bool {
        self.documents.contains_key(id)
    }

    /// Returns a copy of the stored document, or `None` if the id is absent.
    pub fn read(&self, id: &str) -> Option<Document> {
        self.documents.get(id).cloned()
    }

    /// Inserts the document, replacing any previous document with the same id.
    ///
    /// Always returns `true`.
    pub fn create(&mut self, document: Document) -> bool {
        self.documents.insert(document.id.clone(), document);
        true
    }

    /// Inserts the document only if its id is not already present.
    pub fn create_if_absent(&mut self, document: Document) -> CreateOutcome {
        match self.documents.get(&document.id) {
            Some(existing) => CreateOutcome::Existing(existing.clone()),
            None => {
                self.documents.insert(document.id.clone(), document);
                CreateOutcome::Inserted
            }
        }
    }

    /// Replaces the stored document if its id is present.
    ///
    /// Returns `false` and leaves the map unchanged when the id is absent.
    pub fn update(&mut self, document: Document) -> bool {
        match self.documents.get_mut(&document.id) {
            Some(slot) => {
                *slot = document;
                true
            }
            None => false,
        }
    }

    /// Removes the document if present.
    ///
    /// Always returns `true`; deleting an absent id is not an error.
    pub fn delete(&mut self, id: &str) -> bool {
        self.documents.remove(id);
        true
    }

    /// Returns a snapshot of every stored document in unspecified order.
    pub fn list(&self) -> Vec<Document> {
        self.documents.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
