//! Main docstore crate providing a unified interface for in-memory document storage.
//!
//! This crate is the primary entry point for users of docstore. It re-exports the
//! core types and both access disciplines:
//!
//! - [`memory`] - a lock-guarded map shared by all callers
//! - [`actor`] - a single-owner actor reached by message passing
//!
//! Both implement [`StoreBackend`](backend::StoreBackend), so calling code is
//! written once and a deployment picks one discipline.
//!
//! # Quick Start
//!
//! ```ignore
//! use docstore::{prelude::*, memory::DocumentStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = DocumentStore::builder().build().await.unwrap();
//!
//!     store.create(Document::new("a", "x")).await.unwrap();
//!     println!("{:?}", store.list().await.unwrap());
//! }
//! ```
//!
//! # Dynamic Dispatch
//!
//! When the discipline is chosen at runtime, box the backend as a
//! [`DynStoreBackend`](backend::DynStoreBackend):
//!
//! ```ignore
//! use std::sync::Arc;
//! use docstore::{backend::DynStoreBackend, actor::StoreActor, memory::DocumentStore, prelude::StoreBackendBuilder};
//!
//! #[tokio::main]
//! async fn main() {
//!     let use_actor = std::env::args().any(|arg| arg == "--actor");
//!     let store: Arc<dyn DynStoreBackend> = if use_actor {
//!         Arc::new(StoreActor::builder().build().await.unwrap())
//!     } else {
//!         Arc::new(DocumentStore::builder().build().await.unwrap())
//!     };
//!
//!     println!("{} documents", store.list().await.unwrap().len());
//! }
//! ```

pub mod prelude;

pub use docstore_core::{backend, document, error, map};

/// Lock-based store implementation.
pub mod memory {
    pub use docstore_memory::{DocumentStore, DocumentStoreBuilder};
}

/// Actor-based store implementation.
pub mod actor {
    pub use docstore_actor::{
        Action, DEFAULT_MAILBOX_CAPACITY, Outcome, PendingRequest, RequestEnvelope, StoreActor,
        StoreActorBuilder, StoreHandle,
    };
}
