//! Lock-based in-memory document store for docstore.
//!
//! This crate provides a thread-safe implementation of the `StoreBackend` trait in
//! which every caller accesses one shared map directly. A single async-aware
//! read-write lock guards the whole map: reads share it, writes hold it exclusively.
//!
//! # Quick Start
//!
//! ```ignore
//! use docstore::{prelude::*, memory::DocumentStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = DocumentStore::builder().build().await?;
//!
//!     store.create(Document::new("a", "x")).await?;
//!     assert!(store.update(Document::new("a", "y")).await?);
//!     assert!(store.delete("a").await?);
//!     assert!(!store.exists("a").await?);
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as docstore_memory;

pub mod store;

pub use store::{DocumentStore, DocumentStoreBuilder};
