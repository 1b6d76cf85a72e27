//! Core types for an in-memory document store with pluggable access disciplines.
//!
//! This crate is the core of the docstore project and provides:
//!
//! - **Documents** ([`document`]) - The stored unit of data and its JSON form
//! - **Document map** ([`map`]) - The unsynchronized map holding the semantics of every operation
//! - **Store backend abstraction** ([`backend`]) - The contract shared by the lock-based store and the actor
//! - **Error handling** ([`error`]) - Error types and result types
//!
//! # Example
//!
//! ```
//! use docstore_core::{document::Document, map::DocumentMap};
//!
//! let mut map = DocumentMap::new();
//! map.create(Document::new("a", "x"));
//! assert_eq!(map.read("a"), Some(Document::new("a", "x")));
//! ```

#[allow(unused_extern_crates)]
extern crate self as docstore_core;

pub mod backend;
pub mod document;
pub mod error;
pub mod map;
