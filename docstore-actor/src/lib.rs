//! Actor-based document store for docstore.
//!
//! This crate provides the message-passing discipline: one [`StoreActor`] owns the
//! document map and every other task reaches it only through a [`StoreHandle`].
//! Requests travel over a bounded many-to-one inbox, each carrying its own one-shot
//! reply slot, and are processed strictly one at a time in receipt order. No locks are
//! involved; the total processing order is observable through [`Outcome::sequence`].
//!
//! # Quick Start
//!
//! ```ignore
//! use docstore::{prelude::*, actor::StoreActor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = StoreActor::builder().build().await?;
//!
//!     store.create(Document::new("a", "x")).await?;
//!     assert_eq!(store.read("a").await?, Some(Document::new("a", "x")));
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as docstore_actor;

pub mod actor;
pub mod envelope;
pub mod handle;

pub use actor::{StoreActor, StoreActorBuilder, DEFAULT_MAILBOX_CAPACITY};
pub use envelope::{Action, Outcome, PendingRequest, RequestEnvelope};
pub use handle::StoreHandle;
