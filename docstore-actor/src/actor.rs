//! The single-owner store actor and its builder.
//!
//! The actor owns its [`DocumentMap`] outright and is the only code that touches it.
//! Requests arrive on a bounded many-to-one inbox and are processed one at a time in
//! receipt order, which gives every operation a position in one total order without
//! any locking.

use std::time::Duration;

use async_trait::async_trait;
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::Instrument;

use docstore_core::{
    backend::StoreBackendBuilder,
    document::Document,
    error::{DocumentStoreError, DocumentStoreResult},
    map::{CreateOutcome, DocumentMap},
};

use crate::{
    envelope::{Action, Outcome, RequestEnvelope},
    handle::StoreHandle,
};

/// Inbox capacity used when none is configured.
pub const DEFAULT_MAILBOX_CAPACITY: usize = 64;

/// Worker that serializes every store operation through one loop.
///
/// The actor has a single state, ready to receive. It stops once every
/// [`StoreHandle`] connected to its inbox has been dropped and hands back the map it
/// owned.
///
/// # Example
///
/// ```ignore
/// use docstore_actor::StoreActor;
/// use docstore_core::{backend::StoreBackend, document::Document};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let (actor, handle) = StoreActor::new(16)?;
///     let worker = actor.spawn();
///
///     handle.create(Document::new("a", "x")).await?;
///     drop(handle);
///
///     let map = worker.await?;
///     assert!(map.exists("a"));
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct StoreActor {
    documents: DocumentMap,
    inbox: mpsc::Receiver<RequestEnvelope>,
    processed: u64,
}

impl StoreActor {
    /// Creates an actor with an empty map and a connected handle.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::Initialization`] if `mailbox_capacity` is zero.
    pub fn new(mailbox_capacity: usize) -> DocumentStoreResult<(Self, StoreHandle)> {
        StoreActor::builder()
            .with_mailbox_capacity(mailbox_capacity)
            .build_actor()
    }

    /// Creates a builder for constructing an actor with custom options.
    pub fn builder() -> StoreActorBuilder {
        StoreActorBuilder::default()
    }

    /// Processes requests until every handle has been dropped, then returns the map.
    pub async fn run(mut self) -> DocumentMap {
        tracing::info!("store actor started");

        while let Some(envelope) = self.inbox.recv().await {
            self.process(envelope);
        }

        tracing::info!(processed = self.processed, "store actor stopped");
        self.documents
    }

    /// Runs the actor on the current tokio runtime.
    pub fn spawn(self) -> JoinHandle<DocumentMap> {
        tokio::spawn(self.run().instrument(tracing::info_span!("store_actor")))
    }

    fn process(&mut self, envelope: RequestEnvelope) {
        let RequestEnvelope {
            action,
            document,
            reply,
        } = envelope;

        let sequence = self.processed;
        self.processed += 1;

        let (success, documents) = self.apply(action, document);
        tracing::trace!(sequence, ?action, success, "processed request");

        // Never blocks: a caller that stopped waiting only costs us this failed send.
        let outcome = Outcome {
            success,
            documents,
            sequence,
        };
        if reply.send(outcome).is_err() {
            tracing::warn!(sequence, ?action, "caller abandoned request before the reply was sent");
        }
    }

    fn apply(&mut self, action: Action, document: Document) -> (bool, Vec<Document>) {
        match action {
            Action::Exists => (self.documents.exists(&document.id), Vec::new()),
            Action::Read => match self.documents.read(&document.id) {
                Some(found) => (true, vec![found]),
                None => (false, Vec::new()),
            },
            Action::Delete => (self.documents.delete(&document.id), Vec::new()),
            Action::List => (true, self.documents.list()),
            Action::Create | Action::CreateIfAbsent | Action::Update
                if document.validate().is_err() =>
            {
                tracing::warn!(?action, "rejected document with an empty id");
                (false, Vec::new())
            }
            Action::Create => (self.documents.create(document), Vec::new()),
            Action::CreateIfAbsent => match self.documents.create_if_absent(document) {
                CreateOutcome::Inserted => (true, Vec::new()),
                CreateOutcome::Existing(existing) => (false, vec![existing]),
            },
            Action::Update => (self.documents.update(document), Vec::new()),
        }
    }
}

/// Builder for constructing a [`StoreActor`] and its [`StoreHandle`].
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use docstore_actor::StoreActor;
/// use docstore_core::backend::StoreBackendBuilder;
///
/// #[tokio::main]
/// async fn main() {
///     let handle = StoreActor::builder()
///         .with_mailbox_capacity(128)
///         .with_request_timeout(Duration::from_secs(5))
///         .build()
///         .await
///         .unwrap();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct StoreActorBuilder {
    mailbox_capacity: usize,
    request_timeout: Option<Duration>,
    documents: DocumentMap,
}

impl Default for StoreActorBuilder {
    fn default() -> Self {
        Self {
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            request_timeout: None,
            documents: DocumentMap::new(),
        }
    }
}

impl StoreActorBuilder {
    /// Sets how many requests may wait in the inbox before senders are made to wait.
    pub fn with_mailbox_capacity(mut self, capacity: usize) -> Self {
        self.mailbox_capacity = capacity;
        self
    }

    /// Bounds how long a caller waits for its request to be accepted and answered.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Seeds the actor with an existing map.
    pub fn with_documents(mut self, documents: DocumentMap) -> Self {
        self.documents = documents;
        self
    }

    /// Creates the actor and a connected handle without starting the actor.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::Initialization`] if the mailbox capacity is zero.
    pub fn build_actor(self) -> DocumentStoreResult<(StoreActor, StoreHandle)> {
        if self.mailbox_capacity == 0 {
            return Err(DocumentStoreError::Initialization(
                "mailbox capacity must be greater than zero".to_string(),
            ));
        }

        let (sender, inbox) = mpsc::channel(self.mailbox_capacity);
        let actor = StoreActor {
            documents: self.documents,
            inbox,
            processed: 0,
        };

        Ok((actor, StoreHandle::new(sender, self.request_timeout)))
    }
}

#[async_trait]
impl StoreBackendBuilder for StoreActorBuilder {
    type Backend = StoreHandle;

    /// Spawns the actor on the current tokio runtime and returns a handle to it.
    async fn build(self) -> DocumentStoreResult<Self::Backend> {
        let (actor, handle) = self.build_actor()?;
        actor.spawn();

        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::PendingRequest;

    #[test]
    fn zero_capacity_is_rejected() {
        let err = StoreActor::new(0).unwrap_err();
        assert!(matches!(err, DocumentStoreError::Initialization(_)));
    }

    #[tokio::test]
    async fn replies_in_receipt_order() {
        let (mut actor, _handle) = StoreActor::new(8).unwrap();

        let PendingRequest {
            envelope: create,
            reply: created,
        } = RequestEnvelope::new(Action::Create, Document::new("a", "x"));
        let PendingRequest {
            envelope: read,
            reply: read_reply,
        } = RequestEnvelope::for_id(Action::Read, "a");
        actor.process(create);
        actor.process(read);

        let created = created.await.unwrap();
        let read_reply = read_reply.await.unwrap();
        assert_eq!(created.sequence, 0);
        assert!(created.success);
        assert_eq!(read_reply.sequence, 1);
        assert_eq!(read_reply.documents, vec![Document::new("a", "x")]);
    }

    #[tokio::test]
    async fn abandoned_reply_does_not_stall_the_actor() {
        let (mut actor, _handle) = StoreActor::new(8).unwrap();

        let PendingRequest { envelope, reply } =
            RequestEnvelope::new(Action::Create, Document::new("a", "x"));
        drop(reply);
        actor.process(envelope);

        let PendingRequest { envelope, reply } = RequestEnvelope::for_id(Action::Read, "a");
        actor.process(envelope);
        let outcome = reply.await.unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.sequence, 1);
    }

    #[tokio::test]
    async fn empty_id_is_answered_with_failure() {
        let (mut actor, _handle) = StoreActor::new(8).unwrap();

        let PendingRequest { envelope, reply } =
            RequestEnvelope::new(Action::Create, Document::new("", "x"));
        actor.process(envelope);

        assert!(!reply.await.unwrap().success);
        assert!(actor.documents.is_empty());
    }

    #[tokio::test]
    async fn dropped_envelope_is_reported_to_the_caller() {
        use docstore_core::backend::StoreBackend;

        let (mut actor, handle) = StoreActor::new(4).unwrap();
        let caller = tokio::spawn(async move { handle.exists("a").await });

        let envelope = actor.inbox.recv().await.unwrap();
        drop(envelope);

        let result = caller.await.unwrap();
        assert!(matches!(result, Err(DocumentStoreError::ReplyDropped)));
    }
}
