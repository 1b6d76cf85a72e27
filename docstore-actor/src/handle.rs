//! Caller-side handle to a running store actor.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use docstore_core::{
    backend::StoreBackend,
    document::Document,
    error::{DocumentStoreError, DocumentStoreResult},
    map::CreateOutcome,
};

use crate::envelope::{Action, Outcome, PendingRequest, RequestEnvelope};

/// Cloneable sender side of a [`StoreActor`](crate::StoreActor)'s inbox.
///
/// Every operation builds a [`RequestEnvelope`] with a fresh reply slot, sends it to
/// the actor and waits for the [`Outcome`]. The send waits while the inbox is full.
///
/// Without a request timeout a caller waits for as long as the actor takes. With one,
/// a send that cannot enter the full inbox in time yields
/// [`DocumentStoreError::ActorBusy`] and is dropped, while an accepted request whose
/// reply is late yields [`DocumentStoreError::Timeout`] and is still applied.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    inbox: mpsc::Sender<RequestEnvelope>,
    request_timeout: Option<Duration>,
}

impl StoreHandle {
    pub(crate) fn new(inbox: mpsc::Sender<RequestEnvelope>, request_timeout: Option<Duration>) -> Self {
        Self {
            inbox,
            request_timeout,
        }
    }

    /// Sends a prepared request and waits for its reply.
    ///
    /// With a request timeout configured, the inbox send and the reply wait are each
    /// bounded by it separately, so the two ways of running out of time stay apart.
    ///
    /// # Errors
    ///
    /// - [`DocumentStoreError::ActorStopped`] if the actor no longer accepts requests
    /// - [`DocumentStoreError::ActorBusy`] if the inbox stayed full for the whole
    ///   timeout; the request was never accepted and will not be applied
    /// - [`DocumentStoreError::ReplyDropped`] if the actor discarded the request unanswered
    /// - [`DocumentStoreError::Timeout`] if the request was accepted but no reply
    ///   arrived in time; the actor still applies it
    pub async fn send(&self, request: PendingRequest) -> DocumentStoreResult<Outcome> {
        let PendingRequest { envelope, reply } = request;
        let action = envelope.action;

        let Some(limit) = self.request_timeout else {
            self.inbox
                .send(envelope)
                .await
                .map_err(|_| DocumentStoreError::ActorStopped)?;

            return reply.await.map_err(|_| DocumentStoreError::ReplyDropped);
        };

        tokio::time::timeout(limit, self.inbox.send(envelope))
            .await
            .map_err(|_| {
                tracing::warn!(?action, ?limit, "store actor inbox stayed full, request not sent");
                DocumentStoreError::ActorBusy(limit)
            })?
            .map_err(|_| DocumentStoreError::ActorStopped)?;

        tokio::time::timeout(limit, reply)
            .await
            .map_err(|_| {
                tracing::warn!(?action, ?limit, "request to store actor timed out");
                DocumentStoreError::Timeout(limit)
            })?
            .map_err(|_| DocumentStoreError::ReplyDropped)
    }

    /// Returns `true` once the actor has stopped accepting requests.
    pub fn is_closed(&self) -> bool {
        self.inbox.is_closed()
    }

    async fn request(&self, action: Action, document: Document) -> DocumentStoreResult<Outcome> {
        self.send(RequestEnvelope::new(action, document)).await
    }

    async fn request_id(&self, action: Action, id: &str) -> DocumentStoreResult<Outcome> {
        self.send(RequestEnvelope::for_id(action, id)).await
    }
}

#[async_trait]
impl StoreBackend for StoreHandle {
    async fn exists(&self, id: &str) -> DocumentStoreResult<bool> {
        Ok(self.request_id(Action::Exists, id).await?.success)
    }

    async fn read(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        let outcome = self.request_id(Action::Read, id).await?;
        if !outcome.success {
            return Ok(None);
        }

        Ok(outcome.documents.into_iter().next())
    }

    async fn create(&self, document: Document) -> DocumentStoreResult<bool> {
        document.validate()?;

        Ok(self.request(Action::Create, document).await?.success)
    }

    async fn create_if_absent(&self, document: Document) -> DocumentStoreResult<CreateOutcome> {
        document.validate()?;
        let id = document.id.clone();
        let outcome = self.request(Action::CreateIfAbsent, document).await?;

        if outcome.success {
            return Ok(CreateOutcome::Inserted);
        }

        outcome
            .documents
            .into_iter()
            .next()
            .map(CreateOutcome::Existing)
            .ok_or(DocumentStoreError::DocumentAlreadyExists(id))
    }

    async fn update(&self, document: Document) -> DocumentStoreResult<bool> {
        document.validate()?;

        Ok(self.request(Action::Update, document).await?.success)
    }

    async fn delete(&self, id: &str) -> DocumentStoreResult<bool> {
        Ok(self.request_id(Action::Delete, id).await?.success)
    }

    async fn list(&self) -> DocumentStoreResult<Vec<Document>> {
        Ok(self.send(RequestEnvelope::list()).await?.documents)
    }

    async fn shutdown(self) -> DocumentStoreResult<()> {
        tracing::debug!("releasing store actor handle");

        Ok(())
    }
}
