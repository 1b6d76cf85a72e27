//! Request and reply types exchanged with the store actor.

use tokio::sync::oneshot;

use docstore_core::document::Document;

/// The operation a [`RequestEnvelope`] asks the actor to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Exists,
    Create,
    CreateIfAbsent,
    Read,
    Update,
    Delete,
    List,
}

/// The actor's reply to a single [`RequestEnvelope`].
///
/// `success` is action specific:
///
/// | action | `success` | `documents` |
/// |--------|-----------|-------------|
/// | `Exists` | the id is present | empty |
/// | `Create` | always `true` | empty |
/// | `CreateIfAbsent` | the document was inserted | the blocking document when not inserted |
/// | `Read` | the id is present | the stored document when found |
/// | `Update` | the id was present and replaced | empty |
/// | `Delete` | always `true` | empty |
/// | `List` | always `true` | every stored document, possibly none |
///
/// A request carrying a document with an empty id is answered with `success == false`
/// and leaves the map untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub success: bool,
    pub documents: Vec<Document>,
    /// Position of the request in the actor's processing order, starting at zero.
    pub sequence: u64,
}

/// A single request to the store actor together with its private reply slot.
///
/// The reply slot is a one-shot channel created fresh for every request. Sending on
/// it consumes the sender, so the actor can answer a request at most once.
#[derive(Debug)]
pub struct RequestEnvelope {
    pub action: Action,
    /// The full document for `Create`, `CreateIfAbsent` and `Update`; only the id is
    /// used for `Exists`, `Read` and `Delete`; ignored for `List`.
    pub document: Document,
    pub reply: oneshot::Sender<Outcome>,
}

impl RequestEnvelope {
    /// Builds an envelope paired with the receiving end of its own reply slot.
    pub fn new(action: Action, document: Document) -> PendingRequest {
        let (reply, receiver) = oneshot::channel();
        PendingRequest {
            envelope: Self {
                action,
                document,
                reply,
            },
            reply: receiver,
        }
    }

    /// Builds an envelope for an id-only action such as `Read` or `Delete`.
    pub fn for_id(action: Action, id: impl Into<String>) -> PendingRequest {
        Self::new(action, Document::new(id, String::new()))
    }

    /// Builds an envelope for `List`.
    pub fn list() -> PendingRequest {
        Self::new(Action::List, Document::new(String::new(), String::new()))
    }
}

/// An envelope that has not been sent yet, bound to the receiver of its reply.
///
/// The two halves can only be separated inside this crate, so
/// [`StoreHandle::send`](crate::StoreHandle::send) always waits on the reply that
/// belongs to the envelope it delivered.
#[derive(Debug)]
pub struct PendingRequest {
    pub(crate) envelope: RequestEnvelope,
    pub(crate) reply: oneshot::Receiver<Outcome>,
}

impl PendingRequest {
    /// The action this request asks for.
    pub fn action(&self) -> Action {
        self.envelope.action
    }
}
