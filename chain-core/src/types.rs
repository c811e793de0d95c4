//! Core types: request, outcome, successor link, and Handler trait.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChainError, Result};

/// An incoming request: identifier, raw payload, and origin address. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    id: String,
    /// Payload as received; `None` when the caller sent no payload at all.
    #[serde(default, rename = "payload", skip_serializing_if = "Option::is_none")]
    raw_payload: Option<String>,
    origin: String,
}

impl Request {
    /// Creates a request with the given id, raw (untrimmed) payload and origin.
    pub fn new(
        id: impl Into<String>,
        raw_payload: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            raw_payload: Some(raw_payload.into()),
            origin: origin.into(),
        }
    }

    /// Creates a request that carries no payload.
    pub fn without_payload(id: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            raw_payload: None,
            origin: origin.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Normalized payload: trimmed, or empty when absent.
    pub fn payload(&self) -> &str {
        self.raw_payload.as_deref().map(str::trim).unwrap_or("")
    }

    pub fn raw_payload(&self) -> Option<&str> {
        self.raw_payload.as_deref()
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}

/// Terminal result of running a request through the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Request denied; carries the reason.
    Rejected(String),
    /// Short-circuit success from the cache; carries the cached response.
    CacheHit(String),
    /// A stage passed and had no successor wired; carries the stage name.
    Complete(String),
    /// Request went all the way through processing.
    Processed { id: String, payload: String },
}

impl Outcome {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Outcome::Rejected(reason.into())
    }

    pub fn complete(stage: impl Into<String>) -> Self {
        Outcome::Complete(stage.into())
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Rejected(_) => "Rejected",
            Outcome::CacheHit(_) => "CacheHit",
            Outcome::Complete(_) => "Complete",
            Outcome::Processed { .. } => "Processed",
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Rejected(reason) => write!(f, "Rejected: {}", reason),
            Outcome::CacheHit(value) => f.write_str(value),
            Outcome::Complete(stage) => write!(f, "{} Complete", stage),
            Outcome::Processed { id, payload } => {
                write!(f, "Processed: {} with data '{}'", id, payload)
            }
        }
    }
}

/// Serializes `set_next` so the cycle walk and the link it guards happen as one step.
static WIRING: Mutex<()> = Mutex::new(());

/// Forward link from a handler to the next one. Empty until wired; rewiring replaces the link.
#[derive(Default)]
pub struct Successor {
    next: RwLock<Option<Arc<dyn Handler>>>,
}

impl Successor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the wired successor, if any.
    pub fn get(&self) -> Option<Arc<dyn Handler>> {
        self.next
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the successor. Only reachable through [`Handler::set_next`], which checks for cycles.
    pub(crate) fn set(&self, next: Arc<dyn Handler>) {
        *self.next.write().unwrap_or_else(PoisonError::into_inner) = Some(next);
    }

    /// Unlinks the successor, making the owner the end of the chain.
    pub fn clear(&self) {
        *self.next.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn is_set(&self) -> bool {
        self.next
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl fmt::Debug for Successor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(next) => f.debug_tuple("Successor").field(&next.name()).finish(),
            None => f.write_str("Successor(None)"),
        }
    }
}

/// One stage of the chain. Checks the request, then returns a terminal [`Outcome`] or delegates to
/// its successor via [`forward_or_complete`].
#[async_trait]
pub trait Handler: Send + Sync {
    /// The link to the next handler.
    fn successor(&self) -> &Successor;

    /// Processes the request.
    async fn handle(&self, request: &Request) -> Result<Outcome>;

    /// True for handlers that never consult their successor (terminal by design). Others end the
    /// chain only when nothing is wired after them.
    fn is_terminal(&self) -> bool {
        false
    }

    /// Name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Links `next` as this handler's successor and returns `next`, so calls can be chained:
    /// `a.set_next(b)?.set_next(c)?` wires a→b→c. A second call replaces the previous link.
    /// Fails with [`ChainError::Cycle`] if this handler is reachable from `next`.
    /// Concurrent wiring is serialized, so two racing calls cannot close a loop between them.
    fn set_next(&self, next: Arc<dyn Handler>) -> Result<Arc<dyn Handler>> {
        let _wiring = WIRING.lock().unwrap_or_else(PoisonError::into_inner);
        let this = (self as *const Self).cast::<()>();
        let mut cursor = Some(next.clone());
        while let Some(node) = cursor {
            if Arc::as_ptr(&node).cast::<()>() == this {
                return Err(ChainError::Cycle {
                    handler: self.name().to_string(),
                });
            }
            cursor = node.successor().get();
        }
        self.successor().set(next.clone());
        Ok(next)
    }
}

/// Hands the request to the successor if one is wired; otherwise ends the chain with
/// `Outcome::Complete(stage)`.
pub async fn forward_or_complete(
    successor: &Successor,
    request: &Request,
    stage: &str,
) -> Result<Outcome> {
    match successor.get() {
        Some(next) => {
            debug!(
                request_id = %request.id(),
                stage = %stage,
                next = %next.name(),
                "step: forwarding to successor"
            );
            next.handle(request).await
        }
        None => {
            debug!(
                request_id = %request.id(),
                stage = %stage,
                "step: no successor, stage completes the chain"
            );
            Ok(Outcome::complete(stage))
        }
    }
}
