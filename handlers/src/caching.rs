//! Answers requests straight from a precomputed response map.

use std::collections::HashMap;

use async_trait::async_trait;
use chain_core::{forward_or_complete, Handler, Outcome, Request, Result, Successor};
use tokio::sync::RwLock;
use tracing::{info, instrument};

pub const CACHE_STAGE: &str = "Cache Check";

/// Entry used by [`CachingHandler::new`]: (request id, cached response).
pub const DEFAULT_CACHE_ENTRY: (&str, &str) = ("123", "Cached Response for request 123");

/// Returns the cached response for a known request id without forwarding, even when a successor is
/// wired. Misses are forwarded.
///
/// Entries sit behind a read/write lock so one handler can serve concurrent requests while the
/// cache is warmed with [`insert`](Self::insert).
#[derive(Debug)]
pub struct CachingHandler {
    entries: RwLock<HashMap<String, String>>,
    next: Successor,
}

impl CachingHandler {
    /// Creates a handler with its own copy of [`DEFAULT_CACHE_ENTRY`].
    pub fn new() -> Self {
        Self::with_entries([DEFAULT_CACHE_ENTRY])
    }

    /// Creates a handler holding exactly the given (id, response) entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
            next: Successor::new(),
        }
    }

    /// Adds or replaces the response for `id`. Returns the previous response, if any.
    pub async fn insert(&self, id: impl Into<String>, response: impl Into<String>) -> Option<String> {
        self.entries.write().await.insert(id.into(), response.into())
    }

    pub async fn remove(&self, id: &str) -> Option<String> {
        self.entries.write().await.remove(id)
    }

    pub async fn get(&self, id: &str) -> Option<String> {
        self.entries.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for CachingHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Handler for CachingHandler {
    fn successor(&self) -> &Successor {
        &self.next
    }

    #[instrument(skip(self, request), fields(request_id = %request.id()))]
    async fn handle(&self, request: &Request) -> Result<Outcome> {
        if let Some(cached) = self.get(request.id()).await {
            info!("Cache hit: {}", request.id());
            return Ok(Outcome::CacheHit(cached));
        }
        info!("Cache miss");
        forward_or_complete(&self.next, request, CACHE_STAGE).await
    }
}
