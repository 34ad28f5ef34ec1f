//! Bearer-token persistence port and the session context built on it
//!
//! The token store is the only persistent mutable state in the client. It is
//! never read from ambient globals: hosts build one [`SessionContext`] and
//! hand clones of it to the API client and the auth service, which then share
//! the same underlying store.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Durable storage for a single bearer token
///
/// Implementations must not surface storage failures: a failed read is
/// reported as absence, a failed write or delete is logged and dropped.
/// Concurrent writers race with last-write-wins semantics.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Currently stored token, if any
    async fn get(&self) -> Option<String>;

    /// Replace the stored token
    async fn set(&self, token: &str);

    /// Remove the stored token (idempotent)
    async fn clear(&self);
}

/// Volatile token store for tests and hosts without a keychain
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `token`
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: RwLock::new(Some(token.into())) }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    async fn set(&self, token: &str) {
        *self.token.write().await = Some(token.to_string());
    }

    async fn clear(&self) {
        *self.token.write().await = None;
    }
}

/// Explicit handle on the caller's session state
///
/// Cheap to clone; all clones observe the same store.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn TokenStore>,
}

impl SessionContext {
    /// Session over `store`
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Session backed by a fresh [`MemoryTokenStore`]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()))
    }

    /// Token to present as a bearer credential; empty strings count as absent
    pub async fn bearer_token(&self) -> Option<String> {
        self.store.get().await.filter(|token| !token.is_empty())
    }

    /// Value for the `Authorization` header, if a token is stored
    pub async fn authorization_header(&self) -> Option<String> {
        self.bearer_token().await.map(|token| format!("Bearer {token}"))
    }

    /// Persist `token` as the bearer credential
    pub async fn store_token(&self, token: &str) {
        self.store.set(token).await;
    }

    /// Forget the stored token
    pub async fn clear(&self) {
        self.store.clear().await;
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext").finish_non_exhaustive()
    }
}
