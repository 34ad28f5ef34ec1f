//! Port interface for the external identity provider
//!
//! The provider owns credential verification and its own notion of the live
//! session. The core only consumes the result shape defined here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lookcircuit_domain::AuthUser;
use thiserror::Error;

/// Session issued by the identity provider
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderSession {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for ProviderSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSession")
            .field("has_refresh_token", &self.refresh_token.is_some())
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

/// Outcome of a successful sign-in or sign-up
///
/// `session` is `None` when the provider accepted the credentials but did not
/// open a session yet (e.g. sign-up pending email confirmation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderAuth {
    pub user: AuthUser,
    pub session: Option<ProviderSession>,
}

/// Identity provider failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider answered and refused; the message is user-facing.
    #[error("{0}")]
    Rejected(String),

    /// The provider could not be reached.
    #[error("identity provider unreachable: {0}")]
    Unavailable(String),

    /// The provider answered with something unparseable.
    #[error("malformed identity provider response: {0}")]
    Malformed(String),

    #[error("no active session")]
    NoSession,
}

/// Trait for identity provider operations
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verify email/password credentials and open a session
    async fn sign_in(&self, email: &str, password: &str) -> Result<ProviderAuth, ProviderError>;

    /// Register a new account; `name` is stored as account metadata
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<ProviderAuth, ProviderError>;

    /// Invalidate the remote session
    async fn sign_out(&self) -> Result<(), ProviderError>;

    /// The provider's current session, if one is live
    async fn get_session(&self) -> Result<Option<ProviderSession>, ProviderError>;

    /// The user attached to the current session
    async fn get_user(&self) -> Result<Option<AuthUser>, ProviderError>;

    /// Exchange the refresh token for a new session
    async fn refresh_session(&self) -> Result<ProviderSession, ProviderError>;
}
