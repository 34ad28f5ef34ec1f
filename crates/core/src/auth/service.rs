//! Authentication use cases
//!
//! Combines the identity provider with the session's token store. The
//! service tracks three observable states: anonymous (no token),
//! authenticated (token stored) and expired (token stored but rejected by the
//! backend). Expiry is only detected reactively, when an API call returns 401.

use std::sync::Arc;

use lookcircuit_domain::constants::{SIGN_IN_FAILED_MESSAGE, SIGN_UP_FAILED_MESSAGE};
use lookcircuit_domain::{AuthUser, LookCircuitError, Result};
use tracing::{debug, info, instrument, warn};

use super::ports::{IdentityProvider, ProviderAuth, ProviderError};
use crate::session::SessionContext;

/// Auth service over an identity provider and a session context
#[derive(Clone)]
pub struct AuthService {
    provider: Arc<dyn IdentityProvider>,
    session: SessionContext,
}

impl AuthService {
    /// Service over `provider` persisting into `session`
    pub fn new(provider: Arc<dyn IdentityProvider>, session: SessionContext) -> Self {
        Self { provider, session }
    }

    /// Session shared with the API client
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Sign in with email and password
    ///
    /// On success the session token is persisted before returning. A
    /// provider refusal returns the provider's message and leaves storage
    /// untouched.
    ///
    /// # Errors
    /// Returns `LookCircuitError::Auth` with a user-facing message.
    #[instrument(skip_all)]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser> {
        let auth = self
            .provider
            .sign_in(email, password)
            .await
            .map_err(|err| Self::user_facing(err, SIGN_IN_FAILED_MESSAGE))?;

        self.persist(&auth).await;
        info!(user_id = %auth.user.id, "sign-in succeeded");
        Ok(auth.user)
    }

    /// Register a new account
    ///
    /// Same persistence contract as [`AuthService::sign_in`]. When the
    /// provider does not echo the name back, the one supplied here is used.
    ///
    /// # Errors
    /// Returns `LookCircuitError::Auth` with a user-facing message.
    #[instrument(skip_all)]
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<AuthUser> {
        let auth = self
            .provider
            .sign_up(email, password, name)
            .await
            .map_err(|err| Self::user_facing(err, SIGN_UP_FAILED_MESSAGE))?;

        self.persist(&auth).await;
        info!(user_id = %auth.user.id, has_session = auth.session.is_some(), "sign-up succeeded");

        let mut user = auth.user;
        if user.name.is_none() {
            user.name = name.map(str::to_string);
        }
        Ok(user)
    }

    /// Sign out
    ///
    /// The local token is cleared even when the remote invalidation fails.
    #[instrument(skip_all)]
    pub async fn sign_out(&self) {
        if let Err(err) = self.provider.sign_out().await {
            warn!(error = %err, "remote sign-out failed; clearing local token anyway");
        }
        self.session.clear().await;
        info!("signed out");
    }

    /// True iff the identity provider reports a live session
    ///
    /// The local token store is not consulted, so the two can disagree.
    pub async fn is_authenticated(&self) -> bool {
        match self.provider.get_session().await {
            Ok(session) => session.is_some(),
            Err(err) => {
                debug!(error = %err, "session lookup failed");
                false
            }
        }
    }

    /// Request a new access token; persists it and returns `true` on success
    #[instrument(skip_all)]
    pub async fn refresh_session(&self) -> bool {
        match self.provider.refresh_session().await {
            Ok(session) if !session.access_token.is_empty() => {
                self.session.store_token(&session.access_token).await;
                info!("session refreshed");
                true
            }
            Ok(_) => {
                warn!("refresh returned an empty access token");
                false
            }
            Err(err) => {
                warn!(error = %err, "session refresh failed");
                false
            }
        }
    }

    /// The signed-in user, or `None` when signed out or on failure
    pub async fn current_user(&self) -> Option<AuthUser> {
        match self.provider.get_user().await {
            Ok(user) => user,
            Err(err) => {
                debug!(error = %err, "current user lookup failed");
                None
            }
        }
    }

    async fn persist(&self, auth: &ProviderAuth) {
        match auth.session.as_ref().map(|s| s.access_token.as_str()) {
            Some(token) if !token.is_empty() => self.session.store_token(token).await,
            _ => debug!("provider returned no session token; nothing persisted"),
        }
    }

    fn user_facing(err: ProviderError, fallback: &str) -> LookCircuitError {
        match err {
            ProviderError::Rejected(message) => LookCircuitError::Auth(message),
            other => {
                warn!(error = %other, "identity provider failure");
                LookCircuitError::Auth(fallback.to_string())
            }
        }
    }
}
