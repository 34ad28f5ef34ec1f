//! Platform keychain storage for the auth token
//!
//! Wraps the OS credential store (Keychain Access, Credential Manager,
//! Secret Service) through `keyring`. [`KeychainTokenStore`] adapts it to
//! the [`TokenStore`] port, which never surfaces storage failures.

use async_trait::async_trait;
use keyring::Entry;
use lookcircuit_core::TokenStore;
use lookcircuit_domain::constants::{AUTH_TOKEN_KEY, KEYCHAIN_SERVICE};
use thiserror::Error;
use tracing::{debug, warn};

/// Keychain error types
#[derive(Debug, Error)]
pub enum KeychainError {
    #[error("secret not found in keychain")]
    NotFound,

    #[error("keychain access failed: {0}")]
    AccessFailed(String),
}

/// Secrets stored under one keychain service name
#[derive(Debug, Clone)]
pub struct Keychain {
    service_name: String,
}

impl Keychain {
    /// Keychain scoped to `service_name`
    pub fn new(service_name: impl Into<String>) -> Self {
        Self { service_name: service_name.into() }
    }

    /// Service name entries are stored under
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Store a secret value
    ///
    /// # Errors
    /// Returns `KeychainError::AccessFailed` if keychain access fails
    pub fn set_secret(&self, key: &str, value: &str) -> Result<(), KeychainError> {
        debug!(service = %self.service_name, key = %key, "storing secret in keychain");
        self.entry(key)?.set_password(value)?;
        Ok(())
    }

    /// Retrieve a secret value
    ///
    /// # Errors
    /// Returns `KeychainError::NotFound` if the secret doesn't exist
    pub fn get_secret(&self, key: &str) -> Result<String, KeychainError> {
        debug!(service = %self.service_name, key = %key, "retrieving secret from keychain");
        Ok(self.entry(key)?.get_password()?)
    }

    /// Delete a secret (idempotent)
    pub fn delete_secret(&self, key: &str) -> Result<(), KeychainError> {
        debug!(service = %self.service_name, key = %key, "deleting secret from keychain");
        match self.entry(key)?.delete_credential().map_err(KeychainError::from) {
            Ok(()) | Err(KeychainError::NotFound) => Ok(()),
            Err(err) => Err(err),
        }
    }

    fn entry(&self, key: &str) -> Result<Entry, KeychainError> {
        Ok(Entry::new(&self.service_name, key)?)
    }
}

/// [`TokenStore`] backed by the platform keychain
#[derive(Debug, Clone)]
pub struct KeychainTokenStore {
    keychain: Keychain,
    key: String,
}

impl KeychainTokenStore {
    /// Token store keeping the token under `key`
    pub fn new(keychain: Keychain, key: impl Into<String>) -> Self {
        Self { keychain, key: key.into() }
    }
}

impl Default for KeychainTokenStore {
    /// Service `LookCircuit.auth`, key `@lookcircuit_auth_token`
    fn default() -> Self {
        Self::new(Keychain::new(KEYCHAIN_SERVICE), AUTH_TOKEN_KEY)
    }
}

#[async_trait]
impl TokenStore for KeychainTokenStore {
    async fn get(&self) -> Option<String> {
        match self.keychain.get_secret(&self.key) {
            Ok(token) => Some(token),
            Err(KeychainError::NotFound) => None,
            Err(err) => {
                warn!(error = %err, "failed to read auth token; treating as signed out");
                None
            }
        }
    }

    async fn set(&self, token: &str) {
        if let Err(err) = self.keychain.set_secret(&self.key, token) {
            warn!(error = %err, "failed to persist auth token");
        }
    }

    async fn clear(&self) {
        if let Err(err) = self.keychain.delete_secret(&self.key) {
            warn!(error = %err, "failed to clear auth token");
        }
    }
}
