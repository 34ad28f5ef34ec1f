//! Conversions from external infrastructure errors into domain errors.

use keyring::Error as KeyringError;
use lookcircuit_domain::LookCircuitError;
use reqwest::Error as HttpError;
use tracing::warn;

use crate::storage::KeychainError;

/// Extension trait to make the conversion logic explicit at call sites.
pub(crate) trait IntoLookCircuitError {
    fn into_lookcircuit(self) -> LookCircuitError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → LookCircuitError */
/* -------------------------------------------------------------------------- */

impl IntoLookCircuitError for HttpError {
    fn into_lookcircuit(self) -> LookCircuitError {
        if self.is_builder() {
            return LookCircuitError::Internal(format!("failed to build request: {self}"));
        }
        if self.is_decode() {
            return LookCircuitError::Decode(self.to_string());
        }

        // Timeouts, refused connections, DNS failures and broken bodies all
        // collapse into the same caller-visible failure. Keep the detail in
        // the log only.
        warn!(
            timeout = self.is_timeout(),
            connect = is_connect(&self),
            error = %self,
            "transport failure"
        );
        LookCircuitError::Network
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn is_connect(err: &HttpError) -> bool {
    err.is_connect()
}

#[cfg(target_arch = "wasm32")]
fn is_connect(_err: &HttpError) -> bool {
    false
}

/// Convert a reqwest error at the boundary of the HTTP layer.
pub(crate) fn from_reqwest(err: HttpError) -> LookCircuitError {
    err.into_lookcircuit()
}

/* -------------------------------------------------------------------------- */
/* keyring::Error → KeychainError */
/* -------------------------------------------------------------------------- */

impl From<KeyringError> for KeychainError {
    fn from(err: KeyringError) -> Self {
        match err {
            KeyringError::NoEntry => Self::NotFound,
            other => Self::AccessFailed(other.to_string()),
        }
    }
}
