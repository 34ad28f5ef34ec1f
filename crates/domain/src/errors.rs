//! Error types used throughout the client
//!
//! Every fallible operation in the SDK returns [`Result`]. The `Display`
//! output of [`LookCircuitError`] is the message shown to the end user, so
//! variants that carry a user-facing string render it verbatim.

use thiserror::Error;

use crate::constants::{NETWORK_ERROR_MESSAGE, UNEXPECTED_RESPONSE_MESSAGE};

/// Main error type for LookCircuit
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookCircuitError {
    /// Rejected locally before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// No response at all: connection failure, DNS, or the request deadline
    /// elapsed. Both cases are reported the same way.
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Network,

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// A 2xx body did not match the expected schema.
    #[error("{}", UNEXPECTED_RESPONSE_MESSAGE)]
    Decode(String),

    /// The identity provider refused or failed the operation.
    #[error("{0}")]
    Auth(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Local failure after validation passed (e.g. reading an upload).
    #[error("{0}")]
    Internal(String),
}

/// Coarse classification of [`LookCircuitError`] for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Network,
    Server,
    Decode,
    Auth,
    Config,
    Internal,
}

impl LookCircuitError {
    /// Get the error category for this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) => ErrorCategory::Validation,
            Self::Network => ErrorCategory::Network,
            Self::Server { .. } => ErrorCategory::Server,
            Self::Decode(_) => ErrorCategory::Decode,
            Self::Auth(_) => ErrorCategory::Auth,
            Self::Config(_) => ErrorCategory::Config,
            Self::Internal(_) => ErrorCategory::Internal,
        }
    }

    /// Stable label for structured logs
    pub fn label(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "validation",
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Decode => "decode",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Config => "config",
            ErrorCategory::Internal => "internal",
        }
    }

    /// User-facing message (same as `Display`)
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status when the server produced this error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server rejected the bearer token (session expired)
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Result type alias for LookCircuit operations
pub type Result<T> = std::result::Result<T, LookCircuitError>;
