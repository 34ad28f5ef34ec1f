//! # LookCircuit Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (token storage, identity provider)
//! - The session context injected into every API call
//! - The auth service and best-effort result type
//!
//! ## Architecture Principles
//! - Only depends on `lookcircuit-domain`
//! - No HTTP, keychain or platform code
//! - All external dependencies via traits

pub mod auth;
pub mod best_effort;
pub mod session;

pub use auth::{AuthService, IdentityProvider, ProviderAuth, ProviderError, ProviderSession};
pub use best_effort::BestEffort;
pub use session::{MemoryTokenStore, SessionContext, TokenStore};
