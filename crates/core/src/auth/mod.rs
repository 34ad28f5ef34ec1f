//! Authentication: identity provider port and the auth service

pub mod ports;
pub mod service;

pub use ports::{IdentityProvider, ProviderAuth, ProviderError, ProviderSession};
pub use service::AuthService;
