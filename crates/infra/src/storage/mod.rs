//! Durable token storage

mod keychain;

pub use keychain::{Keychain, KeychainError, KeychainTokenStore};
pub use lookcircuit_core::MemoryTokenStore;
