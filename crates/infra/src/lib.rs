//! # LookCircuit Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The HTTP transport and the backend API client
//! - Keychain-backed token storage
//! - The GoTrue identity provider adapter
//! - Analysis, products and recommendations services
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `lookcircuit-core`
//! - Depends on `lookcircuit-domain` and `lookcircuit-core`
//! - Contains all "impure" code (network, keychain, filesystem)

pub mod api;
pub mod config;
pub mod context;
mod errors;
pub mod http;
pub mod identity;
pub mod services;
pub mod storage;

// Re-export commonly used items
pub use api::{ApiClient, ApiClientBuilder, FilePart};
pub use context::ClientContext;
pub use http::{HttpClient, HttpClientBuilder};
pub use identity::GoTrueIdentityProvider;
pub use services::{AnalysisService, HealthService, ProductsService, RecommendationsService};
pub use storage::{Keychain, KeychainError, KeychainTokenStore, MemoryTokenStore};
