//! # LookCircuit Domain
//!
//! Business domain types and models for the LookCircuit client.
//!
//! This crate contains:
//! - Analysis, product, recommendation and user types
//! - The error type and Result alias shared by every layer
//! - Configuration structures and the endpoint table
//! - Client constants
//!
//! ## Architecture
//! - No dependencies on other LookCircuit crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod endpoints;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use endpoints::Endpoint;
pub use errors::*;
pub use types::*;
