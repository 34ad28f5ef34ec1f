//! Feature services
//!
//! Thin request/response mappers over [`ApiClient`](crate::api::ApiClient).
//! Each unwraps its domain key from the `{ success, <key> }` envelope; the
//! `success` flag is ignored in favor of the HTTP status.

pub mod analysis;
mod health;
pub mod products;
pub mod recommendations;

pub use analysis::AnalysisService;
pub use health::HealthService;
pub use products::ProductsService;
pub use recommendations::RecommendationsService;
