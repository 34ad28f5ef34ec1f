//! Backend API client for LookCircuit
//!
//! Every feature service goes through [`ApiClient`]: it owns URL
//! composition, header injection, the request deadline and response
//! normalization.
//!
//! # Architecture
//!
//! - Built on the shared [`HttpClient`](crate::http::HttpClient) (no direct reqwest in services)
//! - Bearer token read from the injected session on every call
//! - Single attempt unless `max_retries` is configured

pub mod client;
pub mod upload;

pub use client::{ApiClient, ApiClientBuilder};
pub use upload::FilePart;
