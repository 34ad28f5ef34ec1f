//! Client constants
//!
//! Centralized location for the fixed strings and defaults shared across
//! crates.

// Transport defaults
pub const DEFAULT_API_VERSION: &str = "/api/v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_MAX_RETRIES: u32 = 0;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1_000;
pub const DEV_BASE_URL: &str = "http://localhost:8000";
pub const PROD_BASE_URL: &str = "https://api.lookcircuit.com";

// Token storage
pub const AUTH_TOKEN_KEY: &str = "@lookcircuit_auth_token";
pub const KEYCHAIN_SERVICE: &str = "LookCircuit.auth";

// User-facing messages
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";
pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "Unexpected response from server";
pub const IMAGE_NOT_FOUND_MESSAGE: &str = "Image file not found";
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze image. Please try again.";
pub const SIGN_IN_FAILED_MESSAGE: &str = "Authentication failed. Please try again.";
pub const SIGN_UP_FAILED_MESSAGE: &str = "Registration failed. Please try again.";

// Product discovery
pub const DEFAULT_MAX_RESULTS: u32 = 20;
