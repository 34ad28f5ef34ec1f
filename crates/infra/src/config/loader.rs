//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the identity variables are missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `LOOKCIRCUIT_IDENTITY_URL`: Identity provider project URL (required)
//! - `LOOKCIRCUIT_IDENTITY_ANON_KEY`: Identity provider public key (required)
//! - `LOOKCIRCUIT_API_BASE_URL`: Backend scheme and host
//! - `LOOKCIRCUIT_API_VERSION`: Version prefix, e.g. `/api/v1`
//! - `LOOKCIRCUIT_API_TIMEOUT_MS`: Request deadline in milliseconds
//! - `LOOKCIRCUIT_API_MAX_RETRIES`: Extra attempts after a transport failure
//! - `LOOKCIRCUIT_API_RETRY_DELAY_MS`: Base delay between attempts
//!
//! Optional variables fall back to [`ApiConfig::default`].
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./lookcircuit.json` or `./lookcircuit.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use lookcircuit_domain::{ApiConfig, AppConfig, IdentityConfig, LookCircuitError, Result};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `LookCircuitError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<AppConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `LookCircuitError::Config` if a required variable is missing or
/// a numeric variable does not parse.
pub fn load_from_env() -> Result<AppConfig> {
    let identity = IdentityConfig {
        url: env_var("LOOKCIRCUIT_IDENTITY_URL")?,
        anon_key: env_var("LOOKCIRCUIT_IDENTITY_ANON_KEY")?,
    };

    let defaults = ApiConfig::default();
    let api = ApiConfig {
        base_url: std::env::var("LOOKCIRCUIT_API_BASE_URL").unwrap_or(defaults.base_url),
        api_version: std::env::var("LOOKCIRCUIT_API_VERSION").unwrap_or(defaults.api_version),
        timeout_ms: env_parse("LOOKCIRCUIT_API_TIMEOUT_MS", defaults.timeout_ms)?,
        max_retries: env_parse("LOOKCIRCUIT_API_MAX_RETRIES", defaults.max_retries)?,
        retry_delay_ms: env_parse("LOOKCIRCUIT_API_RETRY_DELAY_MS", defaults.retry_delay_ms)?,
    };

    Ok(AppConfig { api, identity })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `LookCircuitError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<AppConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(LookCircuitError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            LookCircuitError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| LookCircuitError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<AppConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| LookCircuitError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| LookCircuitError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(LookCircuitError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Returns the first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("lookcircuit.json"),
        dir.join("lookcircuit.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `LookCircuitError::Config` if the variable is not set or empty.
fn env_var(key: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(LookCircuitError::Config(format!(
            "Missing required environment variable: {}",
            key
        ))),
    }
}

/// Parse an optional numeric environment variable
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| LookCircuitError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}
