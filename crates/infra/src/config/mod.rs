//! Application configuration: `LOOKCIRCUIT_*` environment variables first,
//! then a JSON or TOML file.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths};
