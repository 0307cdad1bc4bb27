//! Configuration module.
//!
//! Viewer settings resolved from defaults, an optional TOML file and
//! environment variables.

pub mod loader;

pub use loader::{
    apply_env_overrides, default_config_path, default_log_path, load_config,
    load_config_with_precedence, merge_config, ConfigError, ConfigFile, ViewportConfig,
};
