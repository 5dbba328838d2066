//! Configuration module for Doccat
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DOCCAT_*)
//! 3. Explicit `--config` file, else project config (./doccat.toml)
//! 4. User config (~/.config/doccat/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{
    apply_env_overrides, user_config_path, with_env_overrides, ConfigWarning, EnvWarning,
    PROJECT_CONFIG_FILE,
};
pub use types::{
    BrowseConfig, ColorMode, Config, LoggingConfig, NavigationConfig, OutputConfig, ScanConfig,
};
