//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::InitialSection;
use crate::error::CatalogResult;

use super::loader::{self, ConfigWarning};

/// Section navigation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NavigationConfig {
    /// Startup selection: the first section or the aggregate view
    #[serde(default)]
    pub initial: InitialSection,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Directory scanner configuration (`doccat build`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// File extensions turned into catalog entries (case-insensitive)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Prefix of every generated file path
    #[serde(default = "default_web_prefix")]
    pub web_prefix: String,

    /// Record file modification dates
    #[serde(default = "default_true")]
    pub dates: bool,

    /// Compute readability scores for PDF and plain-text documents
    #[serde(default)]
    pub readability: bool,

    /// Where `build` writes the catalog
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            web_prefix: default_web_prefix(),
            dates: true,
            readability: false,
            output: default_output(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["pdf".to_string()]
}

fn default_web_prefix() -> String {
    "./".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from(crate::infrastructure::loader::DEFAULT_CATALOG_FILE)
}

/// Interactive browser configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BrowseConfig {
    /// Download destination; the user's download directory when unset
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Log level or filter directive (e.g. "info", "doccat=debug")
    #[serde(default)]
    pub level: Option<String>,

    /// Log file; stderr when unset
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub browse: BrowseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CatalogResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (DOCCAT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Apply environment overrides, returning the ones that were ignored
    pub fn with_env_overrides_and_warnings(self) -> (Self, Vec<loader::EnvWarning>) {
        loader::apply_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Effective download directory
    pub fn download_dir(&self) -> Option<PathBuf> {
        self.browse.download_dir.clone().or_else(dirs::download_dir)
    }
}
