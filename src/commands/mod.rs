//! Subcommand implementations. Each `cmd_*` takes the resolved UI context
//! and configuration and returns `anyhow::Result` to `main`.

pub mod browse;
pub mod build;
pub mod sections;
pub mod show;
pub mod watch;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use doccat::config::{user_config_path, Config, ConfigWarning, EnvWarning, PROJECT_CONFIG_FILE};

/// Configuration plus the file it came from and its warnings
pub struct LoadedConfig {
    pub config: Config,
    pub path: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
    pub env_warnings: Vec<EnvWarning>,
}

/// `--config` when given (it must exist), else `./doccat.toml`, else the
/// user config, else defaults. Environment overrides apply last.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            Some(path.to_path_buf())
        }
        None => [Some(cwd.join(PROJECT_CONFIG_FILE)), user_config_path()]
            .into_iter()
            .flatten()
            .find(|p| p.is_file()),
    };

    let Some(path) = path else {
        let (config, env_warnings) = Config::default().with_env_overrides_and_warnings();
        return Ok(LoadedConfig {
            config,
            path: None,
            warnings: Vec::new(),
            env_warnings,
        });
    };

    let (config, warnings) = Config::load_with_warnings(&path)
        .with_context(|| format!("loading {}", path.display()))?;
    let (config, env_warnings) = config.with_env_overrides_and_warnings();
    Ok(LoadedConfig {
        config,
        path: Some(path),
        warnings,
        env_warnings,
    })
}
