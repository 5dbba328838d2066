//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::InitialSection;
use crate::error::{CatalogError, CatalogResult};

use super::types::{ColorMode, Config};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "doccat.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CatalogResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CatalogError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            if let Ok(config) = Config::load(&project_config) {
                return config.with_env_overrides();
            }
        }
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            if let Ok(config) = Config::load(&user_config) {
                return config.with_env_overrides();
            }
        }
    }

    Config::default().with_env_overrides()
}

/// An environment override whose value was not recognized and was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvWarning {
    pub var: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Apply environment variable overrides (DOCCAT_* prefix). Unrecognized
/// values leave the configured setting in place and are logged.
pub fn with_env_overrides(config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    let (config, warnings) = apply_env_overrides(config, get_env);
    for w in &warnings {
        tracing::warn!(var = w.var, value = %w.value, "ignoring unrecognized environment override");
    }
    config
}

/// Apply environment variable overrides and report the ones that were ignored.
pub fn apply_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> (Config, Vec<EnvWarning>) {
    let mut warnings = Vec::new();

    if let Some(initial) = get_env("DOCCAT_INITIAL_SECTION") {
        match initial.to_lowercase().as_str() {
            "first" => config.navigation.initial = InitialSection::First,
            "all" | "*" => config.navigation.initial = InitialSection::All,
            _ => warnings.push(EnvWarning {
                var: "DOCCAT_INITIAL_SECTION",
                value: initial,
                expected: "first or all",
            }),
        }
    }

    if let Some(color) = get_env("DOCCAT_COLOR") {
        match color.to_lowercase().as_str() {
            "auto" => config.output.color = ColorMode::Auto,
            "always" => config.output.color = ColorMode::Always,
            "never" => config.output.color = ColorMode::Never,
            _ => warnings.push(EnvWarning {
                var: "DOCCAT_COLOR",
                value: color,
                expected: "auto, always or never",
            }),
        }
    }

    if let Some(dir) = get_env("DOCCAT_DOWNLOAD_DIR") {
        if !dir.is_empty() {
            config.browse.download_dir = Some(PathBuf::from(dir));
        }
    }

    if let Some(level) = get_env("DOCCAT_LOG") {
        if !level.is_empty() {
            config.logging.level = Some(level);
        }
    }

    (config, warnings)
}

/// `$XDG_CONFIG_HOME/doccat/config.toml`, falling back to `~/.config`
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|dir| dir.join("doccat/config.toml"))
}

fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "navigation",
        "initial",
        "output",
        "color",
        "unicode",
        "scan",
        "extensions",
        "web_prefix",
        "dates",
        "readability",
        "browse",
        "download_dir",
        "logging",
        "level",
        "file",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
