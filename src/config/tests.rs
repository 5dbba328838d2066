//! Tests for the config module

use super::loader::{apply_env_overrides, with_env_overrides};
use super::types::*;
use crate::domain::value_objects::InitialSection;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.navigation.initial, InitialSection::First);
    assert_eq!(config.output.color, ColorMode::Auto);
    assert!(config.output.unicode);
    assert_eq!(config.scan.extensions, vec!["pdf".to_string()]);
    assert_eq!(config.scan.web_prefix, "./");
    assert!(config.scan.dates);
    assert!(!config.scan.readability);
    assert_eq!(config.scan.output, PathBuf::from("docs_tree.json"));
    assert!(config.browse.download_dir.is_none());
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[navigation]
initial = "all"

[output]
color = "never"
unicode = false

[scan]
extensions = ["pdf", "txt"]
web_prefix = "/site/"
readability = true

[browse]
download_dir = "/tmp/downloads"

[logging]
level = "debug"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.navigation.initial, InitialSection::All);
    assert_eq!(config.output.color, ColorMode::Never);
    assert!(!config.output.unicode);
    assert_eq!(config.scan.extensions.len(), 2);
    assert_eq!(config.scan.web_prefix, "/site/");
    assert!(config.scan.readability);
    assert!(config.scan.dates);
    assert_eq!(
        config.browse.download_dir,
        Some(PathBuf::from("/tmp/downloads"))
    );
    assert_eq!(config.logging.level.as_deref(), Some("debug"));
}

#[test]
fn test_load_with_warnings_detects_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doccat.toml");
    fs::write(
        &path,
        r#"
[navigation]
inital = "all"
"#,
    )
    .unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.navigation.initial, InitialSection::First);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "inital");
    assert_eq!(warnings[0].line, Some(3));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("initial"));
}

#[test]
fn test_load_invalid_value_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doccat.toml");
    fs::write(&path, "[navigation]\ninitial = \"middle\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("invalid config"));
}

#[test]
fn test_load_or_default_uses_project_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("doccat.toml"),
        "[scan]\nweb_prefix = \"/docs/\"\n",
    )
    .unwrap();

    let config = Config::load_or_default(Some(dir.path()));
    assert_eq!(config.scan.web_prefix, "/docs/");
}

#[test]
fn test_env_overrides() {
    let env = |key: &str| match key {
        "DOCCAT_INITIAL_SECTION" => Some("all".to_string()),
        "DOCCAT_COLOR" => Some("ALWAYS".to_string()),
        "DOCCAT_DOWNLOAD_DIR" => Some("/srv/dl".to_string()),
        "DOCCAT_LOG" => Some("trace".to_string()),
        _ => None,
    };

    let config = with_env_overrides(Config::default(), env);

    assert_eq!(config.navigation.initial, InitialSection::All);
    assert_eq!(config.output.color, ColorMode::Always);
    assert_eq!(config.browse.download_dir, Some(PathBuf::from("/srv/dl")));
    assert_eq!(config.logging.level.as_deref(), Some("trace"));
}

#[test]
fn test_env_overrides_ignore_empty_values() {
    let env = |key: &str| match key {
        "DOCCAT_DOWNLOAD_DIR" | "DOCCAT_LOG" => Some(String::new()),
        _ => None,
    };

    let config = with_env_overrides(Config::default(), env);
    assert!(config.browse.download_dir.is_none());
    assert!(config.logging.level.is_none());
}

#[test]
fn test_unrecognized_env_values_keep_configured_settings() {
    let mut config = Config::default();
    config.navigation.initial = InitialSection::All;
    config.output.color = ColorMode::Never;

    let env = |key: &str| match key {
        "DOCCAT_INITIAL_SECTION" => Some("everything".to_string()),
        "DOCCAT_COLOR" => Some("purple".to_string()),
        _ => None,
    };
    let (config, warnings) = apply_env_overrides(config, env);

    assert_eq!(config.navigation.initial, InitialSection::All);
    assert_eq!(config.output.color, ColorMode::Never);
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].var, "DOCCAT_INITIAL_SECTION");
    assert_eq!(warnings[0].value, "everything");
    assert_eq!(warnings[1].var, "DOCCAT_COLOR");
    assert_eq!(warnings[1].value, "purple");
}

#[test]
fn test_env_overrides_accept_explicit_defaults() {
    let mut config = Config::default();
    config.navigation.initial = InitialSection::All;
    config.output.color = ColorMode::Always;

    let env = |key: &str| match key {
        "DOCCAT_INITIAL_SECTION" => Some("First".to_string()),
        "DOCCAT_COLOR" => Some("auto".to_string()),
        _ => None,
    };
    let (config, warnings) = apply_env_overrides(config, env);

    assert!(warnings.is_empty());
    assert_eq!(config.navigation.initial, InitialSection::First);
    assert_eq!(config.output.color, ColorMode::Auto);
}

#[test]
fn test_explicit_download_dir_wins() {
    let mut config = Config::default();
    config.browse.download_dir = Some(PathBuf::from("/x"));
    assert_eq!(config.download_dir(), Some(PathBuf::from("/x")));
}
