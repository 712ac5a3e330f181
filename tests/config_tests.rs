use std::fs;
use tempfile::TempDir;
use yamlfilter::config::{Config, OutputFormat};

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.output_format, OutputFormat::Yaml);
    assert_eq!(config.step_limit, None);
    assert!(config.skip_absent);
    assert!(config.pretty_json);
}

#[test]
fn test_custom_config() {
    let config = Config {
        output_format: OutputFormat::Json,
        step_limit: Some(100),
        skip_absent: false,
        pretty_json: false,
    };

    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.step_limit, Some(100));
    assert!(!config.skip_absent);
    assert!(!config.pretty_json);
}

#[test]
fn test_config_path_location() {
    if let Some(path) = Config::config_path() {
        assert!(path.ends_with(".config/yamlfilter/config.toml"));
    }
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_load_from_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "output_format = \"json\"\nstep_limit = 500\nskip_absent = false\n",
    )
    .unwrap();

    let config = Config::load_from(&path);
    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.step_limit, Some(500));
    assert!(!config.skip_absent);
    assert!(config.pretty_json);
}

#[test]
fn test_load_from_invalid_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "output_format = \"xml\"\n").unwrap();

    assert_eq!(Config::load_from(&path), Config::default());
}

#[test]
fn test_config_serialization_roundtrip() {
    let config = Config {
        output_format: OutputFormat::Json,
        step_limit: Some(32),
        ..Config::default()
    };

    let text = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
