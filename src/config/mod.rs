//! Configuration system for yamlfilter.
//!
//! This module provides the configuration structure for yamlfilter with sensible defaults
//! and support for serialization/deserialization via serde. Configuration is loaded
//! from a TOML file and overridden by command-line arguments.
//!
//! # Example
//!
//! ```
//! use yamlfilter::config::{Config, OutputFormat};
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.output_format, OutputFormat::Yaml);
//! assert!(config.skip_absent);
//!
//! // Create custom configuration
//! let custom = Config {
//!     output_format: OutputFormat::Json,
//!     ..Config::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

/// How filter results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Configuration for the yamlfilter command.
///
/// # Fields
///
/// * `output_format` - Result format, `yaml` or `json` (default: yaml)
/// * `step_limit` - Maximum state transitions per evaluation (default: unlimited)
/// * `skip_absent` - Print nothing for results that matched nothing (default: true)
/// * `pretty_json` - Indent JSON output (default: true)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Result format
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Maximum state transitions per evaluation
    #[serde(default)]
    pub step_limit: Option<usize>,

    /// Print nothing for absent results instead of `null`
    #[serde(default = "default_skip_absent")]
    pub skip_absent: bool,

    /// Indent JSON output
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

/// Returns the default for skipping absent results.
fn default_skip_absent() -> bool {
    true
}

/// Returns the default for pretty JSON output.
fn default_pretty_json() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            step_limit: None,
            skip_absent: default_skip_absent(),
            pretty_json: default_pretty_json(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/yamlfilter/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("yamlfilter");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                log::warn!("Ignoring invalid config {}: {}", path.display(), err);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}
