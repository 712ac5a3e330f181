//! YAML file loading functionality.
//!
//! This module provides functions to load YAML streams from files or stdin,
//! parsing them into one `YamlNode` per document. Gzip-compressed input is
//! decompressed transparently.

use crate::document::node::YamlNode;
use crate::document::parser::parse_yaml;
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs;
use std::io::Read;
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Loads and parses a YAML file from the filesystem.
///
/// Files ending in `.gz` are decompressed first.
///
/// # Examples
///
/// ```no_run
/// use yamlfilter::file::loader::load_yaml_file;
///
/// let documents = load_yaml_file("config.yaml").unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist
/// - The file cannot be read (permissions, etc.)
/// - The file contents are not valid YAML
pub fn load_yaml_file<P: AsRef<Path>>(path: P) -> Result<Vec<YamlNode>> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        let bytes = fs::read(path_ref).context("Failed to read file")?;
        decompress_gzip(&bytes)?
    } else {
        fs::read_to_string(path_ref).context("Failed to read file")?
    };

    log::debug!("loaded {} bytes from {}", content.len(), path_ref.display());
    parse_yaml(&content).with_context(|| format!("Failed to parse {}", path_ref.display()))
}

/// Loads and parses YAML from standard input.
///
/// Gzip input is detected by its magic bytes.
///
/// # Errors
///
/// This function will return an error if:
/// - Reading from stdin fails
/// - The input contents are not valid YAML
pub fn load_yaml_from_stdin() -> Result<Vec<YamlNode>> {
    let mut buffer = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;
    load_yaml_from_bytes(&buffer)
}

/// Parses YAML from raw bytes, decompressing gzip data when present.
pub fn load_yaml_from_bytes(bytes: &[u8]) -> Result<Vec<YamlNode>> {
    let content = if bytes.starts_with(&GZIP_MAGIC) {
        decompress_gzip(bytes)?
    } else {
        String::from_utf8(bytes.to_vec()).context("Input is not valid UTF-8")?
    };
    parse_yaml(&content)
}

fn decompress_gzip(bytes: &[u8]) -> Result<String> {
    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzip data")?;
    Ok(content)
}
