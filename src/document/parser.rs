//! YAML parsing into `YamlNode` trees.
//!
//! This module uses `yaml-rust2` to parse a YAML stream (one or more documents)
//! and converts each document into the crate's `YamlNode` representation.
//! Aliases are resolved by the loader, so the resulting trees contain plain
//! copies of the anchored values. JSON is a subset of YAML and parses here too.
//!
//! # Example
//!
//! ```
//! use yamlfilter::document::parser::parse_yaml;
//!
//! let docs = parse_yaml("name: Alice\nage: 30\n").unwrap();
//! assert_eq!(docs.len(), 1);
//! assert!(docs[0].is_mapping());
//! ```

use super::node::{YamlNode, YamlNumber, YamlValue};
use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use yaml_rust2::{Yaml, YamlLoader};

/// Parses a YAML stream into one node per document.
///
/// An empty stream yields an empty vector.
///
/// # Errors
///
/// This function will return an error if:
/// - The input is not valid YAML
/// - A mapping uses a sequence or mapping as a key
pub fn parse_yaml(yaml_str: &str) -> Result<Vec<YamlNode>> {
    let documents = YamlLoader::load_from_str(yaml_str).context("Failed to parse YAML")?;
    documents.iter().map(convert_yaml).collect()
}

/// Parses a single-document YAML string.
///
/// Returns a null node for an empty input and the first document when the
/// stream holds several.
pub fn parse_yaml_document(yaml_str: &str) -> Result<YamlNode> {
    Ok(parse_yaml(yaml_str)?
        .into_iter()
        .next()
        .unwrap_or_else(YamlNode::null))
}

fn convert_yaml(yaml: &Yaml) -> Result<YamlNode> {
    let value = match yaml {
        Yaml::Hash(hash) => {
            let mut entries = IndexMap::with_capacity(hash.len());
            for (key, value) in hash {
                entries.insert(mapping_key(key)?, convert_yaml(value)?);
            }
            YamlValue::Mapping(entries)
        }
        Yaml::Array(items) => {
            YamlValue::Sequence(items.iter().map(convert_yaml).collect::<Result<_>>()?)
        }
        Yaml::String(s) => YamlValue::String(s.clone()),
        Yaml::Integer(i) => YamlValue::Number(YamlNumber::Integer(*i)),
        // Real keeps the source spelling; fall back to text for values f64 can't hold
        Yaml::Real(raw) => match yaml.as_f64() {
            Some(f) => YamlValue::Number(YamlNumber::Float(f)),
            None => YamlValue::String(raw.clone()),
        },
        Yaml::Boolean(b) => YamlValue::Boolean(*b),
        Yaml::Null => YamlValue::Null,
        Yaml::Alias(id) => bail!("Unresolved YAML alias (id {})", id),
        Yaml::BadValue => bail!("Invalid YAML value"),
    };
    Ok(YamlNode::new(value))
}

fn mapping_key(key: &Yaml) -> Result<String> {
    match key {
        Yaml::String(s) | Yaml::Real(s) => Ok(s.clone()),
        Yaml::Integer(i) => Ok(i.to_string()),
        Yaml::Boolean(b) => Ok(b.to_string()),
        Yaml::Null => Ok("null".to_string()),
        _ => bail!("Unsupported mapping key: only scalar keys are allowed"),
    }
}
