//! Serialization of `YamlNode` trees back to YAML or JSON text.
//!
//! Nodes are converted to `serde_yaml::Value` first; that value is then
//! rendered by `serde_yaml` or, for JSON output, by `serde_json`.

use super::node::{YamlNode, YamlNumber, YamlValue};
use anyhow::{Context, Result};

/// Converts a node into a `serde_yaml::Value`.
///
/// Absent nodes become null.
pub fn to_serde_value(node: &YamlNode) -> serde_yaml::Value {
    match node.value() {
        YamlValue::Mapping(entries) => {
            let map: serde_yaml::Mapping = entries
                .iter()
                .map(|(k, v)| (serde_yaml::Value::String(k.clone()), to_serde_value(v)))
                .collect();
            serde_yaml::Value::Mapping(map)
        }
        YamlValue::Sequence(items) => {
            serde_yaml::Value::Sequence(items.iter().map(to_serde_value).collect())
        }
        YamlValue::String(s) => serde_yaml::Value::String(s.clone()),
        YamlValue::Number(n) => match n {
            YamlNumber::Integer(i) => serde_yaml::Value::Number(serde_yaml::Number::from(*i)),
            YamlNumber::Float(f) => serde_yaml::Value::Number(serde_yaml::Number::from(*f)),
        },
        YamlValue::Boolean(b) => serde_yaml::Value::Bool(*b),
        YamlValue::Null | YamlValue::Absent => serde_yaml::Value::Null,
    }
}

/// Renders a node as a YAML document (without a leading `---`).
pub fn to_yaml_string(node: &YamlNode) -> Result<String> {
    serde_yaml::to_string(&to_serde_value(node)).context("Failed to serialize YAML")
}

/// Renders a node as JSON, pretty-printed with two-space indentation or compact.
pub fn to_json_string(node: &YamlNode, pretty: bool) -> Result<String> {
    let value = to_serde_value(node);
    let rendered = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    rendered.context("Failed to serialize JSON")
}
