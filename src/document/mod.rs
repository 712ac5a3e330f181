//! Tree document model for YAML and JSON data.
//!
//! - [`node`]: the `YamlNode` tree consumed and produced by filters
//! - [`parser`]: YAML text to `YamlNode`
//! - [`emitter`]: `YamlNode` to YAML or JSON text

pub mod emitter;
pub mod node;
pub mod parser;

pub use node::{YamlNode, YamlNumber, YamlValue};
