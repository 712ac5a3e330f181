//! Writing filter results.
//!
//! Applies a filter to every document of a stream and writes each result to
//! a `Write` sink as YAML, JSON or raw scalar text.

use crate::config::{Config, OutputFormat};
use crate::document::emitter::{to_json_string, to_yaml_string};
use crate::document::node::YamlNode;
use crate::filter::{scalar_texts, Filter};
use anyhow::{Context, Result};
use std::io::Write;

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// Print scalar results as plain text, one per line
    pub raw: bool,
    /// Print nothing for absent results
    pub skip_absent: bool,
    pub pretty_json: bool,
}

impl OutputOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            format: config.output_format,
            raw: false,
            skip_absent: config.skip_absent,
            pretty_json: config.pretty_json,
        }
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Applies `filter` to each document in order and writes the results.
///
/// YAML results are separated by `---`. With `raw` set, a scalar result or a
/// sequence of scalars is printed as plain text, one value per line; any
/// other result is written in `format`. Returns the number of results written.
///
/// # Errors
///
/// Fails on the first document the filter rejects, or when writing fails.
pub fn write_results<W: Write>(
    out: &mut W,
    filter: &Filter,
    documents: &[YamlNode],
    options: &OutputOptions,
) -> Result<usize> {
    let mut written = 0;
    let mut yaml_written = 0;

    for (index, document) in documents.iter().enumerate() {
        let result = filter
            .apply(document)
            .with_context(|| format!("Filter failed on document {}", index + 1))?;

        if result.is_absent() && options.skip_absent {
            log::debug!("document {} produced nothing", index + 1);
            continue;
        }

        if options.raw && is_plain_text(&result) {
            for text in scalar_texts(&result) {
                writeln!(out, "{}", text)?;
            }
        } else {
            if options.format == OutputFormat::Yaml && yaml_written > 0 {
                writeln!(out, "---")?;
            }
            write_result(out, &result, options)?;
            if options.format == OutputFormat::Yaml {
                yaml_written += 1;
            }
        }
        written += 1;
    }

    Ok(written)
}

/// Writes a single result in the configured format.
pub fn write_result<W: Write>(out: &mut W, result: &YamlNode, options: &OutputOptions) -> Result<()> {
    let written = match options.format {
        OutputFormat::Yaml => write!(out, "{}", to_yaml_string(result)?),
        OutputFormat::Json => writeln!(out, "{}", to_json_string(result, options.pretty_json)?),
    };
    written.context("Failed to write result")
}

fn is_plain_text(result: &YamlNode) -> bool {
    result.is_scalar()
        || result
            .as_sequence()
            .is_some_and(|items| items.iter().all(YamlNode::is_scalar))
}
