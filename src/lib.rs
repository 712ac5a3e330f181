//! yamlfilter - a small jq-style filter language for YAML and JSON documents.
//!
//! - [`document`]: the tree model, YAML parsing and serialization
//! - [`filter`]: tokenizer, event builder, path resolver, `select`, state machine
//! - [`file`]: loading documents from files and stdin
//! - [`config`]: user configuration
//! - [`output`]: writing filter results as YAML, JSON or raw text

pub mod config;
pub mod document;
pub mod file;
pub mod filter;
pub mod output;

pub use filter::{apply, Filter, FilterError};
