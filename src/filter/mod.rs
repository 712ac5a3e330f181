//! A small jq-style filter language for YAML document trees.
//!
//! An expression is tokenized, reduced to a stream of structural events, and
//! evaluated by a state machine that walks and reshapes the document.
//!
//! # Supported Syntax
//!
//! The whole expression is enclosed in single quotes: `'<body>'`.
//!
//! - `.key` - Child access; on a sequence, collects `key` from every element
//! - `.key[]` - Child access flattening one level of sequence
//! - `.[]` - The current sequence
//! - `select(<relpath> <op> <literal>)` - Keep elements whose field compares true
//! - `|` - Optional separator between steps
//!
//! Operators are `==`, `!=`, `>`, `>=`, `<`, `<=`. Literals are bare words or
//! double-quoted strings. Numbers compare numerically, everything else as text.
//! `.` is a delimiter, so a decimal literal must be double-quoted:
//! `select(.v > "1.5")`. A bare `1.5` is a syntax error.
//!
//! # Examples
//!
//! ```
//! use yamlfilter::document::parser::parse_yaml_document;
//! use yamlfilter::filter::apply;
//!
//! let doc = parse_yaml_document("users: [{name: a, age: 30}, {name: b, age: 20}]").unwrap();
//! let result = apply(r#"'.users[] | select(.age > 25) | .name'"#, &doc).unwrap();
//! assert_eq!(result, parse_yaml_document("[a]").unwrap());
//! ```

pub mod cursor;
pub mod error;
pub mod event;
pub mod function;
pub mod machine;
pub mod path;
pub mod session;
pub mod token;

pub use cursor::Cursor;
pub use error::FilterError;
pub use event::{build_events, Event};
pub use function::{FunctionOperator, LogicalOperator, Predicate};
pub use machine::State;
pub use path::{resolve_oii, PathStep};
pub use session::Session;
pub use token::{tokenize, Token};

use crate::document::node::{YamlNode, YamlValue};

/// A tokenized filter expression, ready to be applied to any number of documents.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    expression: String,
    tokens: Vec<Token>,
    events: Vec<Event>,
    step_limit: Option<usize>,
}

impl Filter {
    /// Tokenizes `expression` and builds its event stream.
    ///
    /// Only lexical errors surface here; syntax errors are reported when the
    /// filter is applied.
    pub fn parse(expression: &str) -> Result<Self, FilterError> {
        let tokens = tokenize(expression)?;
        let events = build_events(&tokens);
        Ok(Self {
            expression: expression.to_string(),
            tokens,
            events,
            step_limit: None,
        })
    }

    /// Parses a filter body given without its enclosing single quotes.
    pub fn parse_bare(body: &str) -> Result<Self, FilterError> {
        Self::parse(&format!("'{}'", body))
    }

    /// Bounds the number of state transitions a single evaluation may take.
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Evaluates the filter against `root`.
    ///
    /// The source tree is only read; the result is a new node.
    pub fn apply(&self, root: &YamlNode) -> Result<YamlNode, FilterError> {
        let cursor = machine::run(&self.tokens, &self.events, root, self.step_limit)?;
        log::debug!(
            "{} produced a {}",
            self.expression,
            cursor.node().value().type_name()
        );
        Ok(cursor.into_node())
    }
}

/// Parses `expression` and applies it to `root`.
pub fn apply(expression: &str, root: &YamlNode) -> Result<YamlNode, FilterError> {
    Filter::parse(expression)?.apply(root)
}

/// Returns the scalar text of the result when the filter yields a single scalar.
pub fn get_value(expression: &str, root: &YamlNode) -> Result<Option<String>, FilterError> {
    Ok(apply(expression, root)?.scalar_text())
}

/// Returns the scalar texts of the result: the value itself for a scalar, the
/// scalar elements for a sequence (others skipped), nothing otherwise.
pub fn get_values(expression: &str, root: &YamlNode) -> Result<Vec<String>, FilterError> {
    Ok(scalar_texts(&apply(expression, root)?))
}

/// Scalar texts of a filter result, as described for [`get_values`].
pub fn scalar_texts(node: &YamlNode) -> Vec<String> {
    match node.value() {
        YamlValue::Sequence(items) => items.iter().filter_map(YamlNode::scalar_text).collect(),
        _ => node.scalar_text().into_iter().collect(),
    }
}
