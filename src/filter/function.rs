//! Function operators and the predicate sublanguage they evaluate.
//!
//! The only function operator is `select(<relpath> <op> <literal>)`, which keeps
//! the elements of a sequence whose relative path resolves to a scalar that
//! compares true against the literal.

use super::cursor::Cursor;
use super::error::FilterError;
use super::path::{apply_steps, parse_steps, PathStep};
use super::session::Session;
use super::token::Token;
use crate::document::node::YamlNode;
use std::cmp::Ordering;

/// Named filter functions. Unknown names classify as `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionOperator {
    Select,
    Invalid,
}

impl From<&str> for FunctionOperator {
    fn from(name: &str) -> Self {
        match name {
            "select" => FunctionOperator::Select,
            _ => FunctionOperator::Invalid,
        }
    }
}

/// Comparison operators of a predicate. Unknown text classifies as `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
    Invalid,
}

impl From<&str> for LogicalOperator {
    fn from(text: &str) -> Self {
        match text {
            "==" => LogicalOperator::Equal,
            "!=" => LogicalOperator::NotEqual,
            ">" => LogicalOperator::GreaterThan,
            ">=" => LogicalOperator::GreaterOrEqual,
            "<" => LogicalOperator::LessThan,
            "<=" => LogicalOperator::LessOrEqual,
            _ => LogicalOperator::Invalid,
        }
    }
}

impl LogicalOperator {
    /// Compares two scalar texts.
    ///
    /// When both sides parse as numbers the comparison is numeric. Otherwise
    /// only `==` and `!=` apply; ordering operators on text never match.
    pub fn compare(self, lhs: &str, rhs: &str) -> bool {
        if let (Some(l), Some(r)) = (parse_number(lhs), parse_number(rhs)) {
            return match l.partial_cmp(&r) {
                Some(ordering) => self.accepts(ordering),
                None => false,
            };
        }
        match self {
            LogicalOperator::Equal => lhs == rhs,
            LogicalOperator::NotEqual => lhs != rhs,
            _ => false,
        }
    }

    fn accepts(self, ordering: Ordering) -> bool {
        match self {
            LogicalOperator::Equal => ordering == Ordering::Equal,
            LogicalOperator::NotEqual => ordering != Ordering::Equal,
            LogicalOperator::GreaterThan => ordering == Ordering::Greater,
            LogicalOperator::GreaterOrEqual => ordering != Ordering::Less,
            LogicalOperator::LessThan => ordering == Ordering::Less,
            LogicalOperator::LessOrEqual => ordering != Ordering::Greater,
            LogicalOperator::Invalid => false,
        }
    }
}

/// Parses finite decimal spellings only; `inf` and `nan` stay text.
fn parse_number(text: &str) -> Option<f64> {
    if !text.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn is_operator_char(token: &Token) -> bool {
    matches!(token, Token::Delim('!' | '=' | '<' | '>'))
}

/// A parsed `<relpath> <op> <literal>` comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub path: Vec<PathStep>,
    pub operator: LogicalOperator,
    pub literal: String,
}

impl Predicate {
    /// Parses a predicate body, consuming the whole of `session`.
    pub fn parse(session: &mut Session<'_>) -> Result<Self, FilterError> {
        let path = parse_steps(session);

        if session.len() < 2 {
            return Err(FilterError::syntax("missing arguments"));
        }

        let op_len = session
            .remaining()
            .iter()
            .take_while(|t| is_operator_char(t))
            .count();
        let op_text: String = if op_len == 0 {
            session.peek().map(|t| t.to_string()).unwrap_or_default()
        } else {
            session.remaining()[..op_len].iter().map(|t| t.to_string()).collect()
        };
        let operator = LogicalOperator::from(op_text.as_str());
        if operator == LogicalOperator::Invalid {
            return Err(FilterError::syntax(format!(
                "invalid logical operator '{}'",
                op_text
            )));
        }
        session.advance(op_len);

        let literal = match session.peek() {
            Some(Token::Word(word)) => word.clone(),
            _ => return Err(FilterError::syntax("missing arguments")),
        };
        session.advance(1);

        if let Some(extra) = session.peek() {
            return Err(FilterError::syntax(format!(
                "unexpected token '{}' in predicate",
                extra
            )));
        }

        Ok(Predicate {
            path,
            operator,
            literal,
        })
    }

    /// Returns true when the element's relative path is a scalar that compares
    /// true against the literal. Absent or container fields never match.
    pub fn matches(&self, element: &YamlNode) -> bool {
        let field = apply_steps(Cursor::borrowed(element), &self.path);
        match field.node().scalar_text() {
            Some(text) => self.operator.compare(&text, &self.literal),
            None => false,
        }
    }
}

/// Keeps the sequence elements matching `predicate`.
///
/// A non-sequence cursor is kept when it matches itself and becomes the
/// absent value otherwise.
pub fn select<'a>(cursor: Cursor<'a>, predicate: &Predicate) -> Cursor<'a> {
    if let Some(items) = cursor.node().as_sequence() {
        let kept = items
            .iter()
            .filter(|item| predicate.matches(item))
            .cloned()
            .collect();
        return Cursor::owned(YamlNode::sequence(kept));
    }
    if predicate.matches(cursor.node()) {
        cursor
    } else {
        Cursor::absent()
    }
}

/// Applies the function operator `name` to `cursor`.
///
/// `session` must be positioned just after the opening parenthesis. On
/// success the call's arguments are consumed and the session is left on the
/// closing parenthesis.
pub fn apply_function<'a>(
    name: &str,
    session: &mut Session<'_>,
    cursor: Cursor<'a>,
) -> Result<Cursor<'a>, FilterError> {
    match FunctionOperator::from(name) {
        FunctionOperator::Select => {
            let close = session
                .find(|t| t.is_delim(')'))
                .ok_or_else(|| FilterError::syntax("unterminated function operator: missing ')'"))?;
            let predicate = Predicate::parse(&mut session.window(close))?;
            log::debug!(
                "select {:?} {:?} {:?}",
                predicate.path,
                predicate.operator,
                predicate.literal
            );
            session.advance(close);
            Ok(select(cursor, &predicate))
        }
        FunctionOperator::Invalid => Err(FilterError::syntax(format!(
            "invalid function operator '{}'",
            name
        ))),
    }
}
