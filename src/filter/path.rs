//! Path resolver for object-index-identifier steps (`.key`, `.key[]`, `.[]`).
//!
//! The resolver greedily consumes dotted steps from the head of a session,
//! trying the longest pattern first, and stops without error at the first
//! token run that is not a path step. Whatever remains is left for the caller.

use super::cursor::Cursor;
use super::session::Session;
use super::token::Token;

/// One resolved path step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
    /// `.key` - descend, collecting from every element of a sequence
    Key(String),
    /// `.key[]` - descend and flatten one level of sequence
    FlattenKey(String),
    /// `.[]` - flatten the current sequence
    Flatten,
}

impl PathStep {
    pub fn apply<'a>(&self, cursor: Cursor<'a>) -> Cursor<'a> {
        match self {
            PathStep::Key(key) => cursor.collect_key(key),
            PathStep::FlattenKey(key) => cursor.flatten_key(key),
            PathStep::Flatten => cursor.flatten(),
        }
    }
}

/// Consumes the longest run of path steps at the head of `session`.
///
/// A lone `.` is a separator and produces no step. Calling this again once
/// no pattern matches consumes nothing and returns no steps.
pub fn parse_steps(session: &mut Session<'_>) -> Vec<PathStep> {
    let mut steps = Vec::new();
    loop {
        let (step, width) = match session.remaining() {
            [Token::Delim('.'), Token::Word(key), Token::Delim('['), Token::Delim(']'), ..] => {
                (Some(PathStep::FlattenKey(key.clone())), 4)
            }
            [Token::Delim('.'), Token::Delim('['), Token::Delim(']'), ..] => {
                (Some(PathStep::Flatten), 3)
            }
            [Token::Delim('.'), Token::Word(key), ..] => (Some(PathStep::Key(key.clone())), 2),
            [Token::Delim('.'), ..] => (None, 1),
            _ => break,
        };
        session.advance(width);
        steps.extend(step);
    }
    steps
}

/// Applies `steps` to `cursor` in order.
pub fn apply_steps<'a>(cursor: Cursor<'a>, steps: &[PathStep]) -> Cursor<'a> {
    steps.iter().fold(cursor, |cursor, step| step.apply(cursor))
}

/// Consumes the path steps at the head of `session` and applies them to `cursor`.
pub fn resolve_oii<'a>(session: &mut Session<'_>, cursor: Cursor<'a>) -> Cursor<'a> {
    let steps = parse_steps(session);
    log::trace!("resolved {} path steps", steps.len());
    apply_steps(cursor, &steps)
}
