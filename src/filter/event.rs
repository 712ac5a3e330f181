//! Event builder: reduces a token stream to the structural events that drive
//! the filter state machine.
//!
//! Events carry no payload. The state machine recovers keys, names and
//! literals from the token stream held by the evaluation session.

use super::token::Token;
use std::fmt;

/// A structural step of a filter expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Start of the expression, or a `|` separator between steps.
    PipeBoundary,
    /// A run of `.key`, `.key[]` and `.[]` steps.
    ObjectIndexStep,
    /// An opening or closing parenthesis of a function call.
    FunctionOperatorStep,
    /// The closing single quote.
    End,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Event::PipeBoundary => "PipeBoundary",
            Event::ObjectIndexStep => "ObjectIndexStep",
            Event::FunctionOperatorStep => "FunctionOperatorStep",
            Event::End => "End",
        };
        f.write_str(name)
    }
}

/// Builds the event sequence for `tokens` in one left-to-right scan.
///
/// The first event is always `PipeBoundary`. When the expression does not
/// open with a single quote the boundary is implicit, so the quoting check of
/// the start transition sees every malformed expression.
///
/// One `ObjectIndexStep` covers a whole run of dotted steps; the path
/// resolver consumes the run lazily. Dots inside parentheses belong to the
/// function call and emit nothing.
pub fn build_events(tokens: &[Token]) -> Vec<Event> {
    let mut events = Vec::new();
    let mut first_quote = true;
    let mut oii_flagged = false;
    let mut depth = 0usize;

    if !tokens.first().is_some_and(|t| t.is_delim('\'')) {
        events.push(Event::PipeBoundary);
        first_quote = false;
    }

    for token in tokens {
        let Token::Delim(delim) = token else {
            continue;
        };
        match *delim {
            '\'' if first_quote => {
                events.push(Event::PipeBoundary);
                first_quote = false;
            }
            '\'' => events.push(Event::End),
            '|' if depth == 0 => {
                events.push(Event::PipeBoundary);
                oii_flagged = false;
            }
            '.' if depth == 0 && !oii_flagged => {
                events.push(Event::ObjectIndexStep);
                oii_flagged = true;
            }
            '(' => {
                events.push(Event::FunctionOperatorStep);
                depth += 1;
            }
            ')' if depth > 0 => {
                events.push(Event::FunctionOperatorStep);
                depth -= 1;
                if depth == 0 {
                    oii_flagged = false;
                }
            }
            // unmatched; left in the session for the next transition to reject
            ')' => {}
            _ => {}
        }
    }

    log::debug!("built {} events from {} tokens", events.len(), tokens.len());
    events
}
