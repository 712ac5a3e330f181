//! Per-evaluation scratch state: a read position over an immutable token array.

use super::token::Token;

/// The unconsumed tokens of one evaluation run.
///
/// A session never mutates the token array; consuming tokens only moves the
/// read position forward. Each run owns its own session.
#[derive(Debug, Clone)]
pub struct Session<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Session<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Returns the tokens not consumed yet.
    pub fn remaining(&self) -> &'t [Token] {
        &self.tokens[self.pos..]
    }

    pub fn len(&self) -> usize {
        self.tokens.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    pub fn peek_nth(&self, n: usize) -> Option<&'t Token> {
        self.tokens.get(self.pos + n)
    }

    /// Returns the last token of the remaining input.
    pub fn last(&self) -> Option<&'t Token> {
        self.remaining().last()
    }

    /// Consumes `n` tokens, stopping at the end of input.
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.tokens.len());
    }

    /// Returns the offset of the first remaining token matching `pred`.
    pub fn find(&self, pred: impl Fn(&Token) -> bool) -> Option<usize> {
        self.remaining().iter().position(pred)
    }

    /// Returns a session over the next `len` tokens, leaving `self` untouched.
    pub fn window(&self, len: usize) -> Session<'t> {
        let end = (self.pos + len).min(self.tokens.len());
        Session::new(&self.tokens[self.pos..end])
    }
}
