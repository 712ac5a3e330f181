//! The filter state machine and its driving loop.
//!
//! Each event moves the machine from one `State` to the next. Payload-specific
//! work (resolving paths, applying functions) happens inside the transition,
//! reading tokens from the evaluation's `Session`. `End` and `Error` are
//! terminal: once reached, the remaining events are ignored.

use super::cursor::Cursor;
use super::error::FilterError;
use super::event::Event;
use super::function::apply_function;
use super::path::resolve_oii;
use super::session::Session;
use super::token::Token;
use crate::document::node::YamlNode;

/// Evaluation state. Every non-error state carries the current cursor.
#[derive(Debug, Clone, PartialEq)]
pub enum State<'a> {
    Start(Cursor<'a>),
    Pipe(Cursor<'a>),
    Oii(Cursor<'a>),
    /// After a call to `name`; `open` until its closing parenthesis is consumed.
    FunctionOperator {
        cursor: Cursor<'a>,
        name: String,
        open: bool,
    },
    End(Cursor<'a>),
    Error(FilterError),
}

impl<'a> State<'a> {
    pub fn name(&self) -> &'static str {
        match self {
            State::Start(_) => "Start",
            State::Pipe(_) => "Pipe",
            State::Oii(_) => "Oii",
            State::FunctionOperator { .. } => "FunctionOperator",
            State::End(_) => "End",
            State::Error(_) => "Error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, State::End(_) | State::Error(_))
    }

    /// Applies `event`, consuming tokens from `session` as needed.
    ///
    /// Terminal states return themselves. Pairs with no defined transition
    /// end in `Error`.
    pub fn transition(self, event: Event, session: &mut Session<'_>) -> State<'a> {
        match (self, event) {
            (state @ (State::End(_) | State::Error(_)), _) => state,
            (State::Start(cursor), Event::PipeBoundary) => start(cursor, session),
            (
                State::Pipe(cursor) | State::FunctionOperator { cursor, .. },
                Event::ObjectIndexStep,
            ) => object_index(cursor, session),
            (State::Pipe(cursor) | State::Oii(cursor), Event::FunctionOperatorStep) => {
                call_function(cursor, session)
            }
            (State::FunctionOperator { cursor, name, open }, Event::FunctionOperatorStep) => {
                match (open, session.peek()) {
                    (true, Some(token)) if token.is_delim(')') => {
                        session.advance(1);
                        State::FunctionOperator {
                            cursor,
                            name,
                            open: false,
                        }
                    }
                    (false, Some(token)) if token.is_delim(')') => {
                        State::Error(FilterError::syntax("unexpected token ')'"))
                    }
                    _ => call_function(cursor, session),
                }
            }
            (
                State::Oii(cursor) | State::FunctionOperator { cursor, .. },
                Event::PipeBoundary,
            ) => pipe(cursor, session),
            (State::Oii(cursor) | State::FunctionOperator { cursor, .. }, Event::End) => {
                finish(cursor, session)
            }
            (state, event) => State::Error(FilterError::syntax(format!(
                "unexpected event in state: {} in {}",
                event,
                state.name()
            ))),
        }
    }

    /// Returns the result of a finished run: the cursor, or the error.
    pub fn into_result(self) -> Result<Cursor<'a>, FilterError> {
        match self {
            State::Error(err) => Err(err),
            State::Start(cursor)
            | State::Pipe(cursor)
            | State::Oii(cursor)
            | State::FunctionOperator { cursor, .. }
            | State::End(cursor) => Ok(cursor),
        }
    }
}

fn start<'a>(cursor: Cursor<'a>, session: &mut Session<'_>) -> State<'a> {
    if session.len() < 2 {
        return State::Error(FilterError::syntax("too few arguments"));
    }
    let opens = session.peek().is_some_and(|t| t.is_delim('\''));
    let closes = session.last().is_some_and(|t| t.is_delim('\''));
    if !opens || !closes {
        return State::Error(FilterError::syntax(
            "command must be enclosed in single quotes",
        ));
    }
    session.advance(1);

    // ''
    if session.len() == 1 {
        session.advance(1);
        return State::End(cursor);
    }
    State::Pipe(cursor)
}

fn object_index<'a>(cursor: Cursor<'a>, session: &mut Session<'_>) -> State<'a> {
    match session.peek() {
        None => State::Error(FilterError::syntax("missing arguments")),
        Some(token) if !token.is_delim('.') => State::Error(FilterError::syntax(
            "object index must start with a dot",
        )),
        Some(_) => State::Oii(resolve_oii(session, cursor)),
    }
}

fn call_function<'a>(cursor: Cursor<'a>, session: &mut Session<'_>) -> State<'a> {
    if session.len() < 3 {
        return State::Error(FilterError::syntax("missing arguments"));
    }
    let name = match (session.peek(), session.peek_nth(1)) {
        (Some(Token::Word(name)), Some(open)) if open.is_delim('(') => name.clone(),
        _ => {
            return State::Error(FilterError::syntax(
                "function operator must start with a name followed by '('",
            ))
        }
    };
    session.advance(2);

    match apply_function(&name, session, cursor) {
        Ok(cursor) => State::FunctionOperator {
            cursor,
            name,
            open: true,
        },
        Err(err) => State::Error(err),
    }
}

fn pipe<'a>(cursor: Cursor<'a>, session: &mut Session<'_>) -> State<'a> {
    if !session.peek().is_some_and(|t| t.is_delim('|')) {
        return State::Error(FilterError::syntax("expected '|' between steps"));
    }
    session.advance(1);
    State::Pipe(cursor)
}

fn finish<'a>(cursor: Cursor<'a>, session: &mut Session<'_>) -> State<'a> {
    match session.peek() {
        Some(token) if token.is_delim('\'') && session.len() == 1 => {
            session.advance(1);
            State::End(cursor)
        }
        Some(token) => State::Error(FilterError::syntax(format!(
            "unexpected token '{}'",
            token
        ))),
        None => State::Error(FilterError::syntax("missing closing single quote")),
    }
}

/// Drives the state machine over `events`, starting from `root`.
///
/// Stops at the first terminal state. When `step_limit` is set, running more
/// transitions than that fails with `StepLimitExceeded`.
pub fn run<'a>(
    tokens: &[Token],
    events: &[Event],
    root: &'a YamlNode,
    step_limit: Option<usize>,
) -> Result<Cursor<'a>, FilterError> {
    let mut session = Session::new(tokens);
    let mut state = State::Start(Cursor::borrowed(root));

    for (step, event) in events.iter().enumerate() {
        if state.is_terminal() {
            break;
        }
        if let Some(limit) = step_limit {
            if step >= limit {
                return Err(FilterError::StepLimitExceeded { limit });
            }
        }
        let from = state.name();
        state = state.transition(*event, &mut session);
        log::trace!("{} --({})--> {}", from, event, state.name());
    }

    if let State::Error(err) = &state {
        log::debug!("filter failed: {}", err);
    }
    state.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::parse_yaml_document;
    use crate::filter::event::build_events;
    use crate::filter::token::tokenize;

    fn eval(text: &str, doc: &YamlNode) -> Result<YamlNode, FilterError> {
        let tokens = tokenize(text)?;
        let events = build_events(&tokens);
        run(&tokens, &events, doc, None).map(Cursor::into_node)
    }

    #[test]
    fn test_start_requires_two_tokens() {
        let tokens = tokenize("'").unwrap();
        let mut session = Session::new(&tokens);
        let doc = YamlNode::null();
        let state = State::Start(Cursor::borrowed(&doc)).transition(Event::PipeBoundary, &mut session);
        assert_eq!(state, State::Error(FilterError::syntax("too few arguments")));
    }

    #[test]
    fn test_start_requires_quotes() {
        let doc = YamlNode::null();
        let err = eval(".a.b", &doc).unwrap_err();
        assert_eq!(err.message(), "command must be enclosed in single quotes");
        let err = eval("'.a.b", &doc).unwrap_err();
        assert_eq!(err.message(), "command must be enclosed in single quotes");
    }

    #[test]
    fn test_empty_body_ends_immediately() {
        let doc = parse_yaml_document("a: 1").unwrap();
        assert_eq!(eval("''", &doc).unwrap(), doc);
    }

    #[test]
    fn test_pipe_to_oii_to_end() {
        let doc = parse_yaml_document("a: {b: 5}").unwrap();
        assert_eq!(eval("'.a.b'", &doc).unwrap(), YamlNode::integer(5));
    }

    #[test]
    fn test_unexpected_event() {
        let doc = YamlNode::null();
        let err = eval("'abc'", &doc).unwrap_err();
        assert!(err.message().starts_with("unexpected event in state"));
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        let doc = parse_yaml_document("a: 1").unwrap();
        let err = eval("'.a b'", &doc).unwrap_err();
        assert_eq!(err.message(), "unexpected token 'b'");
        let err = eval("'.a'.b'", &doc).unwrap_err();
        assert!(err.is_syntax());
    }

    #[test]
    fn test_function_name_required() {
        let doc = parse_yaml_document("[1]").unwrap();
        let err = eval("'.[] (.x==1)'", &doc).unwrap_err();
        assert_eq!(
            err.message(),
            "function operator must start with a name followed by '('"
        );
    }

    #[test]
    fn test_single_close_per_call() {
        let doc = parse_yaml_document("[{a: 1}, {a: 2}]").unwrap();
        let err = eval("'select(.a==1)))'", &doc).unwrap_err();
        assert_eq!(err.message(), "unexpected token ')'");
        let err = eval("'select(.a==1)).a'", &doc).unwrap_err();
        assert_eq!(err.message(), "object index must start with a dot");
        let err = eval("'select(.a==1)) select(.a==1)'", &doc).unwrap_err();
        assert_eq!(err.message(), "unexpected token ')'");
    }

    #[test]
    fn test_closed_call_rejects_close() {
        let tokens = tokenize(")'").unwrap();
        let mut session = Session::new(&tokens);
        let doc = YamlNode::null();
        let state = State::FunctionOperator {
            cursor: Cursor::borrowed(&doc),
            name: "select".to_string(),
            open: false,
        };
        let next = state.transition(Event::FunctionOperatorStep, &mut session);
        assert_eq!(next, State::Error(FilterError::syntax("unexpected token ')'")));
    }

    #[test]
    fn test_error_is_terminal() {
        let tokens = tokenize("'.a'").unwrap();
        let mut session = Session::new(&tokens);
        let state: State<'_> = State::Error(FilterError::syntax("boom"));
        let next = state.transition(Event::End, &mut session);
        assert_eq!(next, State::Error(FilterError::syntax("boom")));
        assert_eq!(session.len(), 4);
    }

    #[test]
    fn test_step_limit() {
        let doc = parse_yaml_document("a: {b: 5}").unwrap();
        let tokens = tokenize("'.a.b'").unwrap();
        let events = build_events(&tokens);
        assert_eq!(
            run(&tokens, &events, &doc, Some(2)).unwrap_err(),
            FilterError::StepLimitExceeded { limit: 2 }
        );
        assert!(run(&tokens, &events, &doc, Some(3)).is_ok());
    }
}
