//! Error types for filter tokenizing, parsing and evaluation.

use thiserror::Error;

/// Errors that end a filter evaluation.
///
/// Every variant is terminal: the state machine stops at the first one and
/// hands it back to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The expression text could not be split into tokens.
    #[error("lex error: {message}")]
    Lex { message: String },
    /// The token stream does not form a valid filter.
    #[error("syntax error: {message}")]
    Syntax { message: String },
    /// The caller-imposed transition budget ran out.
    #[error("evaluation stopped after {limit} steps")]
    StepLimitExceeded { limit: usize },
}

impl FilterError {
    pub fn lex(message: impl Into<String>) -> Self {
        FilterError::Lex {
            message: message.into(),
        }
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        FilterError::Syntax {
            message: message.into(),
        }
    }

    /// Returns the diagnostic without the error-kind prefix.
    pub fn message(&self) -> String {
        match self {
            FilterError::Lex { message } | FilterError::Syntax { message } => message.clone(),
            FilterError::StepLimitExceeded { limit } => format!("step limit of {} exceeded", limit),
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, FilterError::Syntax { .. })
    }

    pub fn is_lex(&self) -> bool {
        matches!(self, FilterError::Lex { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind() {
        let err = FilterError::syntax("missing arguments");
        assert_eq!(err.to_string(), "syntax error: missing arguments");
        assert_eq!(err.message(), "missing arguments");
    }

    #[test]
    fn test_step_limit_message() {
        let err = FilterError::StepLimitExceeded { limit: 3 };
        assert_eq!(err.to_string(), "evaluation stopped after 3 steps");
        assert!(!err.is_syntax());
    }
}
