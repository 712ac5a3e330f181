//! Filter expression tokenizer.
//!
//! The tokenizer is purely lexical. It splits the text on a fixed delimiter
//! set and collects everything between delimiters into word tokens. Text in
//! double quotes becomes one word token, delimiters and whitespace included.

use super::error::FilterError;
use std::fmt;

/// Characters that always form a token of their own (outside double quotes).
pub const DELIMITERS: &[char] = &['.', ',', '|', '(', ')', '[', ']', '\'', '!', '=', '<', '>', '"'];

/// A lexical token of a filter expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A single delimiter character.
    Delim(char),
    /// A key, function name, operator word or literal.
    Word(String),
}

impl Token {
    pub fn is_delim(&self, c: char) -> bool {
        matches!(self, Token::Delim(d) if *d == c)
    }

    pub fn word(&self) -> Option<&str> {
        match self {
            Token::Word(w) => Some(w),
            Token::Delim(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Delim(c) => write!(f, "{}", c),
            Token::Word(w) => write!(f, "{}", w),
        }
    }
}

fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// Splits `text` into tokens.
///
/// Whitespace outside double quotes separates words and is dropped. The only
/// failure is a double-quoted span left open at the end of input.
///
/// # Example
///
/// ```
/// use yamlfilter::filter::token::{tokenize, Token};
///
/// let tokens = tokenize("'.a'").unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Delim('\''),
///         Token::Delim('.'),
///         Token::Word("a".to_string()),
///         Token::Delim('\''),
///     ]
/// );
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>, FilterError> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut quoted: Option<String> = None;

    for ch in text.chars() {
        if let Some(buf) = quoted.as_mut() {
            if ch == '"' {
                tokens.push(Token::Word(std::mem::take(buf)));
                quoted = None;
            } else {
                buf.push(ch);
            }
            continue;
        }

        if is_delimiter(ch) || ch.is_whitespace() {
            if !word.is_empty() {
                tokens.push(Token::Word(std::mem::take(&mut word)));
            }
            match ch {
                '"' => quoted = Some(String::new()),
                c if c.is_whitespace() => {}
                c => tokens.push(Token::Delim(c)),
            }
        } else {
            word.push(ch);
        }
    }

    if quoted.is_some() {
        return Err(FilterError::lex("unterminated string: missing closing double quote"));
    }
    if !word.is_empty() {
        tokens.push(Token::Word(word));
    }

    log::debug!("tokenized {:?} into {} tokens", text, tokens.len());
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(w: &str) -> Token {
        Token::Word(w.to_string())
    }

    #[test]
    fn test_tokenize_path() {
        let tokens = tokenize("'.a.b[]'").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Delim('\''),
                Token::Delim('.'),
                word("a"),
                Token::Delim('.'),
                word("b"),
                Token::Delim('['),
                Token::Delim(']'),
                Token::Delim('\''),
            ]
        );
    }

    #[test]
    fn test_tokenize_operators_split_per_char() {
        let tokens = tokenize(">=").unwrap();
        assert_eq!(tokens, vec![Token::Delim('>'), Token::Delim('=')]);
    }

    #[test]
    fn test_double_quotes_keep_delimiters() {
        let tokens = tokenize(r#""a.b (c)""#).unwrap();
        assert_eq!(tokens, vec![word("a.b (c)")]);
    }

    #[test]
    fn test_empty_quoted_string() {
        let tokens = tokenize(r#"x=="""#).unwrap();
        assert_eq!(
            tokens,
            vec![word("x"), Token::Delim('='), Token::Delim('='), word("")]
        );
    }

    #[test]
    fn test_whitespace_separates_words() {
        let tokens = tokenize(" a  b ").unwrap();
        assert_eq!(tokens, vec![word("a"), word("b")]);
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize(r#"'.[]."'"#).unwrap_err();
        assert!(err.is_lex());
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
    }
}
