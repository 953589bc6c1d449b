//! Values: filter values and function arguments.
//!
//! A value is one of:
//!
//! - a boolean: `true`, `false` (any case)
//! - a quoted string: `"CPU User"`, `'avg'`
//! - a number: `60`, `0.01`, `-5`
//! - a wildcard: any bareword containing `*`, e.g. `web-*`, `*value-*`
//! - an identifier: any other bareword, e.g. `us-east-1a`, `bar/hello`, `!staging`
//!
//! Inside filters a boolean keyword (`AND`, `OR`, `IN`) in value position is
//! kept as a [`Value::Separator`] so that it is reproduced verbatim.
//!
//! # Examples
//!
//! ```rust
//! use rusty_metric_query_parser::lexer::Lexer;
//! use rusty_metric_query_parser::parser::value::{Value, value};
//!
//! let tokens = Lexer::new().tokenize("us-east-1a").unwrap();
//! let (_, v) = value(&tokens).unwrap();
//! assert_eq!(v, Value::Identifier("us-east-1a".to_string()));
//!
//! let tokens = Lexer::new().tokenize("web-*").unwrap();
//! let (_, v) = value(&tokens).unwrap();
//! assert_eq!(v, Value::Wildcard("web-*".to_string()));
//! ```

use std::fmt;

use crate::error::SyntaxError;
use crate::lexer::identifier::{Keyword, lookup_keyword};
use crate::lexer::number::{format_number, parse_number};
use crate::lexer::string::escape;
use crate::lexer::token::{Quote, TokenKind};
use crate::parser::primitives::{Bareword, PResult, Tokens, bareword, bump, peek, peek_nth};

/// Separator between filter terms or list items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterValueSeparator {
    /// `,`
    Comma,
    /// `AND NOT`
    AndNot,
    /// `AND`
    And,
    /// `OR`
    Or,
    /// `IN`
    In,
}

impl FilterValueSeparator {
    /// The separator as written, without surrounding spaces
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterValueSeparator::Comma => ",",
            FilterValueSeparator::AndNot => "AND NOT",
            FilterValueSeparator::And => "AND",
            FilterValueSeparator::Or => "OR",
            FilterValueSeparator::In => "IN",
        }
    }
}

impl fmt::Display for FilterValueSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValueSeparator::Comma => write!(f, ","),
            other => write!(f, " {} ", other.as_str()),
        }
    }
}

/// A filter value or function argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Identifier(String),
    String { value: String, quote: Quote },
    Number(f64),
    Wildcard(String),
    /// A separator keyword in value position: `a:AND`
    Separator(FilterValueSeparator),
}

impl Value {
    pub fn identifier(name: impl Into<String>) -> Self {
        Value::Identifier(name.into())
    }

    /// A double-quoted string value
    pub fn string(value: impl Into<String>) -> Self {
        Value::String {
            value: value.into(),
            quote: Quote::Double,
        }
    }

    pub fn wildcard(pattern: impl Into<String>) -> Self {
        Value::Wildcard(pattern.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Identifier(s) | Value::Wildcard(s) => write!(f, "{s}"),
            Value::String { value, quote } => {
                let q = quote.as_char();
                write!(f, "{q}{}{q}", escape(value, *quote))
            }
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::Separator(sep) => write!(f, "{}", sep.as_str()),
        }
    }
}

/// Match one of the keyword separators: `AND NOT`, `AND`, `OR`, `IN`.
pub fn keyword_separator(input: Tokens<'_>) -> Option<(Tokens<'_>, FilterValueSeparator)> {
    let (rest, token) = bump(input);
    if token.is_keyword(Keyword::And.as_str()) {
        if peek_nth(input, 1).is_keyword(Keyword::Not.as_str()) {
            return Some((bump(rest).0, FilterValueSeparator::AndNot));
        }
        return Some((rest, FilterValueSeparator::And));
    }
    if token.is_keyword(Keyword::Or.as_str()) {
        return Some((rest, FilterValueSeparator::Or));
    }
    if token.is_keyword(Keyword::In.as_str()) {
        return Some((rest, FilterValueSeparator::In));
    }
    None
}

/// Parse a separator between filter terms: `,`, `AND NOT`, `AND`, `OR`, `IN`.
pub fn value_separator(input: Tokens<'_>) -> PResult<'_, FilterValueSeparator> {
    let (rest, token) = bump(input);
    if token.is_punct(',') {
        return Ok((rest, FilterValueSeparator::Comma));
    }
    keyword_separator(input)
        .ok_or_else(|| SyntaxError::expected("`,`, `AND`, `OR` or `IN`", token))
}

/// Parse a filter value.
pub fn value(input: Tokens<'_>) -> PResult<'_, Value> {
    if let Some((rest, sep)) = keyword_separator(input) {
        return Ok((rest, Value::Separator(sep)));
    }
    argument(input)
}

/// Parse a function argument: boolean, identifier, string or number.
pub fn argument(input: Tokens<'_>) -> PResult<'_, Value> {
    if let TokenKind::Str(quote) = peek(input).kind {
        let (rest, token) = bump(input);
        return Ok((
            rest,
            Value::String {
                value: token.text.clone(),
                quote,
            },
        ));
    }
    let (rest, word) = bareword(input)?;
    Ok((rest, classify(word)))
}

fn classify(word: Bareword<'_>) -> Value {
    match lookup_keyword(&word.text) {
        Some(Keyword::True) => return Value::Boolean(true),
        Some(Keyword::False) => return Value::Boolean(false),
        _ => {}
    }
    if word.is_number() {
        if let Some(n) = parse_number(&word.text) {
            return Value::Number(n);
        }
    }
    if word.text.contains('*') {
        Value::Wildcard(word.text)
    } else {
        Value::Identifier(word.text)
    }
}
