//! Error types.
//!
//! Every failure carries the line and column of the offending input. The
//! grammars themselves produce [`SyntaxError`]s; the public entry points tag
//! them with the grammar that failed ([`Error::Filter`], [`Error::Query`], ...).

use thiserror::Error;

use crate::lexer::token::{Position, Token};

/// Text that matches none of the token rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character {character:?} at line {line}, column {column}")]
    UnexpectedCharacter {
        character: char,
        line: u32,
        column: usize,
    },
    #[error("unterminated string literal at line {line}, column {column}")]
    UnterminatedString { line: u32, column: usize },
}

impl LexError {
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnexpectedCharacter { line, .. } | LexError::UnterminatedString { line, .. } => {
                *line
            }
        }
    }

    pub fn column(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { column, .. }
            | LexError::UnterminatedString { column, .. } => *column,
        }
    }
}

/// A token sequence that does not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at {position}")]
pub struct SyntaxError {
    pub message: String,
    pub position: Position,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }

    /// Error reported at `token`, e.g. "expected `}`, found `,`".
    pub(crate) fn expected(what: &str, token: &Token) -> Self {
        Self::new(format!("expected {what}, found {token}"), token.pos)
    }

    /// Keep whichever of two errors got further into the input.
    ///
    /// Ordered alternatives report the failure of the branch that matched the
    /// most tokens, since that branch is most likely what the author meant. On a
    /// tie the first (higher priority) error wins.
    pub(crate) fn furthest(self, other: SyntaxError) -> SyntaxError {
        if other.position.offset > self.position.offset {
            other
        } else {
            self
        }
    }
}

/// Errors returned by the public parsing API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    #[error("invalid metric filter: {0}")]
    Filter(SyntaxError),

    #[error("invalid metric query: {0}")]
    Query(SyntaxError),

    #[error("invalid metric expression: {0}")]
    Expression(SyntaxError),

    #[error("invalid metric monitor: {0}")]
    Monitor(SyntaxError),

    /// Neither a metric query nor a metric expression; wraps the expression
    /// grammar's error.
    #[error("not a metric query or expression: {0}")]
    Dispatch(Box<Error>),
}

impl Error {
    /// Line and column of the offending input
    pub fn position(&self) -> Option<(u32, usize)> {
        match self {
            Error::Lex(e) => Some((e.line(), e.column())),
            Error::Filter(e) | Error::Query(e) | Error::Expression(e) | Error::Monitor(e) => {
                Some((e.position.line, e.position.column))
            }
            Error::Dispatch(inner) => inner.position(),
        }
    }

    /// The underlying syntax error, if this is not a lex error
    pub fn syntax_error(&self) -> Option<&SyntaxError> {
        match self {
            Error::Lex(_) => None,
            Error::Filter(e) | Error::Query(e) | Error::Expression(e) | Error::Monitor(e) => {
                Some(e)
            }
            Error::Dispatch(inner) => inner.syntax_error(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
