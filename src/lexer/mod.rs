//! Lexer for metric queries.
//!
//! The lexer turns text into a lazy stream of [`Token`]s. At each position the
//! first matching rule wins, in this order:
//!
//! 1. whitespace and `rem` comments (skipped)
//! 2. quoted strings
//! 3. numbers
//! 4. identifiers
//! 5. single punctuation characters
//!
//! The vocabulary is described by a [`LexerConfig`]. A [`Lexer`] is an
//! immutable value: create it once and hand a reference to every grammar.
//!
//! # Example
//!
//! ```rust
//! use rusty_metric_query_parser::lexer::{Lexer, token::TokenKind};
//!
//! let lexer = Lexer::new();
//! let tokens = lexer.tokenize("sum:cpu{host:web-1}").unwrap();
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, ["sum", ":", "cpu", "{", "host", ":", "web-1", "}", ""]);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
//! ```

pub mod identifier;
pub mod number;
pub mod string;
pub mod token;
pub mod whitespace;

use nom::{IResult, Parser, branch::alt, character::complete::anychar, combinator::verify};
use nom_locate::LocatedSpan;

use crate::error::LexError;
use token::{Position, Token, TokenKind};

/// Input type of the token-level recognizers: text with its location.
pub type Span<'a> = LocatedSpan<&'a str>;

/// Punctuation characters every grammar understands.
pub const DEFAULT_PUNCTUATION: &str = "{}(),.:!*/+-<>=~";

/// Token vocabulary shared by all grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Characters emitted as single punctuation tokens
    pub punctuation: &'static str,
    /// Whether `rem` comments are recognized and skipped
    pub comments: bool,
}

impl LexerConfig {
    pub const fn new() -> Self {
        Self {
            punctuation: DEFAULT_PUNCTUATION,
            comments: true,
        }
    }

    /// Disable `rem` comments, so `rem` always lexes as an identifier
    pub const fn without_comments(mut self) -> Self {
        self.comments = false;
        self
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenizer for metric queries, filters, expressions and monitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lexer {
    config: LexerConfig,
}

impl Lexer {
    /// Create a lexer with the default vocabulary
    pub const fn new() -> Self {
        Self::with_config(LexerConfig::new())
    }

    pub const fn with_config(config: LexerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Lazily lex `input`. The iterator stops after the first error.
    ///
    /// The stream does not include the trailing [`TokenKind::Eof`] token that
    /// [`Lexer::tokenize`] appends.
    pub fn tokens<'l, 'a>(&'l self, input: &'a str) -> TokenIter<'l, 'a> {
        TokenIter {
            config: &self.config,
            rest: Span::new(input),
            finished: false,
        }
    }

    /// Lex the whole input, terminated by an end-of-input token.
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>, LexError> {
        let mut iter = self.tokens(input);
        let mut tokens = Vec::new();
        for token in iter.by_ref() {
            tokens.push(token?);
        }
        tokens.push(Token::eof(iter.position()));
        Ok(tokens)
    }
}

/// Lazy token stream returned by [`Lexer::tokens`].
#[derive(Debug, Clone)]
pub struct TokenIter<'l, 'a> {
    config: &'l LexerConfig,
    rest: Span<'a>,
    finished: bool,
}

impl TokenIter<'_, '_> {
    /// Position of the next unread character
    pub fn position(&self) -> Position {
        position(&self.rest)
    }
}

impl Iterator for TokenIter<'_, '_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        self.rest = whitespace::skip_trivia(self.rest, self.config.comments);
        if self.rest.fragment().is_empty() {
            self.finished = true;
            return None;
        }

        let start = self.rest;
        match next_token(self.config, start) {
            Ok((rest, (kind, text))) => {
                self.rest = rest;
                Some(Ok(Token::new(
                    kind,
                    text,
                    position(&start),
                    rest.location_offset(),
                )))
            }
            Err(_) => {
                self.finished = true;
                Some(Err(lex_error(&start)))
            }
        }
    }
}

fn position(span: &Span<'_>) -> Position {
    Position::new(
        span.location_offset(),
        span.location_line(),
        span.get_utf8_column(),
    )
}

/// Recognize a single token at the start of `input`.
fn next_token<'a>(
    config: &LexerConfig,
    input: Span<'a>,
) -> IResult<Span<'a>, (TokenKind, String)> {
    alt((
        string::string_literal.map(|(value, quote)| (TokenKind::Str(quote), value)),
        number::number_literal.map(|text| {
            let kind = if text.fragment().contains('.') {
                TokenKind::Float
            } else {
                TokenKind::Int
            };
            (kind, text.fragment().to_string())
        }),
        identifier::identifier.map(|text| (TokenKind::Ident, text.fragment().to_string())),
        verify(anychar, |c: &char| config.punctuation.contains(*c))
            .map(|c| (TokenKind::Punct, c.to_string())),
    ))
    .parse(input)
}

fn lex_error(at: &Span<'_>) -> LexError {
    let pos = position(at);
    let character = at.fragment().chars().next().unwrap_or_default();
    if character == '"' || character == '\'' {
        LexError::UnterminatedString {
            line: pos.line,
            column: pos.column,
        }
    } else {
        LexError::UnexpectedCharacter {
            character,
            line: pos.line,
            column: pos.column,
        }
    }
}
