//! Token types produced by the [`Lexer`](super::Lexer).
//!
//! Every token records where it starts (byte offset, line and column) and the
//! byte offset where it ends. The grammars use the offsets to tell whether two
//! tokens were written next to each other (`bar/hello`) or separated by
//! whitespace (`a / b`).

use std::fmt;

/// Location of a token in the input text.
///
/// `line` and `column` are 1-based; `offset` is the 0-based byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: usize,
}

impl Position {
    pub const fn new(offset: usize, line: u32, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0, 1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Quote character used by a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Quote {
    /// `"value"`
    #[default]
    Double,
    /// `'value'`
    Single,
}

impl Quote {
    pub fn as_char(&self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
        }
    }
}

/// Token classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `[A-Za-z0-9_][A-Za-z0-9_*-]*`, keywords included
    Ident,
    /// Number without a decimal point: `42`, `-7`
    Int,
    /// Number with a decimal point: `0.5`, `.25`, `-1.5`
    Float,
    /// Quoted string; the token text holds the unescaped contents
    Str(Quote),
    /// A single punctuation character
    Punct,
    /// End of input. Always the last token of a tokenized input.
    Eof,
}

/// A single lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw source text, except for strings where it is the unescaped value
    pub text: String,
    pub pos: Position,
    /// Byte offset one past the last character of the token
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: Position, end: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
            end,
        }
    }

    pub(crate) fn eof(pos: Position) -> Self {
        Self::new(TokenKind::Eof, "", pos, pos.offset)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Check for a specific punctuation character.
    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct && self.text.len() == c.len_utf8() && self.text.starts_with(c)
    }

    /// Check for a keyword. Keywords are identifiers compared case-insensitively.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Ident && self.text.eq_ignore_ascii_case(keyword)
    }

    pub fn is_number(&self) -> bool {
        matches!(self.kind, TokenKind::Int | TokenKind::Float)
    }

    /// True if `next` starts exactly where this token ends.
    pub fn touches(&self, next: &Token) -> bool {
        !next.is_eof() && self.end == next.pos.offset
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Str(quote) => {
                let q = quote.as_char();
                write!(f, "{q}{}{q}", super::string::escape(&self.text, quote))
            }
            _ => write!(f, "`{}`", self.text),
        }
    }
}
