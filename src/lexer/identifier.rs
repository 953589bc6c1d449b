//! Identifier lexing.
//!
//! Identifiers are deliberately permissive: `[A-Za-z0-9_][A-Za-z0-9_*-]*`. Tag
//! values such as `us-east-1a`, `bar-*` or `fizz-buzz3` lex as a single token.
//! Dots are not part of an identifier; dotted names like `system.cpu.user` are
//! assembled by the grammars from adjacent tokens.
//!
//! Keywords (`AND`, `OR`, `NOT`, `IN`, `by`, `true`, `false`) are ordinary
//! identifiers at this level. The grammars decide by case-insensitive
//! comparison whether an identifier acts as a keyword in a given position.

use nom::{
    IResult, Parser,
    bytes::complete::take_while,
    character::complete::satisfy,
    combinator::recognize,
    sequence::pair,
};

use super::Span;

/// Check if a character can start an identifier
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Check if a character can continue an identifier
#[inline]
pub fn is_ident_char(c: char) -> bool {
    is_ident_start(c) || c == '-' || c == '*'
}

/// Parse an identifier: `[A-Za-z0-9_][A-Za-z0-9_*-]*`
///
/// # Examples
///
/// ```
/// use nom_locate::LocatedSpan;
/// use rusty_metric_query_parser::lexer::identifier::identifier;
///
/// let (rest, name) = identifier(LocatedSpan::new("us-east-1a,")).unwrap();
/// assert_eq!(*name.fragment(), "us-east-1a");
/// assert_eq!(*rest.fragment(), ",");
///
/// let (_, name) = identifier(LocatedSpan::new("host-*")).unwrap();
/// assert_eq!(*name.fragment(), "host-*");
/// ```
pub fn identifier(input: Span<'_>) -> IResult<Span<'_>, Span<'_>> {
    recognize(pair(satisfy(is_ident_start), take_while(is_ident_char))).parse(input)
}

/// Words with a meaning in some grammar position.
///
/// None of them are reserved: `by` is a fine tag name and `in` a fine value
/// where the grammar does not expect a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    // Boolean filter operators
    And,
    Or,
    Not,
    In,

    // Grouping clause
    By,

    // Boolean literals
    True,
    False,
}

impl Keyword {
    /// Get the canonical spelling of the keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::And => "AND",
            Keyword::Or => "OR",
            Keyword::Not => "NOT",
            Keyword::In => "IN",
            Keyword::By => "by",
            Keyword::True => "true",
            Keyword::False => "false",
        }
    }

    /// Check if this keyword combines or negates filter terms
    pub fn is_filter_operator(&self) -> bool {
        matches!(
            self,
            Keyword::And | Keyword::Or | Keyword::Not | Keyword::In
        )
    }

    /// Check if this keyword is a boolean literal
    pub fn is_boolean(&self) -> bool {
        matches!(self, Keyword::True | Keyword::False)
    }
}

/// Look up a keyword (case-insensitive)
pub fn lookup_keyword(s: &str) -> Option<Keyword> {
    match s.to_ascii_lowercase().as_str() {
        "and" => Some(Keyword::And),
        "or" => Some(Keyword::Or),
        "not" => Some(Keyword::Not),
        "in" => Some(Keyword::In),
        "by" => Some(Keyword::By),
        "true" => Some(Keyword::True),
        "false" => Some(Keyword::False),
        _ => None,
    }
}
