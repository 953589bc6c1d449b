//! Whitespace and comment lexing.
//!
//! Whitespace includes spaces, tabs, newlines, and carriage returns. A comment
//! is the word `rem` (any case) followed by whitespace or the end of input, and
//! runs to the end of the line. The word must stand alone, so identifiers such
//! as `remaining` or a tag key like `rem:1` are left alone.
//!
//! # Examples
//!
//! ```rust
//! use nom_locate::LocatedSpan;
//! use rusty_metric_query_parser::lexer::whitespace::skip_trivia;
//!
//! let rest = skip_trivia(LocatedSpan::new("  REM disk usage\n  sum"), true);
//! assert_eq!(*rest.fragment(), "sum");
//! ```

use nom::{
    IResult, Parser,
    bytes::complete::{tag_no_case, take_while, take_while1},
    combinator::recognize,
};

use super::Span;

/// Check if a character is whitespace (space, tab, newline, or carriage return).
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n' || c == '\r'
}

/// Parse one or more whitespace characters.
pub fn whitespace1(input: Span<'_>) -> IResult<Span<'_>, Span<'_>> {
    take_while1(is_whitespace)(input)
}

/// Parse a `rem` comment up to (not including) the end of the line.
pub fn rem_comment(input: Span<'_>) -> IResult<Span<'_>, Span<'_>> {
    let (after_keyword, _) = tag_no_case("rem")(input)?;
    if after_keyword
        .fragment()
        .chars()
        .next()
        .is_some_and(|c| !is_whitespace(c))
    {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        )));
    }
    recognize((
        tag_no_case("rem"),
        take_while(|c: char| c != '\n' && c != '\r'),
    ))
    .parse(input)
}

/// Skip any combination of whitespace and (when enabled) comments.
pub fn skip_trivia(input: Span<'_>, comments: bool) -> Span<'_> {
    let mut rest = input;
    loop {
        if let Ok((next, _)) = whitespace1(rest) {
            rest = next;
        } else if let Some((next, _)) = comments.then(|| rem_comment(rest).ok()).flatten() {
            rest = next;
        } else {
            return rest;
        }
    }
}
