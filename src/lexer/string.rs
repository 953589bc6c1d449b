//! String literal lexing.
//!
//! Two quote styles are accepted:
//!
//! - **Double-quoted**: `"CPU \"user\""`
//! - **Single-quoted**: `'avg'`
//!
//! Only the quote character and the backslash itself can be escaped. Any other
//! backslash sequence is kept verbatim, so regular expressions such as
//! `"web-\d+"` reach the AST untouched.
//!
//! # Examples
//!
//! ```rust
//! use nom_locate::LocatedSpan;
//! use rusty_metric_query_parser::lexer::string::string_literal;
//! use rusty_metric_query_parser::lexer::token::Quote;
//!
//! let (_, (s, quote)) = string_literal(LocatedSpan::new(r#""CPU \"user\"""#)).unwrap();
//! assert_eq!(s, r#"CPU "user""#);
//! assert_eq!(quote, Quote::Double);
//!
//! let (_, (s, _)) = string_literal(LocatedSpan::new(r"'web-\d+'")).unwrap();
//! assert_eq!(s, r"web-\d+");
//! ```

use nom::{
    IResult, Parser,
    branch::alt,
    character::complete::{anychar, char},
    combinator::verify,
    multi::fold_many0,
    sequence::{delimited, preceded},
};

use super::Span;
use super::token::Quote;

/// Parse a string literal, returning the unescaped value and its quote style.
pub fn string_literal(input: Span<'_>) -> IResult<Span<'_>, (String, Quote)> {
    alt((
        double_quoted_string.map(|s| (s, Quote::Double)),
        single_quoted_string.map(|s| (s, Quote::Single)),
    ))
    .parse(input)
}

/// Parse a double-quoted string: "hello \"world\""
pub fn double_quoted_string(input: Span<'_>) -> IResult<Span<'_>, String> {
    delimited(
        char('"'),
        fold_many0(quoted_fragment('"'), String::new, push_fragment),
        char('"'),
    )
    .parse(input)
}

/// Parse a single-quoted string: 'hello \'world\''
pub fn single_quoted_string(input: Span<'_>) -> IResult<Span<'_>, String> {
    delimited(
        char('\''),
        fold_many0(quoted_fragment('\''), String::new, push_fragment),
        char('\''),
    )
    .parse(input)
}

fn push_fragment(mut acc: String, fragment: String) -> String {
    acc.push_str(&fragment);
    acc
}

/// One logical character inside a quoted string (an escape sequence or a plain char)
fn quoted_fragment(quote: char) -> impl FnMut(Span<'_>) -> IResult<Span<'_>, String> {
    move |input| {
        alt((
            preceded(char('\\'), escape_sequence(quote)),
            verify(anychar, |&c| c != quote && c != '\\' && c != '\n').map(String::from),
        ))
        .parse(input)
    }
}

/// The character after a backslash
fn escape_sequence(quote: char) -> impl FnMut(Span<'_>) -> IResult<Span<'_>, String> {
    move |input| {
        let (rest, c) = anychar(input)?;
        let fragment = if c == quote || c == '\\' {
            c.to_string()
        } else {
            format!("\\{c}")
        };
        Ok((rest, fragment))
    }
}

/// Escape a string value for output between `quote` characters.
///
/// This is the inverse of the lexer: lexing the escaped text yields `value`
/// again.
pub fn escape(value: &str, quote: Quote) -> String {
    let q = quote.as_char();
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        if c == q {
            out.push('\\');
            out.push(c);
        } else if c == '\\' {
            // A lone backslash survives lexing unless it precedes something escapable.
            match chars.peek() {
                None => out.push_str("\\\\"),
                Some(&next) if next == q || next == '\\' => out.push_str("\\\\"),
                Some(_) => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}
