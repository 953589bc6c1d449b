// Number literal lexing and canonical number formatting
//
// Supports:
// - Integers: 42, 0, 300
// - Floats: 3.14, .5
// - Signed numbers: +42, -0.1
//
// A number must not run into letters, digits or `_`: `2xx` and `1a` are
// identifiers, not numbers followed by identifiers. Operators may touch it, so
// `2*x` is `2`, `*`, `x`.

use nom::{
    IResult, Parser,
    branch::alt,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{opt, recognize},
};

use super::Span;
use super::identifier::is_ident_start;

/// Recognize a number literal and return its source text.
///
/// The token is a float when the returned text contains a decimal point.
///
/// # Examples
///
/// ```
/// use nom_locate::LocatedSpan;
/// use rusty_metric_query_parser::lexer::number::number_literal;
///
/// let (rest, text) = number_literal(LocatedSpan::new("-0.25 ")).unwrap();
/// assert_eq!(*text.fragment(), "-0.25");
/// assert_eq!(*rest.fragment(), " ");
///
/// // Letters right after the digits make this an identifier
/// assert!(number_literal(LocatedSpan::new("2xx")).is_err());
///
/// // An operator ends the number
/// let (rest, text) = number_literal(LocatedSpan::new("2*x")).unwrap();
/// assert_eq!(*text.fragment(), "2");
/// assert_eq!(*rest.fragment(), "*x");
/// ```
pub fn number_literal(input: Span<'_>) -> IResult<Span<'_>, Span<'_>> {
    let (rest, text) = recognize((
        opt(one_of("+-")),
        alt((recognize((digit0, char('.'), digit1)), digit1)),
    ))
    .parse(input)?;

    // Ensure not followed by a letter, digit or underscore
    if rest.fragment().chars().next().is_some_and(is_ident_start) {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Digit,
        )));
    }

    Ok((rest, text))
}

/// Parse the text of a number token into its value.
pub fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Render a number the way queries write them.
///
/// Integral values have no decimal point and nothing is ever written in
/// scientific notation. Fractions keep at most 15 decimals, with trailing zeros
/// (and a dangling point) removed.
///
/// # Examples
///
/// ```
/// use rusty_metric_query_parser::lexer::number::format_number;
///
/// assert_eq!(format_number(100.0), "100");
/// assert_eq!(format_number(0.1), "0.1");
/// assert_eq!(format_number(-25.75), "-25.75");
/// assert_eq!(format_number(1e21), "1000000000000000000000");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == value.trunc() {
        // Avoid printing "-0"
        let value = if value == 0.0 { 0.0 } else { value };
        return format!("{value:.0}");
    }
    let fixed = format!("{value:.15}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" || trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
