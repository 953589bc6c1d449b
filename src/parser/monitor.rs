//! Monitor parsing: `aggregation(window):query comparator threshold`.
//!
//! ```text
//! metric_monitor = identifier "(" window ")" ":" metric_query comparator number
//! comparator     = ">" | ">=" | "<" | "<="
//! ```
//!
//! The two characters of `>=` and `<=` must be written together.
//!
//! # Examples
//!
//! ```rust
//! use rusty_metric_query_parser::ast::Comparator;
//! use rusty_metric_query_parser::lexer::Lexer;
//! use rusty_metric_query_parser::parser::monitor::metric_monitor;
//!
//! let tokens = Lexer::new()
//!     .tokenize("avg(last_5m):avg:system.cpu.user{env:prod} > 80")
//!     .unwrap();
//! let (_, m) = metric_monitor(&tokens).unwrap();
//! assert_eq!(m.aggregation, "avg");
//! assert_eq!(m.evaluation_window, "last_5m");
//! assert_eq!(m.comparator, Comparator::Gt);
//! assert_eq!(m.threshold, 80.0);
//! ```

use crate::ast::{Comparator, MetricMonitor};
use crate::error::SyntaxError;
use crate::lexer::number::parse_number;
use crate::parser::primitives::{PResult, Tokens, adjacent_punct, bareword, bump, ident, punct};
use crate::parser::query::metric_query;

/// Parse a monitor definition.
pub fn metric_monitor(input: Tokens<'_>) -> PResult<'_, MetricMonitor> {
    let (input, aggregation) = ident(input)?;
    let (input, _) = punct(input, '(')?;
    let (input, window) = bareword(input)?;
    let (input, _) = punct(input, ')')?;
    let (input, _) = punct(input, ':')?;
    let (input, query) = metric_query(input)?;
    let (input, comparator) = comparator(input)?;
    let (input, threshold) = threshold(input)?;
    Ok((
        input,
        MetricMonitor {
            aggregation: aggregation.text.clone(),
            evaluation_window: window.text,
            query,
            comparator,
            threshold,
        },
    ))
}

/// Parse `>`, `>=`, `<` or `<=`.
pub fn comparator(input: Tokens<'_>) -> PResult<'_, Comparator> {
    let (rest, token) = bump(input);
    let (strict, inclusive) = if token.is_punct('>') {
        (Comparator::Gt, Comparator::Ge)
    } else if token.is_punct('<') {
        (Comparator::Lt, Comparator::Le)
    } else {
        return Err(SyntaxError::expected(
            "a comparator (`>`, `>=`, `<` or `<=`)",
            token,
        ));
    };
    Ok(match adjacent_punct(rest, token, '=') {
        Some((rest, _)) => (rest, inclusive),
        None => (rest, strict),
    })
}

fn threshold(input: Tokens<'_>) -> PResult<'_, f64> {
    let (rest, token) = bump(input);
    if !token.is_number() {
        return Err(SyntaxError::expected("a numeric threshold", token));
    }
    let value = parse_number(&token.text)
        .ok_or_else(|| SyntaxError::new("threshold out of range", token.pos))?;
    Ok((rest, value))
}
