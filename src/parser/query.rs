//! Metric query parsing.
//!
//! ```text
//! metric_query        = query | aggregator_function
//! query               = aggregator ":" metric_name "{" metric_filter "}" grouping? ("." function_call)*
//! aggregator          = identifier ("(" condition ")")?
//! aggregator_function = identifier "(" metric_query ("," value)* ")"
//! ```
//!
//! The alternatives of `metric_query` are tried in order with full
//! backtracking. When both fail, the error that got furthest into the input is
//! reported.
//!
//! The filter block is mandatory even though `{*}` selects everything, and a
//! query must start with an aggregator: `system.cpu.user{*}` is rejected.
//!
//! # Examples
//!
//! ```rust
//! use rusty_metric_query_parser::lexer::Lexer;
//! use rusty_metric_query_parser::parser::query::metric_query;
//!
//! let tokens = Lexer::new()
//!     .tokenize("avg:system.cpu.user{env:staging} by {availability-zone}.as_rate()")
//!     .unwrap();
//! let (_, q) = metric_query(&tokens).unwrap();
//! let query = q.as_query().unwrap();
//! assert_eq!(query.aggregator.as_ref().unwrap().name, "avg");
//! assert_eq!(query.metric_name, "system.cpu.user");
//! assert_eq!(query.functions.len(), 1);
//! ```

use crate::ast::{Aggregator, AggregatorFunction, MetricQuery, Query};
use crate::error::SyntaxError;
use crate::lexer::identifier::Keyword;
use crate::lexer::token::Token;
use crate::parser::filter::metric_filter;
use crate::parser::function::function_call;
use crate::parser::grouping::grouping;
use crate::parser::primitives::{
    PResult, Tokens, bareword, bump, error_at, ident, peek, punct, source_text,
};
use crate::parser::value::argument;

/// Parse a query or a wrapping aggregator function.
pub fn metric_query(input: Tokens<'_>) -> PResult<'_, MetricQuery> {
    let query_err = match query(input) {
        Ok((rest, q)) => return Ok((rest, MetricQuery::Query(q))),
        Err(e) => e,
    };
    match aggregator_function(input) {
        Ok((rest, f)) => Ok((rest, MetricQuery::AggregatorFunction(f))),
        Err(e) => Err(query_err.furthest(e)),
    }
}

/// Parse a plain query.
pub fn query(input: Tokens<'_>) -> PResult<'_, Query> {
    let (input, aggregator) = aggregator(input)?;
    let (input, metric_name) = metric_name(input)?;

    let input = match punct(input, '{') {
        Ok((rest, _)) => rest,
        Err(_) => {
            return Err(error_at(
                input,
                format!("filters are required after `{metric_name}` (use `{{*}}` to select everything)"),
            ));
        }
    };
    let (input, filters) = metric_filter(input)?;
    let (input, _) = punct(input, '}')?;

    let (input, grouping) = if peek(input).is_keyword(Keyword::By.as_str()) {
        let (rest, g) = grouping(input)?;
        (rest, Some(g))
    } else {
        (input, None)
    };

    let mut functions = Vec::new();
    let mut input = input;
    while peek(input).is_punct('.') {
        let (rest, function) = function_call(bump(input).0)?;
        functions.push(function);
        input = rest;
    }

    Ok((
        input,
        Query {
            aggregator: Some(aggregator),
            metric_name,
            filters,
            grouping,
            functions,
        },
    ))
}

/// Parse `name[(condition)]:`.
pub fn aggregator(input: Tokens<'_>) -> PResult<'_, Aggregator> {
    let (rest, name) = ident(input)
        .map_err(|_| SyntaxError::expected("an aggregator such as `sum:`", peek(input)))?;

    let (rest, condition) = if peek(rest).is_punct('(') {
        let (rest, condition) = space_aggregation_condition(rest)?;
        (rest, Some(condition))
    } else {
        (rest, None)
    };

    match punct(rest, ':') {
        Ok((rest, _)) => Ok((
            rest,
            Aggregator {
                name: name.text.clone(),
                condition,
            },
        )),
        Err(e) => {
            if condition.is_none() {
                if let Some(brace) = bare_metric_name(input) {
                    return Err(SyntaxError::new(
                        "metric query must be prefixed with an aggregator such as `sum:`",
                        brace.pos,
                    ));
                }
            }
            Err(e)
        }
    }
}

/// The `{` after a metric name written without an aggregator.
fn bare_metric_name(input: Tokens<'_>) -> Option<&Token> {
    let (rest, _) = metric_name(input).ok()?;
    let brace = peek(rest);
    brace.is_punct('{').then_some(brace)
}

/// Capture the text between balanced parentheses.
///
/// Tokens are joined with a single space wherever the source had whitespace,
/// so `( v:  v<10 )` becomes `v: v<10`.
fn space_aggregation_condition(input: Tokens<'_>) -> PResult<'_, String> {
    let (mut input, _) = punct(input, '(')?;
    let mut depth = 0usize;
    let mut text = String::new();
    let mut prev: Option<&Token> = None;
    loop {
        let (rest, token) = bump(input);
        if token.is_eof() || token.is_punct('{') || token.is_punct('}') {
            return Err(SyntaxError::expected("`)` to close the aggregator condition", token));
        }
        if token.is_punct(')') {
            if depth == 0 {
                if text.is_empty() {
                    return Err(SyntaxError::new("empty aggregator condition", token.pos));
                }
                return Ok((rest, text));
            }
            depth -= 1;
        } else if token.is_punct('(') {
            depth += 1;
        }

        if prev.is_some_and(|p| !p.touches(token)) {
            text.push(' ');
        }
        text.push_str(&source_text(token));
        prev = Some(token);
        input = rest;
    }
}

/// Parse a dotted metric name such as `system.cpu.user` or `system.disk/*`.
pub fn metric_name(input: Tokens<'_>) -> PResult<'_, String> {
    let token = peek(input);
    let (rest, word) = bareword(input)?;
    if !word.starts_with_ident() {
        return Err(SyntaxError::expected("a metric name", token));
    }
    Ok((rest, word.text))
}

/// Parse `name(metric_query, args...)`.
pub fn aggregator_function(input: Tokens<'_>) -> PResult<'_, AggregatorFunction> {
    let (input, name) = ident(input)?;
    let (input, _) = punct(input, '(')?;
    let (mut input, body) = metric_query(input)?;

    let mut args = Vec::new();
    loop {
        let (rest, token) = bump(input);
        if token.is_punct(')') {
            return Ok((
                rest,
                AggregatorFunction {
                    name: name.text.clone(),
                    body: Box::new(body),
                    args,
                },
            ));
        }
        if !token.is_punct(',') {
            return Err(SyntaxError::expected("`,` or `)`", token));
        }
        let (rest, arg) = argument(rest)?;
        args.push(arg);
        input = rest;
    }
}
