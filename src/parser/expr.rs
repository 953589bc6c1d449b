//! Arithmetic expression parsing over metric queries and numbers.
//!
//! Precedence is structural: `*` and `/` bind inside a [`Term`], `+` and `-`
//! combine terms. Both levels are left-associative.
//!
//! ```text
//! metric_expression = term (("+" | "-") term)*
//! term              = expr_value (("*" | "/") expr_value)*
//! expr_value        = number
//!                   | metric_query
//!                   | identifier "(" metric_expression ("," value)* ")"
//!                   | "(" metric_expression ")"
//! ```
//!
//! Because signs lex as part of a number, `a -5` reaches the parser as `a`
//! followed by the number `-5`. In operator position such a number is read as
//! the operator followed by the unsigned number.
//!
//! # Examples
//!
//! ```rust
//! use rusty_metric_query_parser::ast::Operator;
//! use rusty_metric_query_parser::lexer::Lexer;
//! use rusty_metric_query_parser::parser::expr::metric_expression;
//!
//! let tokens = Lexer::new()
//!     .tokenize("sum:a{*} * sum:b{*} + sum:c{*} - 50")
//!     .unwrap();
//! let (_, e) = metric_expression(&tokens).unwrap();
//! assert_eq!(e.left.right[0].op, Operator::Mul);
//! assert_eq!(e.right.len(), 2);
//! ```

use crate::ast::{
    ExprValue, MetricExpression, OpFactor, OpTerm, Operator, Term, WrappedExpression,
};
use crate::error::SyntaxError;
use crate::lexer::number::parse_number;
use crate::lexer::token::Token;
use crate::parser::primitives::{PResult, Tokens, bump, eat_punct, ident, peek, punct};
use crate::parser::query::metric_query;
use crate::parser::value::argument;

/// Parse an arithmetic expression.
pub fn metric_expression(input: Tokens<'_>) -> PResult<'_, MetricExpression> {
    let (mut input, left) = term(input)?;
    let mut right = Vec::new();
    loop {
        let token = peek(input);
        if let Some(op) = additive_operator(token) {
            let (rest, rhs) = term(bump(input).0)?;
            right.push(OpTerm { op, term: rhs });
            input = rest;
        } else if let Some((op, n)) = signed_number(token) {
            let (rest, rhs) = term_from(bump(input).0, ExprValue::Number(n))?;
            right.push(OpTerm { op, term: rhs });
            input = rest;
        } else {
            return Ok((input, MetricExpression { left, right }));
        }
    }
}

/// Parse a product of values.
pub fn term(input: Tokens<'_>) -> PResult<'_, Term> {
    let (rest, left) = expr_value(input)?;
    term_from(rest, left)
}

fn term_from(mut input: Tokens<'_>, left: ExprValue) -> PResult<'_, Term> {
    let mut right = Vec::new();
    while let Some(op) = multiplicative_operator(peek(input)) {
        let (rest, value) = expr_value(bump(input).0)?;
        right.push(OpFactor { op, value });
        input = rest;
    }
    Ok((input, Term { left, right }))
}

/// Parse a single operand.
pub fn expr_value(input: Tokens<'_>) -> PResult<'_, ExprValue> {
    let token = peek(input);
    if token.is_number() {
        let (rest, token) = bump(input);
        let n = parse_number(&token.text)
            .ok_or_else(|| SyntaxError::new("number out of range", token.pos))?;
        return Ok((rest, ExprValue::Number(n)));
    }
    if let Some(rest) = eat_punct(input, '(') {
        let (rest, inner) = metric_expression(rest)?;
        let (rest, _) = punct(rest, ')')?;
        return Ok((rest, ExprValue::Subexpression(Box::new(inner))));
    }

    let query_err = match metric_query(input) {
        Ok((rest, q)) => return Ok((rest, ExprValue::Query(q))),
        Err(e) => e,
    };
    match wrapped_expression(input) {
        Ok((rest, w)) => Ok((rest, ExprValue::Wrapped(w))),
        Err(e) => Err(query_err.furthest(e)),
    }
}

/// Parse `name(expression, args...)`.
pub fn wrapped_expression(input: Tokens<'_>) -> PResult<'_, WrappedExpression> {
    let (input, name) = ident(input)?;
    let (input, _) = punct(input, '(')?;
    let (mut input, expression) = metric_expression(input)?;

    let mut args = Vec::new();
    loop {
        let (rest, token) = bump(input);
        if token.is_punct(')') {
            return Ok((
                rest,
                WrappedExpression {
                    name: name.text.clone(),
                    expression: Box::new(expression),
                    args,
                },
            ));
        }
        if !token.is_punct(',') {
            return Err(SyntaxError::expected("an operator, `,` or `)`", token));
        }
        let (rest, arg) = argument(rest)?;
        args.push(arg);
        input = rest;
    }
}

fn additive_operator(token: &Token) -> Option<Operator> {
    if token.is_punct('+') {
        Some(Operator::Add)
    } else if token.is_punct('-') {
        Some(Operator::Sub)
    } else {
        None
    }
}

fn multiplicative_operator(token: &Token) -> Option<Operator> {
    if token.is_punct('*') {
        Some(Operator::Mul)
    } else if token.is_punct('/') {
        Some(Operator::Div)
    } else {
        None
    }
}

/// Split a signed number token into an operator and its magnitude.
fn signed_number(token: &Token) -> Option<(Operator, f64)> {
    if !token.is_number() {
        return None;
    }
    let op = match token.text.chars().next()? {
        '+' => Operator::Add,
        '-' => Operator::Sub,
        _ => return None,
    };
    parse_number(&token.text[1..]).map(|n| (op, n))
}
