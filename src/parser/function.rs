//! Chained function calls: the `.as_rate()` and `.rollup(avg, 60)` that
//! follow a query.
//!
//! Arguments are [`Value`]s typed by what they look like: `true`, `avg`,
//! `"CPU User"`, `60`. Function names are not checked against any list.

use std::fmt;

use crate::error::SyntaxError;
use crate::parser::primitives::{PResult, Tokens, bump, ident, punct};
use crate::parser::value::{Value, argument};

/// A postfix function call: `.name(args)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub args: Vec<Value>,
}

impl Function {
    pub fn new(name: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ")")
    }
}

/// Parse `name(args)`, without the leading `.`.
///
/// # Examples
///
/// ```
/// use rusty_metric_query_parser::lexer::Lexer;
/// use rusty_metric_query_parser::parser::function::function_call;
///
/// let tokens = Lexer::new().tokenize(r#"label("CPU User")"#).unwrap();
/// let (_, f) = function_call(&tokens).unwrap();
/// assert_eq!(f.name, "label");
/// assert_eq!(f.to_string(), r#"label("CPU User")"#);
/// ```
pub fn function_call(input: Tokens<'_>) -> PResult<'_, Function> {
    let (input, name) = ident(input)?;
    let (input, args) = argument_list(input)?;
    Ok((
        input,
        Function {
            name: name.text.clone(),
            args,
        },
    ))
}

/// Parse `( (arg (, arg)*)? )`.
pub fn argument_list(input: Tokens<'_>) -> PResult<'_, Vec<Value>> {
    let (input, _) = punct(input, '(')?;
    let mut args = Vec::new();
    if let Ok((rest, _)) = punct(input, ')') {
        return Ok((rest, args));
    }
    let mut input = input;
    loop {
        let (rest, arg) = argument(input)?;
        args.push(arg);

        let (rest, token) = bump(rest);
        if token.is_punct(')') {
            return Ok((rest, args));
        }
        if !token.is_punct(',') {
            return Err(SyntaxError::expected("`,` or `)`", token));
        }
        input = rest;
    }
}
