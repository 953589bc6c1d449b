//! Formula extraction.
//!
//! A formula is an expression in which every distinct query has been
//! replaced by a variable. Variables are assigned in order of first
//! appearance: `a`, `b`, ... `z`, then `aa`, `ab`, and so on. Identical queries
//! (by canonical text) share a variable.
//!
//! # Example
//!
//! ```rust
//! use rusty_metric_query_parser::{extract_formula, parse_expression};
//!
//! let expr = parse_expression("(sum:a{*} / sum:b{*}) * 100 + sum:a{*}").unwrap();
//! let formula = extract_formula(&expr);
//! assert_eq!(formula.formula, "(a / b) * 100 + a");
//! assert_eq!(formula.variables["b"], "sum:b{*}");
//! ```

use std::fmt;

use indexmap::IndexMap;
use log::trace;

use crate::ast::{MetricExpression, MetricQuery};

/// An expression with its queries abstracted into variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    /// The expression text with variables in place of queries
    pub formula: String,
    /// Variable name to query text, in assignment order
    pub variables: IndexMap<String, String>,
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formula)
    }
}

/// Replace every query in `expression` with a variable.
///
/// Substitution happens on the tree, not on the rendered text, so a query
/// whose text contains another query's text is never partially replaced.
pub fn extract_formula(expression: &MetricExpression) -> Formula {
    let variables: IndexMap<String, String> = expression
        .queries()
        .into_iter()
        .enumerate()
        .map(|(i, query)| (variable_name(i), query))
        .collect();
    trace!("extracted {} formula variables", variables.len());

    let by_query: IndexMap<&str, &str> = variables
        .iter()
        .map(|(name, query)| (query.as_str(), name.as_str()))
        .collect();
    let leaf = |q: &MetricQuery| {
        let text = q.to_string();
        match by_query.get(text.as_str()) {
            Some(name) => name.to_string(),
            None => text,
        }
    };

    let formula = WithVariables {
        expression,
        leaf: &leaf,
    }
    .to_string();

    Formula { formula, variables }
}

/// Renders an expression with each query passed through `leaf`.
struct WithVariables<'a> {
    expression: &'a MetricExpression,
    leaf: &'a dyn Fn(&MetricQuery) -> String,
}

impl fmt::Display for WithVariables<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.expression.write_with(f, self.leaf)
    }
}

/// Bijective base-26 name of the `index`th variable.
fn variable_name(index: usize) -> String {
    let mut n = index + 1;
    let mut name = Vec::new();
    while n > 0 {
        n -= 1;
        name.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    name.iter().rev().map(|&b| b as char).collect()
}
