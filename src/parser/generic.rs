//! Top-level dispatch between the query and expression grammars.
//!
//! The query grammar is tried first, and only a parse that consumes the whole
//! input counts. `*`, `-` and `/` are legal inside filter values and metric
//! names, so the expression grammar would otherwise read them as operators.
//! When both grammars fail, the expression grammar's error is reported.
//!
//! # Examples
//!
//! ```rust
//! use rusty_metric_query_parser::lexer::Lexer;
//! use rusty_metric_query_parser::parser::generic::generic_query;
//!
//! let lexer = Lexer::new();
//! let tokens = lexer.tokenize("sum:metric.name{foo:bar/hello}").unwrap();
//! assert!(generic_query(&tokens).unwrap().is_query());
//!
//! let tokens = lexer.tokenize("sum:a{foo:bar/hello} / sum:b{*}").unwrap();
//! assert!(generic_query(&tokens).unwrap().is_expression());
//! ```

use log::{debug, trace};

use crate::ast::GenericQuery;
use crate::error::Error;
use crate::parser::expr::metric_expression;
use crate::parser::primitives::{Tokens, complete};
use crate::parser::query::metric_query;

/// Parse a complete metric query, or failing that a complete expression.
pub fn generic_query(input: Tokens<'_>) -> Result<GenericQuery, Error> {
    match complete(input, metric_query) {
        Ok(query) => {
            debug!("input parsed as a metric query");
            return Ok(GenericQuery::Query(query));
        }
        Err(e) => trace!("not a metric query: {e}"),
    }

    match complete(input, metric_expression) {
        Ok(expression) => {
            debug!("input parsed as a metric expression");
            Ok(GenericQuery::Expression(expression))
        }
        Err(e) => {
            debug!("input is neither a metric query nor an expression: {e}");
            Err(Error::Dispatch(Box::new(Error::Expression(e))))
        }
    }
}
