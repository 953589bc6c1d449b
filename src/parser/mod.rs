//! Grammars for metric filters, queries, expressions and monitors.
//!
//! Each grammar is a set of plain functions over a token slice produced by
//! the [`lexer`](crate::lexer). A rule returns the unconsumed tokens and the
//! node it built (see [`primitives`]). Rules do not check for trailing input;
//! use [`primitives::complete`] or the crate-level `parse_*` functions for that.
//!
//! # Submodules
//!
//! - [`primitives`] - Token matching helpers and bareword gluing
//! - [`value`] - Filter values and function arguments
//! - [`filter`] - Tag filters inside `{...}`
//! - [`grouping`] - `by {...}` clauses
//! - [`function`] - Chained `.name(args)` calls
//! - [`query`] - Metric queries and wrapping calls
//! - [`mod@expr`] - Arithmetic over queries
//! - [`monitor`] - Threshold monitors
//! - [`generic`] - Query-or-expression dispatch
//!
//! # Example
//!
//! ```rust
//! use rusty_metric_query_parser::lexer::Lexer;
//! use rusty_metric_query_parser::parser::{primitives::complete, query::metric_query};
//!
//! let tokens = Lexer::new().tokenize("sum:requests{env:prod} by {host}").unwrap();
//! let q = complete(&tokens, metric_query).unwrap();
//! assert_eq!(q.to_string(), "sum:requests{env:prod} by {host}");
//! ```

pub mod expr;
pub mod filter;
pub mod function;
pub mod generic;
pub mod grouping;
pub mod monitor;
pub mod primitives;
pub mod query;
pub mod value;

pub use generic::generic_query;
