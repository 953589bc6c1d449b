//! # Rusty Metric Query Parser
//!
//! A Rust parser for monitoring-style metric queries, such as
//! `avg:system.cpu.user{env:prod} by {host}`, arithmetic over such queries,
//! and threshold monitors. Tokens are recognized with the
//! [nom](https://github.com/rust-bakery/nom) parser combinator library.
//!
//! The crate produces an Abstract Syntax Tree that can be inspected, edited
//! or built by hand, and rendered back to canonical text.
//!
//! ## Quick Start
//!
//! ```rust
//! use rusty_metric_query_parser::parse_query;
//!
//! let q = parse_query("sum:trace.http.request.hits{service:web-store} by {resource_name}.as_count()")
//!     .expect("failed to parse");
//! let query = q.as_query().unwrap();
//! assert_eq!(query.metric_name, "trace.http.request.hits");
//! assert_eq!(query.functions[0].name, "as_count");
//! ```
//!
//! ## Examples
//!
//! ### Parsing a filter
//!
//! ```rust
//! use rusty_metric_query_parser::parse_filter;
//!
//! let filter = parse_filter("env IN (prod, staging) AND NOT service:test").unwrap();
//! assert_eq!(filter.to_string(), "env IN (prod,staging) AND NOT service:test");
//! ```
//!
//! ### Parsing an expression and extracting its formula
//!
//! ```rust
//! use rusty_metric_query_parser::{extract_formula, parse_expression};
//!
//! let expr = parse_expression("sum:metric.name{foo:bar} + sum:metric.name_two{foo:bar,baz:bang}")
//!     .unwrap();
//! let formula = extract_formula(&expr);
//! assert_eq!(formula.formula, "a + b");
//! assert_eq!(formula.variables["a"], "sum:metric.name{foo:bar}");
//! ```
//!
//! ### Parsing a monitor
//!
//! ```rust
//! use rusty_metric_query_parser::{ast::Comparator, parse_monitor};
//!
//! let m = parse_monitor("avg(last_5m):avg:system.cpu.user{env:prod} > 80").unwrap();
//! assert_eq!(m.evaluation_window, "last_5m");
//! assert_eq!(m.comparator, Comparator::Gt);
//! assert_eq!(m.threshold, 80.0);
//! ```
//!
//! ### Parsing anything
//!
//! [`parse_any`] decides between a single query and an expression:
//!
//! ```rust
//! use rusty_metric_query_parser::parse_any;
//!
//! assert!(parse_any("sum:metric.name{foo:bar/hello}").unwrap().is_query());
//! assert!(parse_any("sum:a{foo:bar/hello} / sum:b{*}").unwrap().is_expression());
//! ```
//!
//! ## Modules
//!
//! - [`ast`] - Query, expression and monitor node types
//! - [`lexer`] - Tokenizer and its configuration
//! - [`parser`] - One grammar per input kind
//! - [`formula`] - Formula extraction
//! - [`error`] - Error types
//!
//! ## Display
//!
//! Every node implements [`std::fmt::Display`], which renders canonical text:
//!
//! ```rust
//! use rusty_metric_query_parser::parse_expression;
//!
//! let expr = parse_expression("sum:a{x:y}*2+1.0").unwrap();
//! assert_eq!(expr.to_string(), "sum:a{x:y} * 2 + 1");
//! ```

pub mod ast;
pub mod error;
pub mod formula;
pub mod lexer;
pub mod parser;

pub use ast::{
    Aggregator, AggregatorFunction, AstNode, Comparator, ExprValue, GenericQuery, MetricExpression,
    MetricMonitor, MetricQuery, Operator, Query,
};
pub use error::{Error, LexError, Result, SyntaxError};
pub use formula::{Formula, extract_formula};
pub use lexer::{Lexer, LexerConfig};
pub use parser::filter::{FilterSeparator, FilterValue, MetricFilter, Param, SimpleFilter};
pub use parser::function::Function;
pub use parser::grouping::Grouping;
pub use parser::value::{FilterValueSeparator, Value};

use lexer::token::Token;
use parser::expr::metric_expression;
use parser::filter::metric_filter;
use parser::generic::generic_query;
use parser::monitor::metric_monitor;
use parser::primitives::complete;
use parser::query::metric_query;

static DEFAULT_LEXER: Lexer = Lexer::new();

/// Entry points for every grammar, sharing one [`Lexer`].
///
/// Input may span several lines; line breaks are removed before lexing.
///
/// ```rust
/// use rusty_metric_query_parser::{Lexer, LexerConfig, Parser};
///
/// let lexer = Lexer::with_config(LexerConfig::new().without_comments());
/// let parser = Parser::new(&lexer);
/// let q = parser.query("sum:rem.count{*}").unwrap();
/// assert_eq!(q.to_string(), "sum:rem.count{*}");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Parser<'l> {
    lexer: &'l Lexer,
}

impl<'l> Parser<'l> {
    pub fn new(lexer: &'l Lexer) -> Self {
        Self { lexer }
    }

    /// Parse a metric query.
    pub fn query(&self, input: &str) -> Result<MetricQuery> {
        let tokens = self.lex(input)?;
        complete(&tokens, metric_query).map_err(Error::Query)
    }

    /// Parse the contents of a `{...}` filter block.
    pub fn filter(&self, input: &str) -> Result<MetricFilter> {
        let tokens = self.lex(input)?;
        complete(&tokens, metric_filter).map_err(Error::Filter)
    }

    /// Parse an arithmetic expression over queries.
    pub fn expression(&self, input: &str) -> Result<MetricExpression> {
        let tokens = self.lex(input)?;
        complete(&tokens, metric_expression).map_err(Error::Expression)
    }

    /// Parse a monitor definition.
    pub fn monitor(&self, input: &str) -> Result<MetricMonitor> {
        let tokens = self.lex(input)?;
        complete(&tokens, metric_monitor).map_err(Error::Monitor)
    }

    /// Parse a query, or an expression if the input is not a single query.
    ///
    /// Every failure, including lex errors, is reported as [`Error::Dispatch`].
    pub fn any(&self, input: &str) -> Result<GenericQuery> {
        let tokens = self
            .lex(input)
            .map_err(|e| Error::Dispatch(Box::new(e)))?;
        generic_query(&tokens)
    }

    fn lex(&self, input: &str) -> Result<Vec<Token>> {
        let input = input.replace(['\n', '\r'], "");
        Ok(self.lexer.tokenize(&input)?)
    }
}

impl Default for Parser<'static> {
    fn default() -> Self {
        Self::new(&DEFAULT_LEXER)
    }
}

/// Parse a metric query such as `sum:requests{env:prod} by {host}`.
pub fn parse_query(input: &str) -> Result<MetricQuery> {
    Parser::default().query(input)
}

/// Parse a filter such as `env:prod AND NOT service:test`.
pub fn parse_filter(input: &str) -> Result<MetricFilter> {
    Parser::default().filter(input)
}

/// Parse an expression such as `sum:a{*} / sum:b{*} * 100`.
pub fn parse_expression(input: &str) -> Result<MetricExpression> {
    Parser::default().expression(input)
}

/// Parse a monitor such as `avg(last_5m):avg:cpu{*} > 80`.
pub fn parse_monitor(input: &str) -> Result<MetricMonitor> {
    Parser::default().monitor(input)
}

/// Parse a query, or an expression if the input is not a single query.
pub fn parse_any(input: &str) -> Result<GenericQuery> {
    Parser::default().any(input)
}

/// Render any node as canonical text.
pub fn serialize(node: &dyn AstNode) -> String {
    node.to_string()
}
