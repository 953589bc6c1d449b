//! Metric filter parsing: the contents of a query's `{...}`.
//!
//! A filter is a flat sequence of parameters. Filter terms and the separators
//! between them (`,`, `AND`, `OR`, `AND NOT`, `IN`) are parameters alike; only
//! parentheses introduce nesting. No precedence is applied to the boolean
//! operators, the sequence is kept exactly as written.
//!
//! ```text
//! metric_filter = param param*
//! param         = "(" param* ")" | value_separator | "*" | simple_filter
//! simple_filter = "!"? key filter_separator filter_value
//! filter_value  = "(" (value (value_separator value)*)? ")" | value
//! ```
//!
//! # Examples
//!
//! ```rust
//! use rusty_metric_query_parser::parse_filter;
//! use rusty_metric_query_parser::parser::filter::{FilterSeparator, FilterValue, Param};
//!
//! let filter = parse_filter("env:prod AND location NOT IN (atlanta, seattle)").unwrap();
//! assert_eq!(filter.params().count(), 3);
//!
//! let Param::Simple(location) = filter.params().nth(2).unwrap() else { panic!() };
//! assert_eq!(location.separator, FilterSeparator::NotIn);
//! let FilterValue::List(list) = &location.value else { panic!() };
//! assert_eq!(list.values().len(), 2);
//!
//! assert_eq!(filter.to_string(), "env:prod AND location NOT IN (atlanta,seattle)");
//! ```

use std::fmt;

use crate::error::SyntaxError;
use crate::lexer::identifier::lookup_keyword;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::primitives::{
    PResult, Tokens, adjacent_punct, bareword, bump, eat_punct, error_at, peek, peek_nth, punct,
};
use crate::parser::value::{FilterValueSeparator, Value, value, value_separator};

/// The boolean filter inside `{...}`.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricFilter {
    pub first: Param,
    pub rest: Vec<Param>,
}

impl MetricFilter {
    pub fn new(first: impl Into<Param>) -> Self {
        Self {
            first: first.into(),
            rest: Vec::new(),
        }
    }

    /// The match-everything filter `*`
    pub fn all() -> Self {
        Self::new(Param::Asterisk)
    }

    /// Append a parameter (a filter term or a separator)
    pub fn push(&mut self, param: impl Into<Param>) {
        self.rest.push(param.into());
    }

    /// Append a separator and a term
    pub fn with(mut self, separator: FilterValueSeparator, term: impl Into<Param>) -> Self {
        self.push(separator);
        self.push(term);
        self
    }

    /// All parameters in order
    pub fn params(&self) -> impl Iterator<Item = &Param> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    /// True for the bare `*` filter
    pub fn is_all(&self) -> bool {
        self.first == Param::Asterisk && self.rest.is_empty()
    }
}

impl fmt::Display for MetricFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for param in self.params() {
            write!(f, "{param}")?;
        }
        Ok(())
    }
}

/// One element of a filter sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// Parenthesized sub-filter: `(env:prod OR env:staging)`
    Grouped(GroupedFilter),
    /// Separator between terms: `,`, `AND`, `OR`, `AND NOT`, `IN`
    Separator(FilterValueSeparator),
    /// A single condition: `env:prod`
    Simple(SimpleFilter),
    /// `*`
    Asterisk,
}

impl From<SimpleFilter> for Param {
    fn from(f: SimpleFilter) -> Self {
        Param::Simple(f)
    }
}

impl From<GroupedFilter> for Param {
    fn from(g: GroupedFilter) -> Self {
        Param::Grouped(g)
    }
}

impl From<FilterValueSeparator> for Param {
    fn from(sep: FilterValueSeparator) -> Self {
        Param::Separator(sep)
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Grouped(g) => write!(f, "{g}"),
            Param::Separator(s) => write!(f, "{s}"),
            Param::Simple(s) => write!(f, "{s}"),
            Param::Asterisk => write!(f, "*"),
        }
    }
}

/// Parenthesized parameters. May be empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupedFilter {
    pub params: Vec<Param>,
}

impl fmt::Display for GroupedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for param in &self.params {
            write!(f, "{param}")?;
        }
        write!(f, ")")
    }
}

/// A single condition: `!key:value`, `key IN (a, b)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleFilter {
    /// Written with a leading `!`
    pub negative: bool,
    pub key: String,
    pub separator: FilterSeparator,
    pub value: FilterValue,
}

impl SimpleFilter {
    pub fn new(key: impl Into<String>, separator: FilterSeparator, value: impl Into<FilterValue>) -> Self {
        Self {
            negative: false,
            key: key.into(),
            separator,
            value: value.into(),
        }
    }

    /// `key:value`
    pub fn tag(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, FilterSeparator::Colon, Value::identifier(value))
    }

    /// Prefix the filter with `!`
    pub fn negate(mut self) -> Self {
        self.negative = true;
        self
    }
}

impl fmt::Display for SimpleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "!")?;
        }
        write!(f, "{}{}{}", self.key, self.separator, self.value)
    }
}

/// Operator between a filter key and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterSeparator {
    /// `:`
    Colon,
    /// `:>`
    GreaterThan,
    /// `:<`
    LessThan,
    /// `:>=`
    GreaterEqual,
    /// `:<=`
    LessEqual,
    /// `:~`
    Regex,
    /// `IN`
    In,
    /// `NOT IN`
    NotIn,
    /// `AND NOT`
    AndNot,
}

impl FilterSeparator {
    /// The operator as written, without surrounding spaces
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterSeparator::Colon => ":",
            FilterSeparator::GreaterThan => ":>",
            FilterSeparator::LessThan => ":<",
            FilterSeparator::GreaterEqual => ":>=",
            FilterSeparator::LessEqual => ":<=",
            FilterSeparator::Regex => ":~",
            FilterSeparator::In => "IN",
            FilterSeparator::NotIn => "NOT IN",
            FilterSeparator::AndNot => "AND NOT",
        }
    }

    /// Keyword operators are written with spaces around them
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            FilterSeparator::In | FilterSeparator::NotIn | FilterSeparator::AndNot
        )
    }
}

impl fmt::Display for FilterSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_keyword() {
            write!(f, " {} ", self.as_str())
        } else {
            write!(f, "{}", self.as_str())
        }
    }
}

/// Right-hand side of a simple filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Single(Value),
    /// `(a, b OR c)`, used with `IN` and `NOT IN`
    List(ValueList),
}

impl From<Value> for FilterValue {
    fn from(v: Value) -> Self {
        FilterValue::Single(v)
    }
}

impl From<ValueList> for FilterValue {
    fn from(list: ValueList) -> Self {
        FilterValue::List(list)
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Single(v) => write!(f, "{v}"),
            FilterValue::List(list) => write!(f, "{list}"),
        }
    }
}

/// Parenthesized list of values with the separators written between them.
///
/// `separators[i]` sits between `items[i]` and `items[i + 1]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueList {
    pub items: Vec<Value>,
    pub separators: Vec<FilterValueSeparator>,
}

impl ValueList {
    /// Comma-separated list
    pub fn new(items: Vec<Value>) -> Self {
        Self::with_separator(items, FilterValueSeparator::Comma)
    }

    pub fn with_separator(items: Vec<Value>, separator: FilterValueSeparator) -> Self {
        let separators = vec![separator; items.len().saturating_sub(1)];
        Self { items, separators }
    }

    pub fn values(&self) -> &[Value] {
        &self.items
    }
}

impl fmt::Display for ValueList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                let sep = self
                    .separators
                    .get(i - 1)
                    .copied()
                    .unwrap_or(FilterValueSeparator::Comma);
                write!(f, "{sep}")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, ")")
    }
}

/// Tokens that close a filter sequence
fn at_filter_end(token: &Token) -> bool {
    token.is_eof() || token.is_punct('}') || token.is_punct(')')
}

/// Parse a metric filter, stopping before `}`, `)` or the end of input.
pub fn metric_filter(input: Tokens<'_>) -> PResult<'_, MetricFilter> {
    let (mut input, first) = param(input)?;
    let mut rest = Vec::new();
    while !at_filter_end(peek(input)) {
        let (remaining, p) = param(input)?;
        rest.push(p);
        input = remaining;
    }
    Ok((input, MetricFilter { first, rest }))
}

/// Parse a single filter parameter.
pub fn param(input: Tokens<'_>) -> PResult<'_, Param> {
    let token = peek(input);
    if token.is_punct('(') {
        let (rest, g) = grouped_filter(input)?;
        return Ok((rest, Param::Grouped(g)));
    }
    if let Ok((rest, sep)) = value_separator(input) {
        return Ok((rest, Param::Separator(sep)));
    }
    if let Some(rest) = eat_punct(input, '*') {
        return Ok((rest, Param::Asterisk));
    }
    let (rest, f) = simple_filter(input)?;
    Ok((rest, Param::Simple(f)))
}

/// Parse `( param* )`.
pub fn grouped_filter(input: Tokens<'_>) -> PResult<'_, GroupedFilter> {
    let (mut input, open) = punct(input, '(')?;
    let mut params = Vec::new();
    loop {
        if let Some(rest) = eat_punct(input, ')') {
            return Ok((rest, GroupedFilter { params }));
        }
        let token = peek(input);
        if at_filter_end(token) {
            return Err(SyntaxError::new(
                format!("unbalanced parentheses: `(` at {} is never closed", open.pos),
                token.pos,
            ));
        }
        let (rest, p) = param(input)?;
        params.push(p);
        input = rest;
    }
}

/// Parse `!? key separator value`.
pub fn simple_filter(input: Tokens<'_>) -> PResult<'_, SimpleFilter> {
    let (input, negative) = match punct(input, '!') {
        Ok((rest, _)) => (rest, true),
        Err(_) => (input, false),
    };
    let (input, key) = filter_key(input)?;
    let (input, separator) = filter_separator(input).map_err(|_| {
        error_at(
            input,
            format!(
                "missing filter separator after `{key}`: expected `:`, `:>`, `:<`, `:>=`, `:<=`, `:~`, `IN`, `NOT IN` or `AND NOT`"
            ),
        )
    })?;
    let (input, value) = filter_value(input)?;
    Ok((
        input,
        SimpleFilter {
            negative,
            key,
            separator,
            value,
        },
    ))
}

/// Parse a tag key: a bareword that is not a boolean operator.
fn filter_key(input: Tokens<'_>) -> PResult<'_, String> {
    let token = peek(input);
    let starts_word = token.kind == TokenKind::Ident || token.is_number();
    let is_operator = lookup_keyword(&token.text).is_some_and(|k| k.is_filter_operator());
    if !starts_word || is_operator {
        return Err(SyntaxError::expected("a tag key", token));
    }
    let (rest, word) = bareword(input)?;
    Ok((rest, word.text))
}

/// Parse a filter separator.
pub fn filter_separator(input: Tokens<'_>) -> PResult<'_, FilterSeparator> {
    let (rest, token) = bump(input);
    if token.is_punct(':') {
        if let Some((rest, gt)) = adjacent_punct(rest, token, '>') {
            return Ok(match adjacent_punct(rest, gt, '=') {
                Some((rest, _)) => (rest, FilterSeparator::GreaterEqual),
                None => (rest, FilterSeparator::GreaterThan),
            });
        }
        if let Some((rest, lt)) = adjacent_punct(rest, token, '<') {
            return Ok(match adjacent_punct(rest, lt, '=') {
                Some((rest, _)) => (rest, FilterSeparator::LessEqual),
                None => (rest, FilterSeparator::LessThan),
            });
        }
        if let Some((rest, _)) = adjacent_punct(rest, token, '~') {
            return Ok((rest, FilterSeparator::Regex));
        }
        return Ok((rest, FilterSeparator::Colon));
    }
    if token.is_keyword("IN") {
        return Ok((rest, FilterSeparator::In));
    }
    if token.is_keyword("NOT") && peek_nth(input, 1).is_keyword("IN") {
        return Ok((bump(rest).0, FilterSeparator::NotIn));
    }
    if token.is_keyword("AND") && peek_nth(input, 1).is_keyword("NOT") {
        return Ok((bump(rest).0, FilterSeparator::AndNot));
    }
    Err(SyntaxError::expected("a filter separator", token))
}

/// Parse a single value or a parenthesized value list.
pub fn filter_value(input: Tokens<'_>) -> PResult<'_, FilterValue> {
    if peek(input).is_punct('(') {
        let (rest, list) = value_list(input)?;
        return Ok((rest, FilterValue::List(list)));
    }
    let (rest, v) = value(input)?;
    Ok((rest, FilterValue::Single(v)))
}

/// Parse `( value (separator value)* )`.
pub fn value_list(input: Tokens<'_>) -> PResult<'_, ValueList> {
    let (mut input, open) = punct(input, '(')?;
    let mut list = ValueList::default();
    if let Ok((rest, _)) = punct(input, ')') {
        return Ok((rest, list));
    }
    loop {
        let (rest, item) = value(input)?;
        list.items.push(item);
        input = rest;

        if let Some(rest) = eat_punct(input, ')') {
            return Ok((rest, list));
        }
        let token = peek(input);
        if token.is_eof() || token.is_punct('}') {
            return Err(SyntaxError::new(
                format!("unclosed value list: `(` at {} is never closed", open.pos),
                token.pos,
            ));
        }
        let (rest, sep) = value_separator(input)
            .map_err(|_| SyntaxError::expected("`,`, `OR` or `)` in value list", token))?;
        list.separators.push(sep);
        input = rest;
    }
}
