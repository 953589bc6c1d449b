//! AST type definitions for metric queries, expressions and monitors
//!
//! Every node implements [`Display`](fmt::Display), which renders the canonical
//! text of the node. Parsing the rendered text yields the same tree again.
//! Filter, value, grouping and function nodes live next to their grammars in
//! [`crate::parser`].

use std::fmt;

use indexmap::IndexSet;

use crate::lexer::number::format_number;
use crate::parser::filter::{
    FilterValue, GroupedFilter, MetricFilter, Param, SimpleFilter, ValueList,
};
use crate::parser::function::Function;
use crate::parser::grouping::Grouping;
use crate::parser::value::Value;

/// Any node the serializer can render.
pub trait AstNode: fmt::Display {}

/// A single metric selection: either a plain [`Query`] or a wrapping
/// [`AggregatorFunction`].
#[derive(Debug, Clone, PartialEq)]
pub enum MetricQuery {
    /// `sum:system.cpu.user{env:prod} by {host}.as_rate()`
    Query(Query),
    /// `moving_rollup(sum:metric{*}, 60, 'avg')`
    AggregatorFunction(AggregatorFunction),
}

impl MetricQuery {
    pub fn as_query(&self) -> Option<&Query> {
        match self {
            MetricQuery::Query(q) => Some(q),
            MetricQuery::AggregatorFunction(_) => None,
        }
    }

    /// The innermost plain query, looking through any wrapping functions
    pub fn innermost(&self) -> &Query {
        match self {
            MetricQuery::Query(q) => q,
            MetricQuery::AggregatorFunction(f) => f.body.innermost(),
        }
    }
}

impl From<Query> for MetricQuery {
    fn from(q: Query) -> Self {
        MetricQuery::Query(q)
    }
}

impl From<AggregatorFunction> for MetricQuery {
    fn from(f: AggregatorFunction) -> Self {
        MetricQuery::AggregatorFunction(f)
    }
}

impl fmt::Display for MetricQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricQuery::Query(q) => write!(f, "{q}"),
            MetricQuery::AggregatorFunction(a) => write!(f, "{a}"),
        }
    }
}

/// `[aggregator:]metric.name{filters}[ by {grouping}][.fn(args)]*`
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Always present in parsed queries; optional for hand-built trees
    pub aggregator: Option<Aggregator>,
    pub metric_name: String,
    pub filters: MetricFilter,
    pub grouping: Option<Grouping>,
    /// Chained `.name(args)` calls, in order
    pub functions: Vec<Function>,
}

impl Query {
    pub fn new(metric_name: impl Into<String>, filters: MetricFilter) -> Self {
        Self {
            aggregator: None,
            metric_name: metric_name.into(),
            filters,
            grouping: None,
            functions: Vec::new(),
        }
    }

    pub fn with_aggregator(mut self, aggregator: Aggregator) -> Self {
        self.aggregator = Some(aggregator);
        self
    }

    pub fn with_grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = Some(grouping);
        self
    }

    pub fn with_function(mut self, function: Function) -> Self {
        self.functions.push(function);
        self
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref aggregator) = self.aggregator {
            write!(f, "{aggregator}:")?;
        }
        write!(f, "{}{{{}}}", self.metric_name, self.filters)?;
        if let Some(ref grouping) = self.grouping {
            if !grouping.is_empty() {
                write!(f, " {grouping}")?;
            }
        }
        for function in &self.functions {
            write!(f, ".{function}")?;
        }
        Ok(())
    }
}

/// Space aggregation prefix: `sum`, `count(v: v<10)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregator {
    pub name: String,
    /// Text between the parentheses, e.g. `v: v<10`
    pub condition: Option<String>,
}

impl Aggregator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            condition: None,
        }
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

impl fmt::Display for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(ref condition) = self.condition {
            write!(f, "({condition})")?;
        }
        Ok(())
    }
}

/// A prefix call wrapping a query: `name(body, args...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatorFunction {
    pub name: String,
    pub body: Box<MetricQuery>,
    pub args: Vec<Value>,
}

impl AggregatorFunction {
    pub fn new(name: impl Into<String>, body: impl Into<MetricQuery>, args: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            body: Box::new(body.into()),
            args,
        }
    }
}

impl fmt::Display for AggregatorFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}", self.name, self.body)?;
        for arg in &self.args {
            write!(f, ", {arg}")?;
        }
        write!(f, ")")
    }
}

/// Arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
}

impl Operator {
    /// Get the operator as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    /// `*` and `/` bind inside a term
    pub fn is_multiplicative(&self) -> bool {
        matches!(self, Operator::Mul | Operator::Div)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Renders the query leaves of an expression tree
type LeafWriter<'a> = &'a dyn Fn(&MetricQuery) -> String;

/// Arithmetic over queries and numbers: `term ((+|-) term)*`.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricExpression {
    pub left: Term,
    pub right: Vec<OpTerm>,
}

/// `(+|-) term`
#[derive(Debug, Clone, PartialEq)]
pub struct OpTerm {
    pub op: Operator,
    pub term: Term,
}

/// `value ((*|/) value)*`
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub left: ExprValue,
    pub right: Vec<OpFactor>,
}

/// `(*|/) value`
#[derive(Debug, Clone, PartialEq)]
pub struct OpFactor {
    pub op: Operator,
    pub value: ExprValue,
}

/// Operand of an arithmetic expression
#[derive(Debug, Clone, PartialEq)]
pub enum ExprValue {
    Number(f64),
    Query(MetricQuery),
    /// `default_zero(a + b)`
    Wrapped(WrappedExpression),
    /// `(a + b)`
    Subexpression(Box<MetricExpression>),
}

/// A named call around an arithmetic expression: `name(expr, args...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedExpression {
    pub name: String,
    pub expression: Box<MetricExpression>,
    pub args: Vec<Value>,
}

impl MetricExpression {
    pub fn new(left: impl Into<ExprValue>) -> Self {
        Self {
            left: Term::new(left),
            right: Vec::new(),
        }
    }

    /// Append an additive operator and term. Multiplicative operators are
    /// added to the last term instead.
    pub fn then(mut self, op: Operator, value: impl Into<ExprValue>) -> Self {
        if op.is_multiplicative() {
            let last = match self.right.last_mut() {
                Some(op_term) => &mut op_term.term,
                None => &mut self.left,
            };
            last.right.push(OpFactor {
                op,
                value: value.into(),
            });
        } else {
            self.right.push(OpTerm {
                op,
                term: Term::from(value.into()),
            });
        }
        self
    }

    /// Serialized text of every query leaf, depth-first and left to right,
    /// without duplicates.
    pub fn queries(&self) -> Vec<String> {
        let mut seen = IndexSet::new();
        self.collect_queries(&mut seen);
        seen.into_iter().collect()
    }

    fn collect_queries(&self, seen: &mut IndexSet<String>) {
        self.left.collect_queries(seen);
        for op_term in &self.right {
            op_term.term.collect_queries(seen);
        }
    }

    /// Render the expression, writing each query leaf with `leaf`.
    pub(crate) fn write_with(&self, out: &mut dyn fmt::Write, leaf: LeafWriter<'_>) -> fmt::Result {
        self.left.write_with(out, leaf)?;
        for op_term in &self.right {
            write!(out, " {} ", op_term.op)?;
            op_term.term.write_with(out, leaf)?;
        }
        Ok(())
    }
}

impl Term {
    pub fn new(left: impl Into<ExprValue>) -> Self {
        Self {
            left: left.into(),
            right: Vec::new(),
        }
    }

    fn collect_queries(&self, seen: &mut IndexSet<String>) {
        self.left.collect_queries(seen);
        for factor in &self.right {
            factor.value.collect_queries(seen);
        }
    }

    fn write_with(&self, out: &mut dyn fmt::Write, leaf: LeafWriter<'_>) -> fmt::Result {
        self.left.write_with(out, leaf)?;
        for factor in &self.right {
            write!(out, " {} ", factor.op)?;
            factor.value.write_with(out, leaf)?;
        }
        Ok(())
    }
}

impl From<ExprValue> for Term {
    fn from(value: ExprValue) -> Self {
        Term::new(value)
    }
}

impl ExprValue {
    fn collect_queries(&self, seen: &mut IndexSet<String>) {
        match self {
            ExprValue::Number(_) => {}
            ExprValue::Query(q) => {
                seen.insert(q.to_string());
            }
            ExprValue::Wrapped(w) => w.expression.collect_queries(seen),
            ExprValue::Subexpression(e) => e.collect_queries(seen),
        }
    }

    fn write_with(&self, out: &mut dyn fmt::Write, leaf: LeafWriter<'_>) -> fmt::Result {
        match self {
            ExprValue::Number(n) => write!(out, "{}", format_number(*n)),
            ExprValue::Query(q) => write!(out, "{}", leaf(q)),
            ExprValue::Wrapped(w) => {
                write!(out, "{}(", w.name)?;
                w.expression.write_with(out, leaf)?;
                for arg in &w.args {
                    write!(out, ", {arg}")?;
                }
                write!(out, ")")
            }
            ExprValue::Subexpression(e) => {
                write!(out, "(")?;
                e.write_with(out, leaf)?;
                write!(out, ")")
            }
        }
    }
}

impl From<f64> for ExprValue {
    fn from(n: f64) -> Self {
        ExprValue::Number(n)
    }
}

impl From<MetricQuery> for ExprValue {
    fn from(q: MetricQuery) -> Self {
        ExprValue::Query(q)
    }
}

impl From<Query> for ExprValue {
    fn from(q: Query) -> Self {
        ExprValue::Query(MetricQuery::Query(q))
    }
}

impl From<MetricExpression> for ExprValue {
    fn from(e: MetricExpression) -> Self {
        ExprValue::Subexpression(Box::new(e))
    }
}

fn render_query(q: &MetricQuery) -> String {
    q.to_string()
}

impl fmt::Display for MetricExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &render_query)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &render_query)
    }
}

impl fmt::Display for ExprValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &render_query)
    }
}

impl fmt::Display for WrappedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}", self.name, self.expression)?;
        for arg in &self.args {
            write!(f, ", {arg}")?;
        }
        write!(f, ")")
    }
}

/// Monitor comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    Gt, // >
    Ge, // >=
    Lt, // <
    Le, // <=
}

impl Comparator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Gt => ">",
            Comparator::Ge => ">=",
            Comparator::Lt => "<",
            Comparator::Le => "<=",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A threshold alert: `avg(last_5m):avg:system.cpu.user{env:prod} > 80`.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricMonitor {
    /// Time aggregation, e.g. `avg`
    pub aggregation: String,
    /// e.g. `last_5m`
    pub evaluation_window: String,
    pub query: MetricQuery,
    pub comparator: Comparator,
    pub threshold: f64,
}

impl fmt::Display for MetricMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}):{} {} {}",
            self.aggregation,
            self.evaluation_window,
            self.query,
            self.comparator,
            format_number(self.threshold)
        )
    }
}

/// Result of [`parse_any`](crate::parse_any): a query or an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum GenericQuery {
    Query(MetricQuery),
    Expression(MetricExpression),
}

impl GenericQuery {
    pub fn as_query(&self) -> Option<&MetricQuery> {
        match self {
            GenericQuery::Query(q) => Some(q),
            GenericQuery::Expression(_) => None,
        }
    }

    pub fn as_expression(&self) -> Option<&MetricExpression> {
        match self {
            GenericQuery::Query(_) => None,
            GenericQuery::Expression(e) => Some(e),
        }
    }

    pub fn is_query(&self) -> bool {
        matches!(self, GenericQuery::Query(_))
    }

    pub fn is_expression(&self) -> bool {
        matches!(self, GenericQuery::Expression(_))
    }
}

impl fmt::Display for GenericQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenericQuery::Query(q) => write!(f, "{q}"),
            GenericQuery::Expression(e) => write!(f, "{e}"),
        }
    }
}

impl AstNode for MetricQuery {}
impl AstNode for Query {}
impl AstNode for Aggregator {}
impl AstNode for AggregatorFunction {}
impl AstNode for MetricExpression {}
impl AstNode for Term {}
impl AstNode for ExprValue {}
impl AstNode for WrappedExpression {}
impl AstNode for Operator {}
impl AstNode for MetricMonitor {}
impl AstNode for Comparator {}
impl AstNode for GenericQuery {}
impl AstNode for MetricFilter {}
impl AstNode for Param {}
impl AstNode for GroupedFilter {}
impl AstNode for SimpleFilter {}
impl AstNode for FilterValue {}
impl AstNode for ValueList {}
impl AstNode for Value {}
impl AstNode for Function {}
impl AstNode for Grouping {}
