// Query-or-expression dispatch test cases
//
// A complete metric query always wins. Everything else falls through to the
// expression grammar.

/// Inputs that must be read as a single metric query
pub const QUERY_INPUTS: &[&str] = &[
    "sum:metric.name{foo:bar/hello}",
    "sum:namespace.metric.name{foo:bar} by {foo}",
    "sum:metric.name{foo:bar-*} by {foo,bar}",
    "avg:metric{key:*value-*} by {*}",
    "sum:system.disk/*{*} by {host}.as_rate().rollup(avg,300)",
    "count(v: v<10):metric.name{*}",
    "moving_rollup(default_zero(sum:metric.name{app:bazz,env:staging}.as_rate()), 60, 'avg')",
];

/// Inputs that must be read as an expression
pub const EXPRESSION_INPUTS: &[&str] = &[
    "sum:metric.name{foo:bar/hello} / sum:metric.name_two{foo:bar}",
    "sum:metric.name{foo:bar} + sum:metric.name_two{foo:bar}",
    "sum:metric.name{*} * 2",
    "2*sum:metric.name{*}",
    "100*(sum:metric.name{*})",
    "(sum:metric.name{*})",
    "default_zero(avg:metric.name{foo:bar} + avg:other.metric.name{foo:bar})",
    "default_zero(avg:metric.name{foo:bar}) + avg:other.metric.name{foo:bar}",
    "50",
];

/// Inputs that neither grammar accepts
pub const INVALID_INPUTS: &[&str] = &[
    "",
    "namespace.metric.name{foo:bar, baz:bang} by {foo,bar}",
    "metric.name{app:bazz,env:staging,host:host-*}.as_rate()",
    "sum:requests.count",
    "sum:a{*} +",
    "sum:a{*} sum:b{*}",
    "avg(last_5m):avg:system.cpu.user{env:prod} > 80",
];
