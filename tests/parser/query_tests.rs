// Metric query test cases
//
// These test cases cover:
// - Aggregators, with and without a space aggregation condition
// - Dotted metric names, including numbers, slashes and wildcards
// - Filters and `by {...}` groupings
// - Chained functions and their typed arguments
// - Wrapping aggregator functions
// - Error cases

/// Valid plain queries
pub const VALID_QUERIES: &[&str] = &[
    "sum:namespace.metric.name{foo:bar} by {foo}",
    "sum:namespace.metric.name{*} by {foo,bar}",
    "sum:namespace.metric.name{foo:bar-*} by {foo,bar}",
    "sum:namespace.metric_name{foo:bar} by {baz}",
    "sum:prometheus_metric_source{foo:bar-bar, baz:bang} by {fizz-buzz,bang}",
    "sum:prometheus_metric_source_1{foo:bar-bar, baz:bang} by {fizz-buzz,bang}",
    "sum:prometheus_metric_source_1{foo:bar-bar-1, baz:bang_2} by {fizz-buzz3,bang}",
    "avg:system.cpu.user{env:staging AND (availability-zone:us-east-1a OR availability-zone:us-east-1c)} by {availability-zone}",
    "count(v: v<=1):metric.name{foo:bar}",
    "count(v: v>=1.53):metric.name{foo:bar}",
    "count(v: v>=100):metric.name{foo:bar}",
    "count(v: v<10):metric.name{*}",
    "sum:system.cpu.user{*}.as_rate()",
    "sum:system.cpu.user{*}.rollup(avg,60)",
    "sum:system.cpu.user{*}.label(\"CPU User\")",
    "sum:system.cpu.user{*}.fill(true)",
    "sum:system.cpu.user{*}.as_rate().rollup(avg,60).label(\"CPU User\").fill(true)",
    "sum:metric.name{!env:prod, region:us-east-1}",
    "sum:metric.name{host:~\"web-.*\"}",
    "sum:metric.name{duration:>=100 AND duration:<=200 OR errors:>5}",
    "sum:metric.name{env IN (prod, staging)}",
    "sum:metric.name{region NOT IN (us-east-1, us-west-2)}",
    "sum:metric.name{(service:api AND NOT env:dev) OR region IN (us-east-1, us-west-2)}",
    "sum:system.disk/*{*} by {host}.as_rate().rollup(avg,300)",
    "sum:metric{key:*}",
    "avg:metric{key:*value-*}",
    "avg:metric{key:*value-*} by {*}",
    "max:system.load.1{env:production} by {host,availability-zone,cluster}",
    "sum:trace.http.request.hits{service:web-store} by {resource_name}.as_count()",
];

/// Valid wrapping aggregator functions
pub const VALID_AGGREGATOR_FUNCTIONS: &[&str] = &[
    "moving_rollup(default_zero(sum:metric{key:value,!service:service,env:staging}.as_rate()), 60, 'avg')",
    "moving_rollup(default_zero(sum:metric.name{app:bazz,env:staging}.as_rate()), 60, 'avg')",
    "default_zero(sum:metric.name{*})",
    "abs(avg:system.cpu.user{*} by {host})",
    "top(avg:system.cpu.user{*} by {host}, 10, 'mean', 'desc')",
];

/// Queries whose canonical form differs from the input
/// Format: (input, canonical)
pub const QUERY_DISPLAY: &[(&str, &str)] = &[
    (
        "sum:metric{foo:bar, baz:bang} by {a, b}",
        "sum:metric{foo:bar,baz:bang} by {a,b}",
    ),
    (
        "sum:system.cpu.user{*}.rollup(avg, 60)",
        "sum:system.cpu.user{*}.rollup(avg,60)",
    ),
    ("count( v:v<10 ):metric{*}", "count(v:v<10):metric{*}"),
    ("sum:metric{*} BY {host}", "sum:metric{*} by {host}"),
    ("sum:metric{*}.fill(1.0)", "sum:metric{*}.fill(1)"),
    (
        "top(avg:cpu{*} by {host},10,'mean','desc')",
        "top(avg:cpu{*} by {host}, 10, 'mean', 'desc')",
    ),
];

/// Invalid queries
/// Format: (input, expected_error_substring)
pub const INVALID_QUERIES: &[(&str, &str)] = &[
    // An aggregator is required
    (
        "namespace.metric.name{foo:bar, baz:bang} by {foo,bar}",
        "must be prefixed with an aggregator",
    ),
    (
        "metric{filter:value-*}.as_rate()",
        "must be prefixed with an aggregator",
    ),
    (
        "metric.name{app:bazz,env:staging,host:host-*}.as_rate()",
        "must be prefixed with an aggregator",
    ),
    // Filters are required
    ("sum:requests.count", "filters are required"),
    ("sum:requests.count by {host}", "filters are required"),
    // Grouping wildcards stand alone
    (
        "avg:metric{key:*value-*} by {*foo}",
        "grouping wildcard must be `*` on its own",
    ),
    ("sum:metric{*} by {host", "expected `,` or `}` in grouping"),
    ("sum:metric{*} by host", "expected `{`"),
    // Conditions
    ("count():metric{*}", "empty aggregator condition"),
    ("count(v: v<10:metric{*}", "aggregator condition"),
    // Functions
    ("sum:metric{*}.as_rate", "expected `(`"),
    ("sum:metric{*}.rollup(avg, 60", "expected `,` or `)`"),
    // Trailing input
    ("sum:metric{*} sum:other{*}", "after the end of the query"),
    ("sum:metric{a:b}}", "after the end of the query"),
    // Unclosed
    ("sum:metric{a:b", "expected `}`"),
    ("", "expected an aggregator"),
];
