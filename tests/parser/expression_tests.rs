// Metric expression test cases
//
// These test cases cover:
// - The four arithmetic operators over queries and numbers
// - Precedence and parentheses
// - `/`, `-` and `*` inside filters, which are not operators
// - Wrapping calls around queries and around whole expressions
// - Operators written directly against numbers
// - Error cases

/// Valid expressions
pub const VALID_EXPRESSIONS: &[&str] = &[
    "sum:metric.name{foo:bar} + sum:metric.name_two{foo:bar}",
    "sum:metric.name{foo:bar} - sum:metric.name_two{foo:bar} - 0.1",
    "sum:metric.name{foo:bar} * sum:metric.name_two{foo:bar}",
    "sum:metric.name{foo:bar} / sum:metric.name_two{foo:bar}",
    "(sum:metric.name{foo:bar} - sum:metric.name_two{foo:bar}) / sum:metric.name_two{foo:bar}",
    "sum:metric.name{foo:bar/hello} / sum:metric.name_two{foo:bar}",
    "(sum:metric.name{foo:bar/hello} / sum:metric.name_two{baz:bang}) / 100",
    "sum:metric.name{foo:bar} * sum:metric.name_two{foo:bar} + sum:metric.name_three{foo:bar} - 50",
    "(sum:metric.name{foo:bar} - (sum:metric.name_two{foo:bar} * 2)) / 10",
    "sum:metric.name{env:prod AND service:api} - sum:metric.name{env:staging AND service:api}",
    "sum:metric.name{*} * 2",
    "sum:metric.name{code:200} / sum:metric.name_two{code:200}",
    "default_zero(avg:metric.name{foo:bar} + avg:other.metric.name{foo:bar})",
    "default_zero(avg:metric.name{foo:bar}) + avg:other.metric.name{foo:bar}",
    "default_zero(avg:system.cpu.user{foo:bar, (kube_cluster_name:test-cluster OR !kube_cluster_name:*)}.rollup(avg, 300)) + (avg:system.cpu.user{foo:bar, (kube_cluster_name:test-cluster OR !kube_cluster_name:*)} * 1000 + (100 / 10))",
    "100 * sum:errors{*} / sum:requests{*}",
    "-1 * sum:metric{*}",
    "42",
];

/// Expressions whose canonical form differs from the input
/// Format: (input, canonical)
pub const EXPRESSION_DISPLAY: &[(&str, &str)] = &[
    ("sum:a{*}+sum:b{*}", "sum:a{*} + sum:b{*}"),
    ("sum:a{*} -5", "sum:a{*} - 5"),
    ("sum:a{*} +2.50", "sum:a{*} + 2.5"),
    ("( sum:a{*} )/2", "(sum:a{*}) / 2"),
    // Numbers touching an operator
    ("2*sum:a{*}", "2 * sum:a{*}"),
    ("100*(sum:a{*})", "100 * (sum:a{*})"),
    ("sum:a{*}/100*2", "sum:a{*} / 100 * 2"),
    ("sum:a{*}/2-1", "sum:a{*} / 2 - 1"),
    ("sum:a{*}*2+1", "sum:a{*} * 2 + 1"),
    (
        "default_zero(sum:a{*}+sum:b{*},0)",
        "default_zero(sum:a{*} + sum:b{*}, 0)",
    ),
];

/// Invalid expressions
pub const INVALID_EXPRESSIONS: &[&str] = &[
    "",
    "+",
    "sum:a{*} +",
    "sum:a{*} * * 2",
    "(sum:a{*} + 1",
    "sum:a{*} + 1)",
    "sum:a{*} sum:b{*}",
    "sum:a + sum:b{*}",
    "default_zero(sum:a{*} + 1",
    "default_zero(sum:a{*} + 1 2)",
];
