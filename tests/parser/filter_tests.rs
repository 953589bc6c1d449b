// Metric filter test cases
//
// These test cases cover:
// - Tag filters with `:` and the comparison, regex and list separators
// - Boolean sequences joined by `,`, AND, OR and AND NOT
// - Parenthesized groups, including nested ones
// - Negation and wildcards
// - Error cases

/// Valid filters (the contents of a query's `{...}`)
pub const VALID_FILTERS: &[&str] = &[
    // Single terms
    "*",
    "code:2xx",
    "foo:bar-bar",
    "!a:b",
    "env:shop.ist",
    // Sequences
    "a:b, c:d",
    "a:b AND c:d AND e:f",
    "a:b AND c:d AND NOT e:f",
    "a:b OR c:d OR e:f",
    "!a:b, !c:d",
    "path:api_endpoint, method:GET",
    "status:200, response_time:500",
    // Lists
    "c IN (d)",
    "a IN (b, c, d)",
    "e IN (f OR g OR h)",
    "env:shop.ist AND availability-zone IN (us-east-1a, us-east-1b, us-east4-b)",
    "env:prod AND location NOT IN (atlanta, seattle, las-vegas)",
    "env IN (prod, staging) AND service IN (web, api, worker)",
    // Groups
    "a:b AND (c:d OR e:f)",
    "service:api AND ((env:prod AND region:us-east) OR (env:staging AND region:us-west))",
    "env:prod AND NOT (region:us-east AND datacenter:primary)",
    "(service:api AND (env:prod OR env:staging)) OR (service:web AND env:dev AND NOT region:eu-west)",
    // Wildcards
    "host:web-*, service:api-*-service",
    "key:*value-*",
    "!kube_cluster_name:*",
    // Comparisons
    "response_time:>500",
    "error_rate:<0.01",
    "cpu:>=90",
    "memory:<=75.5",
    "response_time:>500 AND status:200",
    "cpu:>80 OR memory:>90",
    "env:prod AND (response_time:<200 OR error_rate:<0.01)",
    // Regular expressions
    "service:~simple-regex",
    "path:~simple-pattern",
    "service:~api-.* AND env:prod",
    "service:~simple-regex OR env:~simple-pattern",
    "env:prod AND (service:~api-.* OR host:~web-.*)",
    "host:~\"web-.*\"",
    // Slashes and dots in values
    "foo:bar/hello",
    "version:1.2.3",
];

/// Filters whose canonical form differs from the input
/// Format: (input, canonical)
pub const FILTER_DISPLAY: &[(&str, &str)] = &[
    ("a:b, c:d", "a:b,c:d"),
    ("a IN (b, c, d)", "a IN (b,c,d)"),
    ("a:b and c:d", "a:b AND c:d"),
    ("a:b  AND   NOT  c:d", "a:b AND NOT c:d"),
    ("env in (prod, staging)", "env IN (prod,staging)"),
    ("region not in (us-east-1)", "region NOT IN (us-east-1)"),
    ("threshold:1.50", "threshold:1.5"),
    ("label:'single'", "label:'single'"),
];

/// Invalid filters
/// Format: (input, expected_error_substring)
pub const INVALID_FILTERS: &[(&str, &str)] = &[
    ("", "expected a tag key"),
    ("a", "missing filter separator after `a`"),
    ("a:b, c", "missing filter separator after `c`"),
    ("(a:b", "unbalanced parentheses"),
    ("a:b AND (c:d OR (e:f)", "unbalanced parentheses"),
    ("a IN (b, c", "unclosed value list"),
    ("a:b)", "unexpected `)`"),
    ("a:", "expected a name or value"),
    ("!", "expected a tag key"),
];
