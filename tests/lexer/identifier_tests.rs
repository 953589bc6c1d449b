// Identifier test cases
//
// Identifiers are deliberately permissive: hyphens and `*` may appear after
// the first character, so tag values such as `us-east-1a` or `bar-*` are
// single tokens.

/// Valid identifiers, consumed entirely
pub const VALID_IDENTIFIERS: &[&str] = &[
    "sum",
    "avg",
    "metric_name",
    "_private",
    "prometheus_metric_source_1",
    "availability-zone",
    "us-east-1a",
    "fizz-buzz3",
    "bar-*",
    "api-*-service",
    "last_5m",
    "2xx",
    "200-299",
];

/// Identifiers followed by something else
/// Format: (input, expected_identifier, expected_rest)
pub const PARTIAL_IDENTIFIERS: &[(&str, &str, &str)] = &[
    ("system.cpu.user", "system", ".cpu.user"),
    ("foo:bar", "foo", ":bar"),
    ("host}", "host", "}"),
    ("bar/hello", "bar", "/hello"),
    ("fill(true)", "fill", "(true)"),
];

/// Inputs that do not start an identifier
pub const INVALID_IDENTIFIERS: &[&str] = &["", "-foo", "*value", ".name", "!env", "{"];

/// Keywords, case-insensitive
pub const KEYWORDS: &[&str] = &[
    "AND", "and", "And", "OR", "or", "NOT", "not", "IN", "in", "by", "BY", "true", "FALSE",
];
