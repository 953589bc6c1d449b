// Monitor test cases
//
// These test cases cover:
// - Each comparator
// - Integer, decimal and negative thresholds
// - Queries with filters, groupings and wrapping calls
// - Error cases

use rusty_metric_query_parser::ast::Comparator;

/// Valid monitors
/// Format: (input, aggregation, evaluation_window, comparator, threshold)
pub const VALID_MONITORS: &[(&str, &str, &str, Comparator, f64)] = &[
    (
        "avg(last_5m):max:system.disk.in_use{*} by {host} > 1",
        "avg",
        "last_5m",
        Comparator::Gt,
        1.0,
    ),
    (
        "avg(last_5m):max:system.disk.in_use{*} by {host} > 1.2",
        "avg",
        "last_5m",
        Comparator::Gt,
        1.2,
    ),
    (
        "avg(last_15m):max:system.disk.in_use{*} by {host} > 1.2",
        "avg",
        "last_15m",
        Comparator::Gt,
        1.2,
    ),
    (
        "min(last_10m):min:system.cpu.idle{env:production} by {host} < 10",
        "min",
        "last_10m",
        Comparator::Lt,
        10.0,
    ),
    (
        "avg(last_30m):sum:errors.count{service:api} by {endpoint} >= 500",
        "avg",
        "last_30m",
        Comparator::Ge,
        500.0,
    ),
    (
        "max(last_1h):avg:system.memory.free{role:database} <= 100",
        "max",
        "last_1h",
        Comparator::Le,
        100.0,
    ),
    (
        "avg(last_15m):max:network.tcp.retransmit{env:prod AND (region:us-east OR region:us-west)} > 50",
        "avg",
        "last_15m",
        Comparator::Gt,
        50.0,
    ),
    (
        "min(last_5m):avg:system.load.1{env:production} by {host,availability-zone,cluster} > 4",
        "min",
        "last_5m",
        Comparator::Gt,
        4.0,
    ),
    (
        "avg(last_5m):sum:system.io.await{service:database} > 25.75",
        "avg",
        "last_5m",
        Comparator::Gt,
        25.75,
    ),
    (
        "avg(last_5m):avg:system.cpu.user{env:prod} > 80",
        "avg",
        "last_5m",
        Comparator::Gt,
        80.0,
    ),
    (
        "sum(last_1d):default_zero(sum:temperature{*}.as_count()) < -5",
        "sum",
        "last_1d",
        Comparator::Lt,
        -5.0,
    ),
];

/// Invalid monitors
/// Format: (input, expected_error_substring)
pub const INVALID_MONITORS: &[(&str, &str)] = &[
    ("avg(last_5m):avg:system.cpu.user{env:prod}", "expected a comparator"),
    ("avg(last_5m):avg:system.cpu.user{env:prod} >", "expected a numeric threshold"),
    ("avg(last_5m):avg:system.cpu.user{env:prod} > high", "expected a numeric threshold"),
    ("avg(last_5m):avg:system.cpu.user{env:prod} = 80", "expected a comparator"),
    ("avg(last_5m):avg:system.cpu.user{env:prod} > 80 > 90", "after the end of the query"),
    ("avg(last_5m):avg:system.cpu.user > 80", "filters are required"),
    ("avg(last_5m) avg:system.cpu.user{*} > 80", "expected `:`"),
    ("avg:system.cpu.user{*} > 80", "expected `(`"),
];
