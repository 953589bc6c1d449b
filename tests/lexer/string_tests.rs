// String literal test cases
//
// These test cases cover:
// - Double-quoted strings
// - Single-quoted strings
// - Escaped quotes and backslashes
// - Backslash sequences kept verbatim (regular expressions)

/// Valid double-quoted string test cases
/// Format: (input_literal, expected_value)
pub const VALID_DOUBLE_QUOTED: &[(&str, &str)] = &[
    (r#""hello""#, "hello"),
    (r#""CPU User""#, "CPU User"),
    (r#""""#, ""),
    (r#""web-.*""#, "web-.*"),
    // Escaped quotes
    (r#""say \"hi\"""#, r#"say "hi""#),
    // Escaped backslash
    (r#""a\\b""#, r"a\b"),
    // Other sequences are kept as written
    (r#""web-\d+""#, r"web-\d+"),
    (r#""tab\there""#, r"tab\there"),
    // The other quote needs no escape
    (r#""it's""#, "it's"),
];

/// Valid single-quoted string test cases
pub const VALID_SINGLE_QUOTED: &[(&str, &str)] = &[
    ("'avg'", "avg"),
    ("'hello world'", "hello world"),
    (r"'it\'s'", "it's"),
    (r#"'say "hi"'"#, r#"say "hi""#),
];

/// Invalid string literals
pub const INVALID_STRINGS: &[&str] = &[
    // Unterminated
    r#""hello"#,
    "'hello",
    // Line breaks are not allowed inside strings
    "\"hello\nworld\"",
    // Escaped closing quote
    r#""abc\"#,
    // Not a string at all
    "hello",
];
