// Number literal test cases
//
// These test cases cover:
// - Integers and decimals, with and without sign
// - Canonical rendering of numbers
// - Text that looks numeric but lexes as an identifier
// - Numbers written directly against an operator

/// Valid number literals
/// Format: (input, expected_value)
pub const VALID_NUMBERS: &[(&str, f64)] = &[
    // Integers
    ("0", 0.0),
    ("1", 1.0),
    ("60", 60.0),
    ("300", 300.0),
    ("1000", 1000.0),
    // Decimals
    ("1.2", 1.2),
    ("1.53", 1.53),
    ("25.75", 25.75),
    ("0.01", 0.01),
    (".5", 0.5),
    // Signed
    ("-5", -5.0),
    ("+42", 42.0),
    ("-0.1", -0.1),
];

/// Inputs that are not a complete number literal
pub const INVALID_NUMBERS: &[&str] = &[
    // Identifier characters after the digits
    "2xx",
    "1a",
    "100ms",
    "3_000",
    "bar-1",
    // No digits at all
    ".",
    "-",
    "+",
    "abc",
];

/// Numbers followed by an operator without whitespace
/// Format: (input, number, rest)
pub const NUMBERS_BEFORE_OPERATORS: &[(&str, &str, &str)] = &[
    ("2*", "2", "*"),
    ("2-1", "2", "-1"),
    ("100/10", "100", "/10"),
    ("100*(", "100", "*("),
    ("1.5+2", "1.5", "+2"),
    ("200-299", "200", "-299"),
];

/// Canonical rendering of numbers
/// Format: (value, expected_text)
pub const NUMBER_FORMATS: &[(f64, &str)] = &[
    (0.0, "0"),
    (-0.0, "0"),
    (1.0, "1"),
    (100.0, "100"),
    (-5.0, "-5"),
    (0.1, "0.1"),
    (1.53, "1.53"),
    (25.75, "25.75"),
    (0.01, "0.01"),
    (1e21, "1000000000000000000000"),
    (1e-7, "0.0000001"),
];
