// Test helpers shared by the integration tests
// These helpers provide consistent patterns for checking parse results

#![allow(dead_code)]

use pretty_assertions::assert_eq;

/// Normalize query text for round-trip comparison.
///
/// Spacing after commas and inside braces is not significant, and neither is
/// case.
pub fn normalize(text: &str) -> String {
    text.replace(", ", ",")
        .replace("{ ", "{")
        .replace(" }", "}")
        .to_lowercase()
}

/// Assert that `printed` is `input` up to normalization
pub fn assert_same_query(input: &str, printed: &str) {
    assert_eq!(
        normalize(input),
        normalize(printed),
        "round trip changed the query"
    );
}

/// Assert that parsing succeeds, returning the result
#[macro_export]
macro_rules! assert_parses {
    ($parse:expr, $input:expr) => {{
        let input: &str = $input;
        match $parse(input) {
            Ok(parsed) => parsed,
            Err(e) => panic!("Expected '{}' to parse successfully, got error: {}", input, e),
        }
    }};
}

/// Assert that parsing fails, optionally with a message containing a substring
#[macro_export]
macro_rules! assert_parse_error {
    ($parse:expr, $input:expr) => {{
        let input: &str = $input;
        let result = $parse(input);
        assert!(
            result.is_err(),
            "Expected '{}' to fail parsing, but got: {:?}",
            input,
            result.ok()
        );
        result.err().unwrap()
    }};
    ($parse:expr, $input:expr, $error_contains:expr) => {{
        let err = assert_parse_error!($parse, $input);
        let err_str = err.to_string();
        assert!(
            err_str.contains($error_contains),
            "Expected error for '{}' to contain '{}', got: {}",
            $input,
            $error_contains,
            err_str
        );
        err
    }};
}

/// Assert that printing and reparsing reproduces the same text
#[macro_export]
macro_rules! assert_roundtrip {
    ($parse:expr, $input:expr) => {{
        let parsed = assert_parses!($parse, $input);
        let printed = parsed.to_string();
        $crate::common::assert_same_query($input, &printed);
        let reparsed = assert_parses!($parse, &printed);
        assert_eq!(
            reparsed.to_string(),
            printed,
            "printing is not stable for '{}'",
            $input
        );
        parsed
    }};
}
