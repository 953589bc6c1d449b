// Lexer test module
// Re-exports token-level test cases

pub mod identifier_tests;
pub mod number_tests;
pub mod string_tests;

// Re-export all test data for convenience
pub use identifier_tests::*;
pub use number_tests::*;
pub use string_tests::*;
