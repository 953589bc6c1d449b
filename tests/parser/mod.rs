// Parser test modules
//
// These modules contain test cases collected from the query language
// documentation and from real dashboards and monitors.

pub mod dispatch_tests;
pub mod expression_tests;
pub mod filter_tests;
pub mod monitor_tests;
pub mod query_tests;
