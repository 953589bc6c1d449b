use afl::fuzz;
use rusty_metric_query_parser::{parse_any, parse_monitor};

fn main() {
    fuzz!(|data: &[u8]| {
        if let Ok(s) = std::str::from_utf8(data) {
            if let Ok(parsed) = parse_any(s) {
                // Anything we print must parse again.
                let printed = parsed.to_string();
                assert!(parse_any(&printed).is_ok(), "reparse failed: {printed}");
            }
            let _ = parse_monitor(s);
        }
    });
}
