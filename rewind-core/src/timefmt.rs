//! Submit-time display formatting

use chrono::{Local, TimeZone};

/// Render a version submit time for display
///
/// `nanos` is the submission timestamp in integer nanoseconds since the
/// Unix epoch, as reported by the orchestrator. The rendered form is
/// `MMM DD, 'YY HH:mm:ss ±HHMM` in local time, e.g.
/// `Jan 03, '26 14:05:09 +0100`. Sub-millisecond precision is discarded.
///
/// Timestamps outside the representable range render as `-` rather than
/// failing the surrounding display.
pub fn format_submit_time(nanos: i64) -> String {
    let millis = nanos / 1_000_000;
    match Local.timestamp_millis_opt(millis).single() {
        Some(ts) => ts.format("%b %d, '%y %H:%M:%S %z").to_string(),
        None => "-".to_string(),
    }
}
