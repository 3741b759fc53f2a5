//! Compact display formatting for aggregate counters.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a counter the way the platform chrome displays it: millions with one
/// decimal and an `M` suffix, thousands rounded to a whole `K`, small values
/// as plain digits.
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.0}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}
