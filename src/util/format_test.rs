use super::*;

#[test]
fn small_counts_are_plain_digits() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
}

#[test]
fn thousands_round_to_whole_k() {
    assert_eq!(format_count(1_000), "1K");
    assert_eq!(format_count(5_400), "5K");
    assert_eq!(format_count(999_000), "999K");
}

#[test]
fn millions_keep_one_decimal() {
    assert_eq!(format_count(1_000_000), "1.0M");
    assert_eq!(format_count(2_300_000), "2.3M");
    assert_eq!(format_count(12_040_000), "12.0M");
}
