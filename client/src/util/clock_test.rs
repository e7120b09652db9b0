use super::*;
use time::macros::datetime;

#[test]
fn from_parts_builds_timestamp() {
    assert_eq!(from_parts(2025, 8, 13, 9, 11, 0), Some(datetime!(2025-08-13 09:11)));
}

#[test]
fn from_parts_rejects_invalid_calendar_values() {
    assert!(from_parts(2025, 13, 1, 0, 0, 0).is_none());
    assert!(from_parts(2025, 2, 30, 0, 0, 0).is_none());
    assert!(from_parts(2025, 1, 1, 24, 0, 0).is_none());
}
