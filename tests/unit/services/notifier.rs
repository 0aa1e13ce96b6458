//! Unit tests for notification text handling

use dipscan::services::notifier::{truncate_message, MAX_MESSAGE_CHARS};

#[test]
fn test_short_message_untouched() {
    assert_eq!(truncate_message("dipBuyer triggered bitcoin", MAX_MESSAGE_CHARS), "dipBuyer triggered bitcoin");
}

#[test]
fn test_long_message_cut_to_limit() {
    let text = "x".repeat(5000);
    let truncated = truncate_message(&text, MAX_MESSAGE_CHARS);
    assert_eq!(truncated.chars().count(), 4095);
}

#[test]
fn test_truncation_respects_char_boundaries() {
    let text = "🚀".repeat(10);
    let truncated = truncate_message(&text, 3);
    assert_eq!(truncated, "🚀🚀🚀");
}
