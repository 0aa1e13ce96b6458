//! Unit tests for the scan scheduler

use chrono::{Timelike, Utc};
use dipscan::config::DEFAULT_SCAN_SCHEDULE;
use dipscan::core::scheduler::parse_schedule;
use dipscan::error::ScanError;

#[test]
fn test_default_schedule_fires_daily_at_five_past_midnight() {
    let schedule = parse_schedule(DEFAULT_SCAN_SCHEDULE).unwrap();
    let ticks: Vec<_> = schedule.upcoming(Utc).take(3).collect();
    assert_eq!(ticks.len(), 3);
    for tick in &ticks {
        assert_eq!((tick.hour(), tick.minute(), tick.second()), (0, 5, 0));
    }
    assert_eq!((ticks[1] - ticks[0]).num_hours(), 24);
}

#[test]
fn test_invalid_schedule() {
    let err = parse_schedule("every day at noon").unwrap_err();
    assert!(matches!(err, ScanError::Config(_)));
}
