//! Unit tests for signal result types

use dipscan::models::signal::{IndicatorValues, RuleKind, SignalResult, SignalState};

fn result(rule: RuleKind, daily_change: Option<f64>) -> SignalResult {
    SignalResult {
        symbol: "bitcoin".to_string(),
        rule,
        values: IndicatorValues {
            weekly_change: 25.0,
            daily_change,
            ema_fast: 149.08,
            ema_slow: 135.54,
        },
        state: SignalState::Triggered,
    }
}

#[test]
fn test_alert_message_lists_every_value() {
    let message = result(RuleKind::DipBuyer, Some(-12.0)).alert_message();
    assert!(message.starts_with("dipBuyer triggered bitcoin"));
    assert!(message.contains("wchg 25.00%"));
    assert!(message.contains("dchg -12.00%"));
    assert!(message.contains("EMA10 149.080000"));
    assert!(message.contains("EMA50 135.540000"));
}

#[test]
fn test_dip_shorter_alert_omits_daily_change() {
    let message = result(RuleKind::DipShorter, None).alert_message();
    assert!(message.starts_with("dipShorter triggered bitcoin"));
    assert!(!message.contains("dchg"));
}

#[test]
fn test_undefined_values_per_rule() {
    let buyer = IndicatorValues::undefined(RuleKind::DipBuyer);
    assert!(buyer.weekly_change.is_nan());
    assert!(buyer.daily_change.unwrap().is_nan());
    assert!(!buyer.is_finite());

    let shorter = IndicatorValues::undefined(RuleKind::DipShorter);
    assert!(shorter.daily_change.is_none());
}

#[test]
fn test_state_serializes_in_screaming_case() {
    let json = serde_json::to_string(&SignalState::InsufficientData).unwrap();
    assert_eq!(json, "\"INSUFFICIENT_DATA\"");
    let json = serde_json::to_string(&RuleKind::DipBuyer).unwrap();
    assert_eq!(json, "\"dip_buyer\"");
}
