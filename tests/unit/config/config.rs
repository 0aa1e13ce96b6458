//! Unit tests for configuration loading

use dipscan::config::{Config, ScanConfig, DEFAULT_SCAN_SCHEDULE};
use dipscan::error::ScanError;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

const REQUIRED: [(&str, &str); 2] = [("TELEGRAM_BOT_TOKEN", "123:ABC"), ("TELEGRAM_CHAT_OWNER", "42")];

#[test]
fn test_scan_config_default() {
    let config = ScanConfig::default();
    assert_eq!(config.assets_to_fetch, 100);
    assert_eq!(config.concurrency, 8);
    assert_eq!(config.schedule, DEFAULT_SCAN_SCHEDULE);
    assert!(!config.run_on_start);
}

#[test]
fn test_defaults_with_required_values() {
    let config = Config::from_lookup(lookup(&REQUIRED)).unwrap();
    assert_eq!(config.environment, "sandbox");
    assert!(!config.is_production());
    assert_eq!(config.coincap.endpoint.as_str(), "https://api.coincap.io/");
    assert_eq!(config.coincap.api_key, None);
    assert_eq!(config.coincap.exchange, "kucoin");
    assert_eq!(config.coincap.interval, "d1");
    assert_eq!(config.coincap.quote_id, "tether");
    assert_eq!(config.telegram.api_url.as_str(), "https://api.telegram.org/");
    assert_eq!(config.telegram.bot_token, "123:ABC");
    assert_eq!(config.telegram.chat_owner, "42");
    assert_eq!(config.scan.assets_to_fetch, 100);
}

#[test]
fn test_overrides() {
    let mut pairs = REQUIRED.to_vec();
    pairs.extend([
        ("ENVIRONMENT", "production"),
        ("COINCAP_ENDPOINT", "http://localhost:9000"),
        ("COINCAP_API_KEY", "secret"),
        ("ASSETS_TO_FETCH", "25"),
        ("SCAN_CONCURRENCY", "2"),
        ("SCAN_SCHEDULE", "0 0 12 * * *"),
        ("SCAN_ON_START", "true"),
        ("CANDLE_EXCHANGE", "binance"),
    ]);
    let config = Config::from_lookup(lookup(&pairs)).unwrap();
    assert!(config.is_production());
    assert_eq!(config.coincap.endpoint.as_str(), "http://localhost:9000/");
    assert_eq!(config.coincap.api_key.as_deref(), Some("secret"));
    assert_eq!(config.coincap.exchange, "binance");
    assert_eq!(config.scan.assets_to_fetch, 25);
    assert_eq!(config.scan.concurrency, 2);
    assert_eq!(config.scan.schedule, "0 0 12 * * *");
    assert!(config.scan.run_on_start);
}

#[test]
fn test_missing_required_value() {
    let err = Config::from_lookup(lookup(&[("TELEGRAM_BOT_TOKEN", "123:ABC")])).unwrap_err();
    assert!(matches!(err, ScanError::Config(ref msg) if msg.contains("TELEGRAM_CHAT_OWNER")));
}

#[test]
fn test_blank_value_counts_as_missing() {
    let err = Config::from_lookup(lookup(&[("TELEGRAM_BOT_TOKEN", "  "), ("TELEGRAM_CHAT_OWNER", "42")])).unwrap_err();
    assert!(matches!(err, ScanError::Config(ref msg) if msg.contains("TELEGRAM_BOT_TOKEN")));
}

#[test]
fn test_invalid_values() {
    for (key, value) in [
        ("ASSETS_TO_FETCH", "many"),
        ("SCAN_CONCURRENCY", "0"),
        ("SCAN_ON_START", "maybe"),
        ("COINCAP_ENDPOINT", "not a url"),
    ] {
        let mut pairs = REQUIRED.to_vec();
        pairs.push((key, value));
        let result = Config::from_lookup(lookup(&pairs));
        assert!(matches!(result, Err(ScanError::Config(_))), "{} = {} should be rejected", key, value);
    }
}
