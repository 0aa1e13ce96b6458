//! Unit tests for close-price extraction

use chrono::Utc;
use dipscan::error::ScanError;
use dipscan::indicators::close_prices;
use dipscan::models::indicators::Candle;

fn candle(close: f64) -> Candle {
    Candle::new(close, close, close, close, 1.0, Utc::now())
}

#[test]
fn test_close_prices_in_order() {
    let candles = vec![candle(1.0), candle(2.5), candle(3.0)];
    assert_eq!(close_prices(&candles, 98).unwrap(), vec![1.0, 2.5, 3.0]);
}

#[test]
fn test_close_prices_empty() {
    assert!(close_prices(&[], 98).unwrap().is_empty());
}

#[test]
fn test_close_prices_rejects_malformed_values() {
    for bad in [f64::NAN, f64::INFINITY, 0.0, -4.0] {
        let candles = vec![candle(1.0), candle(bad)];
        let err = close_prices(&candles, 98).unwrap_err();
        assert!(matches!(err, ScanError::Computation(_)), "unexpected error for {}", bad);
    }
}

#[test]
fn test_close_prices_ignores_history_outside_lookback() {
    let mut candles = vec![candle(0.0), candle(f64::NAN)];
    candles.extend((0..3).map(|i| candle(10.0 + i as f64)));

    let closes = close_prices(&candles, 3).unwrap();
    assert_eq!(closes.len(), 5);
    assert_eq!(closes[0], 0.0);
    assert_eq!(&closes[2..], &[10.0, 11.0, 12.0]);

    // first checked sample
    let err = close_prices(&candles, 4).unwrap_err();
    assert!(matches!(err, ScanError::Computation(ref msg) if msg.contains("candle 1")));
}
