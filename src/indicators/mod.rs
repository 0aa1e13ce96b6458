//! Technical indicators computed over close-price series

pub mod momentum;
pub mod trend;

pub use momentum::*;
pub use trend::*;

use crate::error::{ScanError, ScanResult};
use crate::models::indicators::Candle;

/// Extract close prices from candles, oldest first.
///
/// Only the trailing `lookback` candles are validated, since those are the
/// only samples the indicators read. A close there that is non-finite or
/// non-positive is a computation error. Older history is passed through as is.
pub fn close_prices(candles: &[Candle], lookback: usize) -> ScanResult<Vec<f64>> {
    let first_checked = candles.len().saturating_sub(lookback);
    candles
        .iter()
        .enumerate()
        .map(|(index, candle)| {
            if index < first_checked || (candle.close.is_finite() && candle.close > 0.0) {
                Ok(candle.close)
            } else {
                Err(ScanError::Computation(format!(
                    "malformed close price {} at candle {} ({})",
                    candle.close, index, candle.timestamp
                )))
            }
        })
        .collect()
}
