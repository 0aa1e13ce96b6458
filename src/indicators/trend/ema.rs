//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::indicators::EmaIndicator;

/// Calculate the most recent EMA of `closes` for a specific period
pub fn calculate_ema(closes: &[f64], period: u32) -> Option<EmaIndicator> {
    if period == 0 || closes.len() < period as usize {
        return None;
    }

    let ema_value = math::ema(closes, period as usize)?;

    Some(EmaIndicator {
        value: ema_value,
        period,
    })
}

/// EMA over only the trailing `window` closes, with `period == window`.
///
/// The value depends on the last `window` samples alone, not on older history.
pub fn trailing_ema(closes: &[f64], window: u32) -> Option<EmaIndicator> {
    let window_len = window as usize;
    if closes.len() < window_len {
        return None;
    }
    calculate_ema(&closes[closes.len() - window_len..], window)
}
