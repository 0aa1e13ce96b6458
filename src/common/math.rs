//! Series math used by the indicator layer.
//!
//! All functions take read-only slices ordered oldest to newest.

/// Simple average of the first `period` values
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    Some(values[..period].iter().sum::<f64>() / period as f64)
}

/// Full EMA series, one value per input starting at index `period - 1`.
///
/// Smoothing factor is `2 / (period + 1)`, seeded with the SMA of the first
/// `period` values.
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    let seed = match sma(values, period) {
        Some(seed) => seed,
        None => return Vec::new(),
    };

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut series = Vec::with_capacity(values.len() - period + 1);
    series.push(seed);

    let mut prev = seed;
    for &value in &values[period..] {
        let next = (value - prev) * multiplier + prev;
        series.push(next);
        prev = next;
    }
    series
}

/// Most recent EMA value
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    ema_series(values, period).last().copied()
}

/// Percentage change moving from `from` to `to`: `(to / from * 100) - 100`
pub fn percent_change(from: f64, to: f64) -> f64 {
    (to / from * 100.0) - 100.0
}
