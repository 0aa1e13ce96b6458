//! Percentage change between two points addressed by offset from the end

use crate::common::math;
use crate::models::indicators::ChangeIndicator;

/// Value `offset` samples back from the end, where offset 1 is the most
/// recent sample. `None` when the offset is zero or reaches before the start.
pub fn price_at_offset(closes: &[f64], offset: usize) -> Option<f64> {
    if offset == 0 || offset > closes.len() {
        return None;
    }
    Some(closes[closes.len() - offset])
}

/// Percentage change moving from the sample at `from_offset` to the sample
/// at `to_offset`.
///
/// An out-of-range offset yields `NaN`, and any threshold comparison against
/// it is false.
pub fn calculate_change(closes: &[f64], from_offset: usize, to_offset: usize) -> ChangeIndicator {
    let value = match (
        price_at_offset(closes, from_offset),
        price_at_offset(closes, to_offset),
    ) {
        (Some(from), Some(to)) => math::percent_change(from, to),
        _ => f64::NAN,
    };

    ChangeIndicator {
        value,
        from_offset,
        to_offset,
    }
}
