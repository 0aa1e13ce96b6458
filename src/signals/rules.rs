//! Reference windows and decision thresholds for the two rule sets.
//!
//! Weekly references are expressed in daily samples (`weeks * 7`), which
//! assumes one candle per calendar day with no gaps.

use crate::models::signal::{IndicatorValues, RuleKind};

pub const DAYS_PER_WEEK: usize = 7;

/// Change% from 14 weeks ago to 10 weeks ago
pub const WEEKLY_PRIOR_OFFSET: usize = 14 * DAYS_PER_WEEK;
pub const WEEKLY_RECENT_OFFSET: usize = 10 * DAYS_PER_WEEK;

/// Change% from 14 days ago to 10 days ago
pub const DAILY_PRIOR_OFFSET: usize = 14;
pub const DAILY_RECENT_OFFSET: usize = 10;

pub const FAST_EMA_WINDOW: u32 = 10;
pub const SLOW_EMA_WINDOW: u32 = 50;

/// Longest reference window; shorter series cannot be classified
pub const MIN_HISTORY: usize = WEEKLY_PRIOR_OFFSET;

pub const WEEKLY_CHANGE_MIN: f64 = 20.0;
pub const DAILY_CHANGE_MAX: f64 = -10.0;

impl RuleKind {
    /// Apply the rule's thresholds. Comparisons against `NaN` are false.
    pub fn conditions_met(&self, values: &IndicatorValues) -> bool {
        let weekly_rally = values.weekly_change > WEEKLY_CHANGE_MIN;
        match self {
            RuleKind::DipBuyer => {
                let daily_pullback = values
                    .daily_change
                    .is_some_and(|change| change < DAILY_CHANGE_MAX);
                weekly_rally && daily_pullback && values.ema_fast > values.ema_slow
            }
            RuleKind::DipShorter => weekly_rally && values.ema_fast < values.ema_slow,
        }
    }
}
