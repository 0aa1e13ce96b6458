//! Main signal evaluation engine.
//!
//! Pure and synchronous: evaluating the same series twice yields identical
//! results.

use crate::error::ScanResult;
use crate::indicators::{calculate_change, close_prices, trailing_ema};
use crate::models::indicators::Candle;
use crate::models::signal::{IndicatorValues, RuleKind, SignalResult, SignalState};
use crate::signals::rules::{
    DAILY_PRIOR_OFFSET, DAILY_RECENT_OFFSET, FAST_EMA_WINDOW, MIN_HISTORY, SLOW_EMA_WINDOW,
    WEEKLY_PRIOR_OFFSET, WEEKLY_RECENT_OFFSET,
};

pub struct SignalEngine;

impl SignalEngine {
    /// Evaluate one rule set against an asset's candles.
    ///
    /// Fails with a computation error when one of the last `MIN_HISTORY`
    /// candles carries a close price the indicator math cannot use.
    pub fn evaluate(rule: RuleKind, symbol: &str, candles: &[Candle]) -> ScanResult<SignalResult> {
        let closes = close_prices(candles, MIN_HISTORY)?;
        Ok(Self::evaluate_closes(rule, symbol, &closes))
    }

    pub fn evaluate_dip_buyer(symbol: &str, candles: &[Candle]) -> ScanResult<SignalResult> {
        Self::evaluate(RuleKind::DipBuyer, symbol, candles)
    }

    pub fn evaluate_dip_shorter(symbol: &str, candles: &[Candle]) -> ScanResult<SignalResult> {
        Self::evaluate(RuleKind::DipShorter, symbol, candles)
    }

    /// Classify a close-price series (oldest first) against one rule set
    pub fn evaluate_closes(rule: RuleKind, symbol: &str, closes: &[f64]) -> SignalResult {
        if closes.is_empty() {
            return SignalResult {
                symbol: symbol.to_string(),
                rule,
                values: IndicatorValues::undefined(rule),
                state: SignalState::InsufficientData,
            };
        }

        let values = Self::compute_indicators(rule, closes);
        let state = if closes.len() < MIN_HISTORY || !values.is_finite() {
            SignalState::InsufficientData
        } else if rule.conditions_met(&values) {
            SignalState::Triggered
        } else {
            SignalState::NotTriggered
        };

        SignalResult {
            symbol: symbol.to_string(),
            rule,
            values,
            state,
        }
    }

    /// Indicator values a rule reads; values the series is too short for are `NaN`
    pub fn compute_indicators(rule: RuleKind, closes: &[f64]) -> IndicatorValues {
        let weekly_change =
            calculate_change(closes, WEEKLY_PRIOR_OFFSET, WEEKLY_RECENT_OFFSET).value;
        let daily_change = match rule {
            RuleKind::DipBuyer => {
                Some(calculate_change(closes, DAILY_PRIOR_OFFSET, DAILY_RECENT_OFFSET).value)
            }
            RuleKind::DipShorter => None,
        };

        IndicatorValues {
            weekly_change,
            daily_change,
            ema_fast: trailing_ema(closes, FAST_EMA_WINDOW).map_or(f64::NAN, |ema| ema.value),
            ema_slow: trailing_ema(closes, SLOW_EMA_WINDOW).map_or(f64::NAN, |ema| ema.value),
        }
    }

    /// Evaluate both rule sets, in [`RuleKind::ALL`] order
    pub fn evaluate_all(symbol: &str, candles: &[Candle]) -> ScanResult<Vec<SignalResult>> {
        let closes = close_prices(candles, MIN_HISTORY)?;
        Ok(RuleKind::ALL
            .iter()
            .map(|&rule| Self::evaluate_closes(rule, symbol, &closes))
            .collect())
    }
}
