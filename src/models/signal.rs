//! Rule evaluation output

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two independent rule sets evaluated per asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Weekly rally, daily pullback, short trend still above long trend
    DipBuyer,
    /// Weekly rally, short trend crossed below long trend
    DipShorter,
}

impl RuleKind {
    pub const ALL: [RuleKind; 2] = [RuleKind::DipBuyer, RuleKind::DipShorter];

    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::DipBuyer => "dipBuyer",
            RuleKind::DipShorter => "dipShorter",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalState {
    Triggered,
    NotTriggered,
    InsufficientData,
}

/// Indicator values a rule decision was made on. Undefined values are `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValues {
    pub weekly_change: f64,
    /// Only computed for [`RuleKind::DipBuyer`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_change: Option<f64>,
    pub ema_fast: f64,
    pub ema_slow: f64,
}

impl IndicatorValues {
    pub fn undefined(rule: RuleKind) -> Self {
        Self {
            weekly_change: f64::NAN,
            daily_change: match rule {
                RuleKind::DipBuyer => Some(f64::NAN),
                RuleKind::DipShorter => None,
            },
            ema_fast: f64::NAN,
            ema_slow: f64::NAN,
        }
    }

    /// True when every value the rule reads is a finite number
    pub fn is_finite(&self) -> bool {
        self.weekly_change.is_finite()
            && self.daily_change.map_or(true, f64::is_finite)
            && self.ema_fast.is_finite()
            && self.ema_slow.is_finite()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResult {
    pub symbol: String,
    pub rule: RuleKind,
    pub values: IndicatorValues,
    pub state: SignalState,
}

impl SignalResult {
    pub fn is_triggered(&self) -> bool {
        self.state == SignalState::Triggered
    }

    /// Alert text listing the asset, the rule and every indicator value
    pub fn alert_message(&self) -> String {
        let mut message = format!(
            "{} triggered {} wchg {:.2}%",
            self.rule, self.symbol, self.values.weekly_change
        );
        if let Some(daily_change) = self.values.daily_change {
            message.push_str(&format!(" dchg {:.2}%", daily_change));
        }
        message.push_str(&format!(
            " EMA10 {:.6} EMA50 {:.6}",
            self.values.ema_fast, self.values.ema_slow
        ));
        message
    }
}
