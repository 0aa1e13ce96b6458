use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One time bucket of trading data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmaIndicator {
    pub value: f64,
    pub period: u32,
}

/// Percentage change between two samples addressed by offset from the end.
///
/// `value` is `NaN` when either offset falls outside the series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeIndicator {
    pub value: f64,
    pub from_offset: usize,
    pub to_offset: usize,
}

impl ChangeIndicator {
    pub fn is_defined(&self) -> bool {
        self.value.is_finite()
    }
}
