//! Shared data models spanning the engine layers.

pub mod asset;
pub mod indicators;
pub mod signal;

pub use asset::Asset;
pub use indicators::{Candle, ChangeIndicator, EmaIndicator};
pub use signal::{IndicatorValues, RuleKind, SignalResult, SignalState};
