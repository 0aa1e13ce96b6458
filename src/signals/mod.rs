//! Signal evaluation: rule thresholds and the evaluation engine.

pub mod engine;
pub mod rules;

pub use engine::*;
pub use rules::*;
