//! Momentum indicators: windowed percentage change

pub mod change;

pub use change::*;
