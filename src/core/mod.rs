//! Core application primitives (orchestrator, scheduler)

pub mod scanner;
pub mod scheduler;

pub use scanner::*;
pub use scheduler::*;
