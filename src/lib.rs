//! dipscan: daily dip-buy / dip-short scanner for ranked crypto assets.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;

pub use error::{ScanError, ScanResult};
