//! Error kinds shared across the scanner

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    /// Asset list or candle fetch failed, or came back without data
    #[error("data unavailable for {resource}: {reason}")]
    DataUnavailable { resource: String, reason: String },

    /// Series is shorter than the longest reference window
    #[error("insufficient history: need {required} samples, have {available}")]
    InsufficientHistory { required: usize, available: usize },

    /// Malformed input reached the indicator math
    #[error("computation error: {0}")]
    Computation(String),

    #[error("notification failed: {0}")]
    Notification(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl ScanError {
    pub fn data_unavailable(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            resource: resource.into(),
            reason: reason.into(),
        }
    }
}

pub type ScanResult<T> = std::result::Result<T, ScanError>;
