//! Runtime configuration loaded from the environment.
//!
//! `.env.local` and `.env` are read first when present; process environment
//! variables take precedence over both.

use crate::error::{ScanError, ScanResult};
use std::env;
use std::str::FromStr;
use url::Url;

pub const DEFAULT_COINCAP_ENDPOINT: &str = "https://api.coincap.io";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_ASSETS_TO_FETCH: usize = 100;
pub const DEFAULT_SCAN_CONCURRENCY: usize = 8;
/// 00:05 every day: sec min hour day-of-month month day-of-week
pub const DEFAULT_SCAN_SCHEDULE: &str = "0 5 0 * * *";

/// Get the deployment environment name (`production`, `sandbox`, ...)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Load `.env.local` then `.env` into the process environment, if present
pub fn load_dotenv() {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();
}

#[derive(Debug, Clone)]
pub struct CoinCapConfig {
    pub endpoint: Url,
    pub api_key: Option<String>,
    pub exchange: String,
    pub interval: String,
    pub quote_id: String,
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub api_url: Url,
    pub bot_token: String,
    /// Chat that receives alerts and error reports
    pub chat_owner: String,
}

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub assets_to_fetch: usize,
    pub concurrency: usize,
    pub schedule: String,
    pub run_on_start: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            assets_to_fetch: DEFAULT_ASSETS_TO_FETCH,
            concurrency: DEFAULT_SCAN_CONCURRENCY,
            schedule: DEFAULT_SCAN_SCHEDULE.to_string(),
            run_on_start: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub coincap: CoinCapConfig,
    pub telegram: TelegramConfig,
    pub scan: ScanConfig,
}

impl Config {
    /// Build from process environment variables
    pub fn from_env() -> ScanResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> ScanResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &str| {
            get(key).ok_or_else(|| ScanError::Config(format!("{} must be set", key)))
        };

        let coincap = CoinCapConfig {
            endpoint: parse_url(
                "COINCAP_ENDPOINT",
                &get("COINCAP_ENDPOINT").unwrap_or_else(|| DEFAULT_COINCAP_ENDPOINT.to_string()),
            )?,
            api_key: get("COINCAP_API_KEY"),
            exchange: get("CANDLE_EXCHANGE").unwrap_or_else(|| "kucoin".to_string()),
            interval: get("CANDLE_INTERVAL").unwrap_or_else(|| "d1".to_string()),
            quote_id: get("CANDLE_QUOTE_ID").unwrap_or_else(|| "tether".to_string()),
        };

        let telegram = TelegramConfig {
            api_url: parse_url(
                "TELEGRAM_API_URL",
                &get("TELEGRAM_API_URL").unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            )?,
            bot_token: required("TELEGRAM_BOT_TOKEN")?,
            chat_owner: required("TELEGRAM_CHAT_OWNER")?,
        };

        let defaults = ScanConfig::default();
        let scan = ScanConfig {
            assets_to_fetch: parse_or("ASSETS_TO_FETCH", get("ASSETS_TO_FETCH"), defaults.assets_to_fetch)?,
            concurrency: parse_or("SCAN_CONCURRENCY", get("SCAN_CONCURRENCY"), defaults.concurrency)?,
            schedule: get("SCAN_SCHEDULE").unwrap_or(defaults.schedule),
            run_on_start: parse_or("SCAN_ON_START", get("SCAN_ON_START"), defaults.run_on_start)?,
        };

        if scan.concurrency == 0 {
            return Err(ScanError::Config("SCAN_CONCURRENCY must be > 0".to_string()));
        }

        Ok(Self {
            environment: get("ENVIRONMENT").unwrap_or_else(|| "sandbox".to_string()),
            coincap,
            telegram,
            scan,
        })
    }

    pub fn is_production(&self) -> bool {
        crate::logging::is_production(&self.environment)
    }
}

fn parse_url(key: &str, raw: &str) -> ScanResult<Url> {
    Url::parse(raw).map_err(|e| ScanError::Config(format!("{} is not a valid URL '{}': {}", key, raw, e)))
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> ScanResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| ScanError::Config(format!("{} has invalid value '{}': {}", key, raw, e))),
        None => Ok(default),
    }
}
