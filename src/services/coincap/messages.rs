//! CoinCap wire types. Numeric fields arrive as decimal strings.

use crate::error::{ScanError, ScanResult};
use crate::models::asset::Asset;
use crate::models::indicators::Candle;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AssetsResponse {
    pub data: Option<Vec<AssetData>>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetData {
    pub id: String,
    pub rank: Option<String>,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    pub price_usd: Option<String>,
}

impl AssetData {
    pub fn into_asset(self) -> Asset {
        Asset {
            rank: self.rank.as_deref().and_then(|rank| rank.parse().ok()),
            price_usd: self.price_usd.as_deref().and_then(|price| price.parse().ok()),
            id: self.id,
            symbol: self.symbol,
            name: self.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CandlesResponse {
    pub data: Option<Vec<CandleData>>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandleData {
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
    /// Bucket start, unix milliseconds
    pub period: i64,
}

impl CandleData {
    pub fn into_candle(self) -> ScanResult<Candle> {
        let timestamp = DateTime::<Utc>::from_timestamp_millis(self.period).ok_or_else(|| {
            ScanError::data_unavailable("candles", format!("invalid candle period {}", self.period))
        })?;

        Ok(Candle::new(
            parse_decimal("open", &self.open)?,
            parse_decimal("high", &self.high)?,
            parse_decimal("low", &self.low)?,
            parse_decimal("close", &self.close)?,
            parse_decimal("volume", &self.volume)?,
            timestamp,
        ))
    }
}

fn parse_decimal(field: &str, raw: &str) -> ScanResult<f64> {
    raw.trim()
        .parse()
        .map_err(|e| {
            ScanError::data_unavailable("candles", format!("invalid candle {} '{}': {}", field, raw, e))
        })
}
