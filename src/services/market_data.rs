//! Market data provider interface.

use crate::error::ScanResult;
use crate::models::asset::Asset;
use crate::models::indicators::Candle;

#[async_trait::async_trait]
pub trait MarketDataProvider {
    /// Ranked assets, at most `limit` of them
    async fn list_assets(&self, limit: usize) -> ScanResult<Vec<Asset>>;

    /// Daily candles for an asset, ordered oldest to newest.
    ///
    /// An empty vector means the source has no market for the asset.
    async fn get_candles(&self, asset_id: &str) -> ScanResult<Vec<Candle>>;
}
