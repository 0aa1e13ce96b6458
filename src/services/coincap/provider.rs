//! CoinCap market data provider implementation

use crate::config::CoinCapConfig;
use crate::error::{ScanError, ScanResult};
use crate::models::asset::Asset;
use crate::models::indicators::Candle;
use crate::services::market_data::MarketDataProvider;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::messages::{AssetsResponse, CandlesResponse};

pub struct CoinCapMarketDataProvider {
    config: CoinCapConfig,
    client: Client,
}

impl CoinCapMarketDataProvider {
    pub fn new(config: CoinCapConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: CoinCapConfig, client: Client) -> Self {
        Self { config, client }
    }

    fn url(&self, path: &str) -> ScanResult<Url> {
        self.config
            .endpoint
            .join(path)
            .map_err(|e| ScanError::Config(format!("invalid CoinCap path '{}': {}", path, e)))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, resource: &str, request: RequestBuilder) -> ScanResult<T> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::data_unavailable(
                resource,
                format!("CoinCap responded with status {}", status),
            ));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ScanError::data_unavailable(resource, format!("invalid CoinCap response: {}", e)))
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for CoinCapMarketDataProvider {
    async fn list_assets(&self, limit: usize) -> ScanResult<Vec<Asset>> {
        let request = self
            .client
            .get(self.url("v2/assets")?)
            .query(&[("limit", limit.to_string())]);

        let response: AssetsResponse = self.fetch("assets", request).await?;
        let assets = response.data.ok_or_else(|| {
            ScanError::data_unavailable(
                "assets",
                response.error.unwrap_or_else(|| "response has no data".to_string()),
            )
        })?;

        debug!(count = assets.len(), limit = limit, "CoinCap: listed {} assets", assets.len());
        Ok(assets.into_iter().map(|asset| asset.into_asset()).collect())
    }

    async fn get_candles(&self, asset_id: &str) -> ScanResult<Vec<Candle>> {
        let request = self.client.get(self.url("v2/candles")?).query(&[
            ("exchange", self.config.exchange.as_str()),
            ("interval", self.config.interval.as_str()),
            ("baseId", asset_id),
            ("quoteId", self.config.quote_id.as_str()),
        ]);

        let resource = format!("candles/{}", asset_id);
        let response: CandlesResponse = self.fetch(&resource, request).await?;
        let data = response.data.ok_or_else(|| {
            ScanError::data_unavailable(
                resource.as_str(),
                response.error.unwrap_or_else(|| "response has no data".to_string()),
            )
        })?;

        let mut candles = data
            .into_iter()
            .map(|candle| candle.into_candle())
            .collect::<ScanResult<Vec<Candle>>>()?;
        candles.sort_by_key(|candle| candle.timestamp);

        debug!(
            asset = %asset_id,
            count = candles.len(),
            "CoinCap: fetched {} candles for {}",
            candles.len(),
            asset_id
        );
        Ok(candles)
    }
}
