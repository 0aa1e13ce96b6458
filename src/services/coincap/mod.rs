//! CoinCap v2 REST market data source

pub mod messages;
pub mod provider;

pub use provider::CoinCapMarketDataProvider;
