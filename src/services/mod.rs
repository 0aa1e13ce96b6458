//! External collaborators: market data source and notification delivery.

pub mod coincap;
pub mod market_data;
pub mod notifier;
pub mod telegram;

pub use coincap::CoinCapMarketDataProvider;
pub use market_data::MarketDataProvider;
pub use notifier::{truncate_message, Notifier, MAX_MESSAGE_CHARS};
pub use telegram::TelegramNotifier;
