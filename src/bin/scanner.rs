//! dipscan scanner
//!
//! Runs the dip-buy / dip-short scan on a cron schedule and sends alerts to
//! the configured Telegram chat.

use dipscan::config::{self, Config};
use dipscan::core::scanner::Scanner;
use dipscan::core::scheduler::ScanScheduler;
use dipscan::logging;
use dipscan::services::coincap::CoinCapMarketDataProvider;
use dipscan::services::market_data::MarketDataProvider;
use dipscan::services::notifier::Notifier;
use dipscan::services::telegram::TelegramNotifier;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::load_dotenv();
    logging::init_logging(&config::get_environment());

    let config = Config::from_env().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        e
    })?;

    info!("Starting dipscan scanner");
    info!(environment = %config.environment, "Environment");
    info!(
        assets = config.scan.assets_to_fetch,
        concurrency = config.scan.concurrency,
        schedule = %config.scan.schedule,
        exchange = %config.coincap.exchange,
        interval = %config.coincap.interval,
        "Scan settings"
    );

    let market_data: Arc<dyn MarketDataProvider + Send + Sync> =
        Arc::new(CoinCapMarketDataProvider::new(config.coincap.clone()));
    let notifier: Arc<dyn Notifier + Send + Sync> =
        Arc::new(TelegramNotifier::new(&config.telegram)?);

    let scanner = Arc::new(Scanner::new(
        market_data,
        notifier.clone(),
        config.telegram.chat_owner.clone(),
        config.scan.clone(),
    ));

    let scheduler = ScanScheduler::new(scanner.clone(), &config.scan.schedule)?;

    info!("Running 🚀");
    if let Err(e) = notifier.send(&config.telegram.chat_owner, "Running 🚀").await {
        error!(error = %e, "Failed to send startup notice");
    }

    if config.scan.run_on_start {
        info!("SCAN_ON_START set, running initial scan");
        scanner.run().await;
    }

    scheduler.start().await;
    if let Some(next_tick) = scheduler.next_tick() {
        info!(next_tick = %next_tick, "First scheduled scan at {}", next_tick);
    }

    info!("Scanner started, waiting for shutdown signal...");
    signal::ctrl_c().await?;
    info!("Shutting down scanner...");
    scheduler.stop().await;
    info!("Scanner stopped");

    Ok(())
}
