//! Scan orchestrator: fan out over ranked assets, evaluate both rule sets,
//! alert on triggers.
//!
//! Every asset runs in its own task. A fetch, evaluation or notification
//! failure is contained to that asset and never aborts the scan.

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::models::asset::Asset;
use crate::models::signal::{SignalResult, SignalState};
use crate::services::market_data::MarketDataProvider;
use crate::services::notifier::{truncate_message, Notifier, MAX_MESSAGE_CHARS};
use crate::signals::engine::SignalEngine;
use crate::signals::rules::MIN_HISTORY;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// Counters for one completed scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub assets_listed: usize,
    pub assets_evaluated: usize,
    pub assets_skipped: usize,
    pub assets_failed: usize,
    pub signals_triggered: usize,
    pub alerts_sent: usize,
}

impl ScanReport {
    fn record(&mut self, outcome: AssetOutcome) {
        match outcome {
            AssetOutcome::Evaluated {
                triggered,
                alerts_sent,
            } => {
                self.assets_evaluated += 1;
                self.signals_triggered += triggered;
                self.alerts_sent += alerts_sent;
            }
            AssetOutcome::Skipped => self.assets_skipped += 1,
            AssetOutcome::Failed => self.assets_failed += 1,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum AssetOutcome {
    Evaluated { triggered: usize, alerts_sent: usize },
    Skipped,
    Failed,
}

/// Shared handles each per-asset task works with
#[derive(Clone)]
struct AssetScan {
    market_data: Arc<dyn MarketDataProvider + Send + Sync>,
    notifier: Arc<dyn Notifier + Send + Sync>,
    recipient: Arc<str>,
}

impl AssetScan {
    async fn scan(&self, asset: Asset) -> AssetOutcome {
        let candles = match self.market_data.get_candles(&asset.id).await {
            Ok(candles) if candles.is_empty() => {
                warn!(asset = %asset.id, "Scanner: candles not defined for {}, skipping", asset.id);
                return AssetOutcome::Skipped;
            }
            Ok(candles) => candles,
            Err(e) => {
                warn!(asset = %asset.id, error = %e, "Scanner: candle fetch failed for {}, skipping", asset.id);
                self.notify(&format!("Error during fetch getCandles {}: {}", asset.id, e))
                    .await;
                return AssetOutcome::Skipped;
            }
        };

        let results = match SignalEngine::evaluate_all(&asset.id, &candles) {
            Ok(results) => results,
            Err(e) => {
                error!(asset = %asset.id, error = %e, "Scanner: signal evaluation failed for {}", asset.id);
                self.notify(&format!("Error during signal check {}: {}", asset.id, e))
                    .await;
                return AssetOutcome::Failed;
            }
        };

        let mut triggered = 0;
        let mut alerts_sent = 0;
        for result in &results {
            log_result(&asset, result, candles.len());
            if result.is_triggered() {
                triggered += 1;
                if self.notify(&result.alert_message()).await {
                    alerts_sent += 1;
                }
            }
        }

        AssetOutcome::Evaluated {
            triggered,
            alerts_sent,
        }
    }

    /// Send to the configured recipient; delivery failures are logged only
    async fn notify(&self, text: &str) -> bool {
        let text = truncate_message(text, MAX_MESSAGE_CHARS);
        match self.notifier.send(&self.recipient, text).await {
            Ok(()) => true,
            Err(e) => {
                error!(recipient = %self.recipient, error = %e, "Scanner: notification failed");
                false
            }
        }
    }
}

fn log_result(asset: &Asset, result: &SignalResult, available: usize) {
    match result.state {
        SignalState::InsufficientData => {
            let reason = ScanError::InsufficientHistory {
                required: MIN_HISTORY,
                available,
            };
            debug!(
                asset = %asset.id,
                rule = %result.rule,
                reason = %reason,
                "Scanner: {} {} not classified",
                asset.symbol,
                result.rule
            );
        }
        SignalState::Triggered => info!(
            asset = %asset.id,
            rule = %result.rule,
            state = ?result.state,
            values = ?result.values,
            "Scanner: {} {} triggered",
            asset.symbol,
            result.rule
        ),
        SignalState::NotTriggered => info!(
            asset = %asset.id,
            rule = %result.rule,
            state = ?result.state,
            values = ?result.values,
            "Scanner: {} {} state {:?}",
            asset.symbol,
            result.rule,
            result.state
        ),
    }
}

pub struct Scanner {
    scan: AssetScan,
    config: ScanConfig,
}

impl Scanner {
    pub fn new(
        market_data: Arc<dyn MarketDataProvider + Send + Sync>,
        notifier: Arc<dyn Notifier + Send + Sync>,
        recipient: impl Into<String>,
        config: ScanConfig,
    ) -> Self {
        let recipient: String = recipient.into();
        Self {
            scan: AssetScan {
                market_data,
                notifier,
                recipient: Arc::from(recipient),
            },
            config,
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scheduled entry point, scanning the configured number of assets
    pub async fn run(&self) -> ScanReport {
        self.run_scan(self.config.assets_to_fetch).await
    }

    /// Scan up to `asset_count` ranked assets
    pub async fn run_scan(&self, asset_count: usize) -> ScanReport {
        let start = Instant::now();
        let mut report = ScanReport::default();

        let mut assets = match self.scan.market_data.list_assets(asset_count).await {
            Ok(assets) => assets,
            Err(e) => {
                error!(error = %e, "Scanner: failed to list assets, scan aborted");
                self.scan
                    .notify(&format!("Error during fetch getAssets: {}", e))
                    .await;
                return report;
            }
        };
        assets.truncate(asset_count);
        report.assets_listed = assets.len();

        info!(
            assets = assets.len(),
            concurrency = self.config.concurrency,
            "Scanner: scanning {} assets",
            assets.len()
        );

        let permits = Arc::new(Semaphore::new(self.config.concurrency.max(1)));
        let mut tasks = JoinSet::new();
        for asset in assets {
            let scan = self.scan.clone();
            let permits = permits.clone();
            tasks.spawn(async move {
                let _permit = permits.acquire_owned().await.ok();
                scan.scan(asset).await
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => report.record(outcome),
                Err(e) => {
                    error!(error = %e, "Scanner: asset task panicked");
                    report.assets_failed += 1;
                }
            }
        }

        info!(
            listed = report.assets_listed,
            evaluated = report.assets_evaluated,
            skipped = report.assets_skipped,
            failed = report.assets_failed,
            triggered = report.signals_triggered,
            alerts = report.alerts_sent,
            duration_ms = start.elapsed().as_millis() as u64,
            "Scanner: scan complete"
        );

        report
    }
}
