//! Cron scheduler driving real scans over in-memory collaborators

use crate::test_utils::{
    candles_from_closes, dip_buy_closes, scan_config, CandleFixture, MockMarketData, RecordingNotifier,
};
use dipscan::core::scanner::Scanner;
use dipscan::core::scheduler::ScanScheduler;
use std::sync::Arc;
use std::time::Duration;

fn scanner(notifier: Arc<RecordingNotifier>) -> Arc<Scanner> {
    let market_data = Arc::new(
        MockMarketData::new()
            .with_asset("bitcoin", CandleFixture::Series(candles_from_closes(&dip_buy_closes()))),
    );
    Arc::new(Scanner::new(market_data, notifier, "owner-chat", scan_config(10)))
}

#[tokio::test]
async fn start_and_stop_toggle_running() {
    let notifier = Arc::new(RecordingNotifier::new());
    // Jan 1st only, so no tick fires during the test
    let scheduler = ScanScheduler::new(scanner(notifier.clone()), "0 0 0 1 1 *").unwrap();
    assert!(!scheduler.is_running().await);
    assert!(scheduler.next_tick().is_some());

    scheduler.start().await;
    assert!(scheduler.is_running().await);

    scheduler.stop().await;
    assert!(!scheduler.is_running().await);
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn tick_runs_a_scan() {
    let notifier = Arc::new(RecordingNotifier::new());
    let scheduler = ScanScheduler::new(scanner(notifier.clone()), "* * * * * *").unwrap();

    scheduler.start().await;
    for _ in 0..60 {
        if !notifier.messages().is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    scheduler.stop().await;

    assert!(!notifier.texts_containing("dipBuyer triggered bitcoin").is_empty());
    assert!(!scheduler.is_running().await);
}
