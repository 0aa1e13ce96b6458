//! Cron-based scheduler that triggers one scan per tick

use crate::core::scanner::Scanner;
use crate::error::{ScanError, ScanResult};
use chrono::{DateTime, Utc};
use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Scheduler that runs a scan at every upcoming time of a cron schedule.
///
/// Each scan is awaited before the next tick is computed, so runs never overlap.
pub struct ScanScheduler {
    scanner: Arc<Scanner>,
    schedule: Schedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl ScanScheduler {
    /// Create a new scheduler
    ///
    /// # Arguments
    /// * `scanner` - Orchestrator invoked on every tick
    /// * `cron_expr` - Six-field cron expression, evaluated in UTC
    pub fn new(scanner: Arc<Scanner>, cron_expr: &str) -> ScanResult<Self> {
        let schedule = parse_schedule(cron_expr)?;

        info!(cron = %cron_expr, "ScanScheduler: created with cron '{}'", cron_expr);

        Ok(Self {
            scanner,
            schedule,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Next time the scan will fire
    pub fn next_tick(&self) -> Option<DateTime<Utc>> {
        self.schedule.upcoming(Utc).next()
    }

    /// Start the scheduler
    pub async fn start(&self) {
        let scanner = self.scanner.clone();
        let schedule = self.schedule.clone();

        let handle = tokio::spawn(async move {
            info!("ScanScheduler: started, waiting for cron schedule...");

            loop {
                let Some(next_tick) = schedule.upcoming(Utc).next() else {
                    warn!("ScanScheduler: schedule has no upcoming times, stopping");
                    break;
                };

                info!(next_tick = %next_tick, "ScanScheduler: next scan at {}", next_tick);
                let now = Utc::now();
                if next_tick > now {
                    let duration = (next_tick - now).to_std().unwrap_or_default();
                    tokio::time::sleep(duration).await;
                }

                info!("ScanScheduler: cron tick, starting scan");
                let report = scanner.run().await;
                info!(
                    evaluated = report.assets_evaluated,
                    alerts = report.alerts_sent,
                    "ScanScheduler: scan finished"
                );
            }
        });

        *self.handle.write().await = Some(handle);
        info!("ScanScheduler: started successfully");
    }

    /// Stop the scheduler
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("ScanScheduler: stopped");
        }
    }

    /// Check if the scheduler is running
    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

/// Parse a six-field cron expression (`sec min hour day month weekday`)
pub fn parse_schedule(cron_expr: &str) -> ScanResult<Schedule> {
    Schedule::from_str(cron_expr)
        .map_err(|e| ScanError::Config(format!("invalid cron expression '{}': {}", cron_expr, e)))
}
