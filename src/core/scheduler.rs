//! Cron-based scan scheduling
//!
//! Drives the orchestrator on a fixed cadence. Ticks run the cycle inline;
//! the cycle itself checks the stop flag between instruments, so shutdown is
//! responsive even mid-cycle.

use crate::signals::orchestrator::SignalOrchestrator;
use cron::Schedule;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub struct ScanScheduler {
    schedule: Schedule,
    stop: Arc<AtomicBool>,
}

impl ScanScheduler {
    /// Create a scheduler firing every `interval_seconds`.
    pub fn new(interval_seconds: u64) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if interval_seconds == 0 {
            return Err("scheduler disabled: interval_seconds is 0".into());
        }

        // Cron format: second minute hour day month weekday
        let cron_expr = if interval_seconds >= 60 {
            let minutes = interval_seconds / 60;
            format!("0 */{} * * * *", minutes)
        } else {
            format!("*/{} * * * * *", interval_seconds)
        };

        let schedule = Schedule::from_str(&cron_expr).map_err(|e| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid cron expression '{}': {}", cron_expr, e),
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;

        info!(
            interval = interval_seconds,
            cron = %cron_expr,
            "scan scheduler created"
        );

        Ok(Self {
            schedule,
            stop: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Flag shared with shutdown handlers; set it to end the run loop.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        self.stop.clone()
    }

    /// Run scan cycles until the stop flag is set.
    pub async fn run(&self, orchestrator: &mut SignalOrchestrator) {
        info!("scan scheduler started, waiting for first tick");

        while !self.stop.load(Ordering::Relaxed) {
            let mut upcoming = self.schedule.upcoming(chrono::Utc);
            if let Some(next_tick) = upcoming.next() {
                let now = chrono::Utc::now();
                if next_tick > now {
                    let duration = (next_tick - now).to_std().unwrap_or_default();
                    tokio::time::sleep(duration).await;
                }
            } else {
                tokio::time::sleep(tokio::time::Duration::from_secs(60)).await;
                continue;
            }

            if self.stop.load(Ordering::Relaxed) {
                break;
            }
            orchestrator.run_cycle(&self.stop).await;
        }

        info!("scan scheduler stopped");
    }
}
