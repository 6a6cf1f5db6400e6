//! Sentrix Scanner
//!
//! Runs the periodic market scan loop alongside the health/metrics HTTP
//! endpoint. Ctrl-C requests a graceful stop; the current cycle finishes its
//! instrument and exits.

use dotenvy::dotenv;
use sentrix::config::Config;
use sentrix::core::http;
use sentrix::core::scheduler::ScanScheduler;
use sentrix::logging;
use sentrix::metrics::Metrics;
use sentrix::services::telegram::{LogNotifier, NotificationSink, TelegramNotifier};
use sentrix::services::yahoo::YahooProvider;
use sentrix::signals::news::SimulatedNewsFeed;
use sentrix::signals::orchestrator::SignalOrchestrator;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env();
    info!(environment = %sentrix::config::get_environment(), "starting Sentrix scanner");
    info!(
        instruments = ?config.instruments,
        interval = config.scan_interval_seconds,
        "scan configuration"
    );

    let metrics = Arc::new(Metrics::new()?);

    let notifier: Arc<dyn NotificationSink> =
        match (&config.telegram_token, &config.telegram_chat_id) {
            (Some(token), Some(chat_id)) => {
                info!("Telegram notifier configured");
                Arc::new(TelegramNotifier::new(token.clone(), chat_id.clone()))
            }
            _ => {
                warn!("TELEGRAM_TOKEN / TELEGRAM_CHAT_ID not set, logging notifications only");
                Arc::new(LogNotifier)
            }
        };

    let provider = Arc::new(YahooProvider::new());
    let news_feed = Arc::new(SimulatedNewsFeed);

    let mut orchestrator = SignalOrchestrator::new(
        &config,
        provider,
        notifier,
        news_feed,
        Some(metrics.clone()),
    );

    let scheduler = ScanScheduler::new(config.scan_interval_seconds)?;
    let stop = scheduler.stop_flag();

    let http_metrics = metrics.clone();
    let port = config.port;
    tokio::spawn(async move {
        if let Err(e) = http::start_server(port, http_metrics).await {
            error!(error = %e, "HTTP server exited");
        }
    });

    let shutdown_stop = stop.clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            shutdown_stop.store(true, Ordering::Relaxed);
        }
    });

    scheduler.run(&mut orchestrator).await;

    info!("Sentrix scanner stopped");
    Ok(())
}
