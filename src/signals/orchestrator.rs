//! Signal orchestration
//!
//! One scan cycle walks the configured instruments sequentially: fetch
//! history and price, compute trend and RSI, detect levels (cached),
//! classify, run the auxiliary filters, notify. A failing instrument is
//! logged and skipped; the cycle itself never aborts. The stop flag is
//! checked between instruments.

use crate::config::{self, Config};
use crate::errors::ProviderError;
use crate::indicators::momentum::rsi::rsi_default;
use crate::indicators::trend::detect_trend;
use crate::indicators::volatility::atr::{historical_volatility, DEFAULT_HV_PERIOD};
use crate::indicators::volatility::{classify_volatility, VolatilityLevel};
use crate::levels::cache::LevelCache;
use crate::levels::detector::SupportResistanceDetector;
use crate::metrics::Metrics;
use crate::models::market::{valid_closes, AssetClass, MarketContext};
use crate::models::signal::{MovementAlert, SignalVerdict};
use crate::services::market_data::MarketDataProvider;
use crate::services::telegram::NotificationSink;
use crate::signals::classifier::MarketStructureClassifier;
use crate::signals::correlation::{self, Exposure};
use crate::signals::movement::MovementDetector;
use crate::signals::news::{NewsAlert, NewsFeed, NewsScanner};
use crate::signals::risk::plan_trade;
use crate::signals::sessions::{self, MarketSession};
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Counters for one completed cycle, for logging and tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CycleSummary {
    pub scanned: usize,
    pub signals: usize,
    pub movement_alerts: usize,
    pub news_alerts: usize,
    pub skipped_by_session: usize,
    pub skipped_by_correlation: usize,
    pub provider_errors: usize,
}

pub struct SignalOrchestrator {
    instruments: Vec<String>,
    pause_between: Duration,
    provider: Arc<dyn MarketDataProvider>,
    notifier: Arc<dyn NotificationSink>,
    news_feed: Arc<dyn NewsFeed + Send + Sync>,
    detector: SupportResistanceDetector,
    classifier: MarketStructureClassifier,
    cache: LevelCache,
    movements: MovementDetector,
    news: NewsScanner,
    exposures: Vec<Exposure>,
    metrics: Option<Arc<Metrics>>,
}

impl SignalOrchestrator {
    pub fn new(
        config: &Config,
        provider: Arc<dyn MarketDataProvider>,
        notifier: Arc<dyn NotificationSink>,
        news_feed: Arc<dyn NewsFeed + Send + Sync>,
        metrics: Option<Arc<Metrics>>,
    ) -> Self {
        Self {
            instruments: config.instruments.clone(),
            pause_between: Duration::from_millis(config.pause_between_instruments_ms),
            provider,
            notifier,
            news_feed,
            detector: SupportResistanceDetector::new(config.tuning.detector.clone()),
            classifier: MarketStructureClassifier::new(config.tuning.proximity.clone()),
            cache: LevelCache::new(Duration::from_secs(config.level_cache_ttl_seconds)),
            movements: MovementDetector::new(config.tuning.movement.clone()),
            news: NewsScanner::default(),
            exposures: Vec::new(),
            metrics,
        }
    }

    /// Run one full scan cycle over all configured instruments.
    pub async fn run_cycle(&mut self, stop: &AtomicBool) -> CycleSummary {
        let started = Instant::now();
        let now = Utc::now();
        let session = sessions::current_session(now);
        let mut summary = CycleSummary::default();

        info!(
            session = session.map(|s| s.label()).unwrap_or("off-hours"),
            instruments = self.instruments.len(),
            "starting scan cycle"
        );

        let feed = self.news_feed.clone();
        let news_alerts = self.news.scan(feed.as_ref(), now);
        for alert in &news_alerts {
            summary.news_alerts += 1;
            if let Some(metrics) = &self.metrics {
                metrics.news_alerts_total.inc();
            }
            self.notify(&format_news(alert)).await;
        }

        let instruments = self.instruments.clone();
        for symbol in &instruments {
            if stop.load(Ordering::Relaxed) {
                info!("stop requested, aborting remaining instruments this cycle");
                break;
            }

            match self.scan_instrument(symbol, session, &mut summary).await {
                Ok(_) => summary.scanned += 1,
                Err(e) => {
                    summary.provider_errors += 1;
                    if let Some(metrics) = &self.metrics {
                        metrics.provider_errors_total.inc();
                    }
                    warn!(symbol = %symbol, error = %e, "skipping instrument this cycle");
                }
            }

            if let Some(metrics) = &self.metrics {
                metrics.instruments_scanned_total.inc();
            }
            sleep(self.pause_between).await;
        }

        if let Some(metrics) = &self.metrics {
            metrics.scan_cycles_total.inc();
            metrics
                .scan_cycle_duration_seconds
                .observe(started.elapsed().as_secs_f64());
        }

        info!(
            scanned = summary.scanned,
            signals = summary.signals,
            movements = summary.movement_alerts,
            news = summary.news_alerts,
            errors = summary.provider_errors,
            "scan cycle finished"
        );
        summary
    }

    async fn scan_instrument(
        &mut self,
        symbol: &str,
        session: Option<MarketSession>,
        summary: &mut CycleSummary,
    ) -> Result<SignalVerdict, ProviderError> {
        let indicator_candles = self
            .provider
            .fetch_ohlc(symbol, config::INDICATOR_RANGE, config::INDICATOR_INTERVAL)
            .await?;
        let closes = valid_closes(&indicator_candles);

        let price = match closes.last() {
            Some(last) => *last,
            None => self.provider.fetch_price(symbol).await?,
        };

        for alert in self.movements.record(symbol, price, Utc::now()) {
            summary.movement_alerts += 1;
            if let Some(metrics) = &self.metrics {
                metrics.movement_alerts_total.inc();
            }
            self.notify(&format_movement(&alert)).await;
        }

        // Thin history reads as a neutral oscillator.
        let rsi = rsi_default(&closes).unwrap_or(50.0);
        let trend = detect_trend(&closes);

        let levels = match self.cache.get(symbol) {
            Some(levels) => levels,
            None => {
                let sr_candles = self
                    .provider
                    .fetch_ohlc(symbol, config::SR_RANGE, config::SR_INTERVAL)
                    .await?;
                let levels = self.detector.detect(symbol, &sr_candles, Some(price));
                self.cache.insert(symbol, levels.clone());
                levels
            }
        };

        let ctx = MarketContext {
            symbol: symbol.to_string(),
            price,
            trend,
            rsi,
        };
        let verdict = self.classifier.classify(&ctx, &levels);
        debug!(
            symbol = %symbol,
            direction = ?verdict.direction,
            confidence = ?verdict.confidence,
            zone = ?verdict.zone,
            rationale = %verdict.rationale,
            "classified"
        );

        if !verdict.is_actionable() {
            return Ok(verdict);
        }

        if !sessions::session_allows(session, symbol) {
            summary.skipped_by_session += 1;
            debug!(symbol = %symbol, "signal suppressed outside its session window");
            return Ok(verdict);
        }

        if let Some(reason) = correlation::should_skip(symbol, verdict.direction, &self.exposures) {
            summary.skipped_by_correlation += 1;
            info!(symbol = %symbol, reason = %reason, "signal suppressed by correlation exposure");
            return Ok(verdict);
        }

        let volatility = historical_volatility(&closes, DEFAULT_HV_PERIOD)
            .map(|hv| classify_volatility(AssetClass::of(symbol), hv))
            .unwrap_or(VolatilityLevel::Medium);
        let adjustment = sessions::session_adjustment(session);
        let plan = plan_trade(verdict.direction, price, volatility, adjustment);

        summary.signals += 1;
        if let Some(metrics) = &self.metrics {
            metrics.signals_total.inc();
        }
        self.notify(&format_verdict(&verdict, volatility, plan.as_ref()))
            .await;

        self.exposures.retain(|e| e.symbol != symbol);
        self.exposures.push(Exposure {
            symbol: symbol.to_string(),
            direction: verdict.direction,
        });

        Ok(verdict)
    }

    async fn notify(&self, text: &str) {
        if let Err(e) = self.notifier.send(text).await {
            if let Some(metrics) = &self.metrics {
                metrics.notifications_failed_total.inc();
            }
            warn!(error = %e, "notification delivery failed");
        }
    }

    pub fn exposures(&self) -> &[Exposure] {
        &self.exposures
    }
}

fn format_verdict(
    verdict: &SignalVerdict,
    volatility: VolatilityLevel,
    plan: Option<&crate::signals::risk::TradePlan>,
) -> String {
    let mut text = format!(
        "{:?} {} ({:?} confidence)\n{}\nprice {:.5} | zone {:?} | volatility {}",
        verdict.direction,
        verdict.symbol,
        verdict.confidence,
        verdict.rationale,
        verdict.price,
        verdict.zone,
        volatility.label(),
    );
    if let Some(plan) = plan {
        text.push_str(&format!(
            "\nSL {:.5} | TP1 {:.5} | TP2 {:.5} (simulated)",
            plan.stop_loss, plan.take_profit_1, plan.take_profit_2
        ));
    }
    text
}

fn format_movement(alert: &MovementAlert) -> String {
    format!(
        "{} moved {:+.2}% over {} ({:?})\n{:.5} -> {:.5}",
        alert.symbol,
        alert.change_pct,
        alert.window.label(),
        alert.magnitude,
        alert.start_price,
        alert.end_price,
    )
}

fn format_news(alert: &NewsAlert) -> String {
    format!(
        "{} ({}) released: {:?} ({:?} impact)\naffects {}",
        alert.name,
        alert.country,
        alert.surprise,
        alert.impact,
        alert.affected.join(", "),
    )
}
