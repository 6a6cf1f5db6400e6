//! Prometheus metrics

use prometheus::{Counter, Encoder, Gauge, Histogram, HistogramOpts, Opts, Registry, TextEncoder};

pub struct Metrics {
    registry: Registry,
    pub scan_cycles_total: Counter,
    pub instruments_scanned_total: Counter,
    pub signals_total: Counter,
    pub movement_alerts_total: Counter,
    pub news_alerts_total: Counter,
    pub provider_errors_total: Counter,
    pub notifications_failed_total: Counter,
    pub scan_cycle_duration_seconds: Histogram,
    pub http_requests_total: Counter,
    pub http_requests_in_flight: Gauge,
    pub http_request_duration_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let scan_cycles_total = Counter::with_opts(Opts::new(
            "scan_cycles_total",
            "Completed scan cycles",
        ))?;
        let instruments_scanned_total = Counter::with_opts(Opts::new(
            "instruments_scanned_total",
            "Instrument evaluations across all cycles",
        ))?;
        let signals_total = Counter::with_opts(Opts::new(
            "signals_total",
            "Actionable signal verdicts produced",
        ))?;
        let movement_alerts_total = Counter::with_opts(Opts::new(
            "movement_alerts_total",
            "Movement breakout alerts raised",
        ))?;
        let news_alerts_total = Counter::with_opts(Opts::new(
            "news_alerts_total",
            "Economic news alerts raised",
        ))?;
        let provider_errors_total = Counter::with_opts(Opts::new(
            "provider_errors_total",
            "Upstream market-data failures",
        ))?;
        let notifications_failed_total = Counter::with_opts(Opts::new(
            "notifications_failed_total",
            "Notification deliveries that failed",
        ))?;
        let scan_cycle_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "scan_cycle_duration_seconds",
            "Wall-clock duration of a full scan cycle",
        ))?;
        let http_requests_total = Counter::with_opts(Opts::new(
            "http_requests_total",
            "HTTP requests served",
        ))?;
        let http_requests_in_flight = Gauge::with_opts(Opts::new(
            "http_requests_in_flight",
            "HTTP requests currently in flight",
        ))?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency",
        ))?;

        registry.register(Box::new(scan_cycles_total.clone()))?;
        registry.register(Box::new(instruments_scanned_total.clone()))?;
        registry.register(Box::new(signals_total.clone()))?;
        registry.register(Box::new(movement_alerts_total.clone()))?;
        registry.register(Box::new(news_alerts_total.clone()))?;
        registry.register(Box::new(provider_errors_total.clone()))?;
        registry.register(Box::new(notifications_failed_total.clone()))?;
        registry.register(Box::new(scan_cycle_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            scan_cycles_total,
            instruments_scanned_total,
            signals_total,
            movement_alerts_total,
            news_alerts_total,
            provider_errors_total,
            notifications_failed_total,
            scan_cycle_duration_seconds,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
        })
    }

    /// Render the registry in the Prometheus text exposition format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        let encoder = TextEncoder::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| prometheus::Error::Msg(format!("metrics not valid utf-8: {}", e)))
    }
}
