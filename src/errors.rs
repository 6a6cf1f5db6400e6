use thiserror::Error;

/// Reasons level detection falls back to the static table.
///
/// These never cross the detector's public boundary; `detect` collapses them
/// into the fallback level set so the scan loop keeps running.
#[derive(Error, Debug)]
pub enum DetectError {
    #[error("not enough bars: {got} < {min}")]
    NotEnoughBars { got: usize, min: usize },

    #[error("too few valid {side} samples: {got} < {min}")]
    SparseSeries {
        side: &'static str,
        got: usize,
        min: usize,
    },

    #[error("no usable reference price")]
    NoReferencePrice,

    #[error("degenerate price data (non-positive or non-finite values)")]
    DegenerateData,
}

/// Upstream market-data failures. Callers skip the instrument for the cycle.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Notification delivery failures. Logged and counted, never fatal.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("notification endpoint returned status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("notifier not configured: {0}")]
    NotConfigured(&'static str),
}
