use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by the stock API. None of these should crash the
/// caller: a failed fetch means no notification this cycle, and the next
/// scheduled tick is the retry.
#[derive(Debug, Error)]
pub enum StockApiError {
    #[error("request to {path} failed: {source}")]
    Transport {
        path: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("upstream returned {status} for {path}")]
    Upstream {
        path: &'static str,
        status: StatusCode,
    },

    #[error("malformed payload from {path}: {source}")]
    Decode {
        path: &'static str,
        #[source]
        source: reqwest::Error,
    },
}
