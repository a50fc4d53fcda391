//! Weather source interface used by the handlers.
use async_trait::async_trait;
use thiserror::Error;

use super::types::WeatherRecord;

/// Result type for weather fetches.
pub type WeatherResult<T> = Result<T, WeatherError>;

/// Upstream failures.
///
/// Note:
/// - Kept independent from `AppError`; the HTTP layer decides the status code.
/// - Nothing here is retried. A failed fetch is reported once to the caller.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("upstream weather source unavailable: {0}")]
    UpstreamUnavailable(String),
    #[error("malformed upstream weather data: {0}")]
    MalformedUpstreamData(String),
}

/// Produces the current weather snapshot.
///
/// Implementations hold no per-request state and are shared across requests
/// behind an `Arc`.
#[async_trait]
pub trait WeatherSource: Send + Sync + 'static {
    // Returns the source name (for logging).
    fn source_name(&self) -> &'static str;

    // One call, one upstream round trip. The returned record is always complete
    // (every required field present); otherwise `MalformedUpstreamData`.
    async fn fetch(&self) -> WeatherResult<WeatherRecord>;
}

/// Decodes an upstream body into a complete record.
pub fn parse_record(body: &[u8]) -> WeatherResult<WeatherRecord> {
    let record: WeatherRecord = serde_json::from_slice(body)
        .map_err(|e| WeatherError::MalformedUpstreamData(e.to_string()))?;

    let missing = record.missing_required();
    if !missing.is_empty() {
        return Err(WeatherError::MalformedUpstreamData(format!(
            "missing required fields: {}",
            missing.join(", ")
        )));
    }

    Ok(record)
}
