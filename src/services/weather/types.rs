//! Weather snapshot as delivered by the upstream source.
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Fields every record must carry before it leaves the fetcher or reaches the detector.
pub const REQUIRED_FIELDS: [&str; 3] = ["temperature", "humidity", "wind_speed"];

/// One reading of the upstream weather feed.
///
/// Readings are kept as JSON numbers so the record serializes back exactly as
/// received (`40` stays `40`, not `40.0`). The timestamp is kept in whatever
/// form the upstream used; `observed_at()` reads it when it is RFC 3339.
/// Fields the service does not know about are carried in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeatherRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// °C
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Number>,
    /// %
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<Number>,
    /// km/h
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<Number>,
    /// m
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tide_level: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WeatherRecord {
    /// Observation time, offset preserved. `None` when absent or not an RFC 3339 string.
    pub fn observed_at(&self) -> Option<DateTime<FixedOffset>> {
        self.timestamp
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    }

    pub fn temperature(&self) -> Option<f64> {
        reading(&self.temperature)
    }

    pub fn humidity(&self) -> Option<f64> {
        reading(&self.humidity)
    }

    pub fn wind_speed(&self) -> Option<f64> {
        reading(&self.wind_speed)
    }

    pub fn tide_level(&self) -> Option<f64> {
        reading(&self.tide_level)
    }

    /// Required fields that are absent or not a finite number, in `REQUIRED_FIELDS` order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let present = [
            self.temperature().is_some(),
            self.humidity().is_some(),
            self.wind_speed().is_some(),
        ];

        REQUIRED_FIELDS
            .iter()
            .zip(present)
            .filter(|(_, ok)| !ok)
            .map(|(field, _)| *field)
            .collect()
    }
}

fn reading(value: &Option<Number>) -> Option<f64> {
    value
        .as_ref()
        .and_then(Number::as_f64)
        .filter(|v| v.is_finite())
}
