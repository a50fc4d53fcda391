use crate::services::weather::WeatherRecord;

use super::types::{AnomalyError, AnomalyResult, Reason, Severity};

const HUMIDITY_MIN: f64 = 0.0;
const HUMIDITY_MAX: f64 = 100.0;

/// Rule thresholds. Units match `WeatherRecord` (°C, km/h, m).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub wind_warning: f64,
    pub wind_critical: f64,
    pub tide_warning: f64,
    pub tide_critical: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            temperature_min: -40.0,
            temperature_max: 50.0,
            wind_warning: 50.0,
            wind_critical: 90.0,
            tide_warning: 2.5,
            tide_critical: 3.0,
        }
    }
}

impl Thresholds {
    /// Returns the name of the first setting that breaks ordering.
    pub fn validate(&self) -> Result<(), &'static str> {
        let values = [
            ("ANOMALY_TEMPERATURE_MIN", self.temperature_min),
            ("ANOMALY_TEMPERATURE_MAX", self.temperature_max),
            ("ANOMALY_WIND_WARNING", self.wind_warning),
            ("ANOMALY_WIND_CRITICAL", self.wind_critical),
            ("ANOMALY_TIDE_WARNING", self.tide_warning),
            ("ANOMALY_TIDE_CRITICAL", self.tide_critical),
        ];
        if let Some((key, _)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(*key);
        }

        if self.temperature_min >= self.temperature_max {
            return Err("ANOMALY_TEMPERATURE_MIN");
        }
        if self.wind_warning > self.wind_critical {
            return Err("ANOMALY_WIND_WARNING");
        }
        if self.tide_warning > self.tide_critical {
            return Err("ANOMALY_TIDE_WARNING");
        }
        Ok(())
    }
}

/// Stateless evaluator; one instance is shared by all requests.
#[derive(Debug, Clone, Default)]
pub struct AnomalyDetector {
    thresholds: Thresholds,
}

impl AnomalyDetector {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Classifies one record.
    ///
    /// Fails only when a required reading is missing; normal data yields
    /// `alert: false`.
    pub fn evaluate(&self, record: &WeatherRecord) -> Result<AnomalyResult, AnomalyError> {
        let (Some(temperature), Some(humidity), Some(wind_speed)) =
            (record.temperature(), record.humidity(), record.wind_speed())
        else {
            return Err(AnomalyError::IncompleteRecord {
                missing: record.missing_required(),
            });
        };

        let t = &self.thresholds;
        let mut reasons = Vec::new();

        if temperature < t.temperature_min {
            reasons.push(Reason {
                field: "temperature",
                value: temperature,
                severity: Severity::Critical,
                message: format!(
                    "temperature {temperature} °C is below the plausible minimum of {} °C",
                    t.temperature_min
                ),
            });
        } else if temperature > t.temperature_max {
            reasons.push(Reason {
                field: "temperature",
                value: temperature,
                severity: Severity::Critical,
                message: format!(
                    "temperature {temperature} °C is above the plausible maximum of {} °C",
                    t.temperature_max
                ),
            });
        }

        if !(HUMIDITY_MIN..=HUMIDITY_MAX).contains(&humidity) {
            reasons.push(Reason {
                field: "humidity",
                value: humidity,
                severity: Severity::Critical,
                message: format!("humidity {humidity} % is outside 0-100 %"),
            });
        }

        if let Some(severity) = level(wind_speed, t.wind_warning, t.wind_critical) {
            reasons.push(Reason {
                field: "wind_speed",
                value: wind_speed,
                severity,
                message: format!("high winds: {wind_speed} km/h"),
            });
        }

        if let Some(tide) = record.tide_level()
            && let Some(severity) = level(tide, t.tide_warning, t.tide_critical)
        {
            reasons.push(Reason {
                field: "tide_level",
                value: tide,
                severity,
                message: format!("elevated tide level: {tide} m"),
            });
        }

        Ok(AnomalyResult::from_reasons(reasons))
    }
}

fn level(value: f64, warning: f64, critical: f64) -> Option<Severity> {
    if value >= critical {
        Some(Severity::Critical)
    } else if value >= warning {
        Some(Severity::Warning)
    } else {
        None
    }
}
