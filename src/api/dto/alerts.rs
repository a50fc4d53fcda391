/*
 * Responsibility
 * - response body of GET /api/alerts
 */
use serde::Serialize;

use crate::services::{anomaly::AnomalyResult, weather::WeatherRecord};

/// `{"alert": bool, "severity": ..., "reasons": [...], "data": {...}}`
#[derive(Debug, Serialize)]
pub struct AlertResponse {
    #[serde(flatten)]
    pub alert: AnomalyResult,
    pub data: WeatherRecord,
}
