/*
 * Responsibility
 * - shared context attached to the Router (AppState)
 *   - weather: upstream source, detector: anomaly rules
 * - built once at startup, cheap to Clone (Arc inside), never mutated
 */
use std::sync::Arc;

use crate::services::{anomaly::AnomalyDetector, weather::WeatherSource};

#[derive(Clone)]
pub struct AppState {
    pub weather: Arc<dyn WeatherSource>,
    pub detector: Arc<AnomalyDetector>,
}

impl AppState {
    pub fn new(weather: Arc<dyn WeatherSource>, detector: Arc<AnomalyDetector>) -> Self {
        Self { weather, detector }
    }
}
