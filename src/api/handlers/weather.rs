/*
 * Responsibility
 * - GET /api/weather
 * - one upstream fetch per request, record returned as received
 */
use axum::{Json, extract::State};

use crate::{error::AppError, services::weather::WeatherRecord, state::AppState};

pub async fn get_weather(State(state): State<AppState>) -> Result<Json<WeatherRecord>, AppError> {
    let record = state.weather.fetch().await?;
    Ok(Json(record))
}
