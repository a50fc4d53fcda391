/*
 * Responsibility
 * - ApiError shared by every handler
 * - IntoResponse (HTTP status / JSON error body)
 * - translate WeatherError / AnomalyError into HTTP semantics
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::{anomaly::AnomalyError, weather::WeatherError};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    ServiceUnavailable { code: &'static str, message: String },
    #[error("{message}")]
    BadGateway { code: &'static str, message: String },
    #[error("{message}")]
    Unprocessable { code: &'static str, message: String },
    #[error("not found: {resource}")]
    NotFound { resource: &'static str },
    #[error("request timed out")]
    RequestTimeout,
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            AppError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match self {
            AppError::ServiceUnavailable { code, message }
            | AppError::BadGateway { code, message }
            | AppError::Unprocessable { code, message } => (code, message),
            AppError::NotFound { resource } => ("NOT_FOUND", format!("{resource} not found.")),
            AppError::RequestTimeout => ("REQUEST_TIMEOUT", "request timed out".into()),
            AppError::Internal => ("INTERNAL_SERVER_ERROR", "internal server error".into()),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<WeatherError> for AppError {
    fn from(e: WeatherError) -> Self {
        tracing::warn!(error = %e, "weather fetch failed");
        match e {
            WeatherError::UpstreamUnavailable(_) => AppError::ServiceUnavailable {
                code: "UPSTREAM_UNAVAILABLE",
                message: "weather source is unavailable".into(),
            },
            // The upstream answered, but with something we cannot use.
            WeatherError::MalformedUpstreamData(detail) => AppError::BadGateway {
                code: "MALFORMED_UPSTREAM_DATA",
                message: format!("weather source returned unusable data: {detail}"),
            },
        }
    }
}

impl From<AnomalyError> for AppError {
    fn from(e: AnomalyError) -> Self {
        tracing::warn!(error = %e, "anomaly evaluation rejected record");
        AppError::Unprocessable {
            code: "INCOMPLETE_RECORD",
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_failures_map_to_gateway_statuses() {
        let unavailable: AppError = WeatherError::UpstreamUnavailable("timed out".into()).into();
        assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);

        let malformed: AppError = WeatherError::MalformedUpstreamData("not json".into()).into();
        assert_eq!(malformed.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn incomplete_record_is_unprocessable() {
        let err: AppError = AnomalyError::IncompleteRecord {
            missing: vec!["humidity"],
        }
        .into();

        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "incomplete weather record: missing humidity");
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::not_found("route").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
