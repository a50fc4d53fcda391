pub mod alerts;
pub mod health;
pub mod weather;

use crate::error::AppError;

/// Fallback for unknown paths.
pub async fn not_found() -> AppError {
    AppError::not_found("route")
}
