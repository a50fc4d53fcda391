//! Rule-based anomaly evaluation over a single weather record.
//!
//! Rules:
//! - temperature outside the plausible range
//! - humidity outside 0..=100 %
//! - wind speed at or above the warning/critical levels
//! - tide level at or above the warning/critical levels (only when reported)
mod detector;
mod types;

pub use detector::{AnomalyDetector, Thresholds};
pub use types::{AnomalyError, AnomalyResult, Reason, Severity};
