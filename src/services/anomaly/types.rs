use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Normal,
    Warning,
    Critical,
}

/// One fired rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reason {
    pub field: &'static str,
    pub value: f64,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnomalyResult {
    pub alert: bool,
    pub severity: Severity,
    pub reasons: Vec<Reason>,
}

impl AnomalyResult {
    pub fn from_reasons(reasons: Vec<Reason>) -> Self {
        let severity = reasons
            .iter()
            .map(|r| r.severity)
            .max()
            .unwrap_or(Severity::Normal);

        Self {
            alert: !reasons.is_empty(),
            severity,
            reasons,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum AnomalyError {
    #[error("incomplete weather record: missing {}", .missing.join(", "))]
    IncompleteRecord { missing: Vec<&'static str> },
}
