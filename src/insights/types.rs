use serde::{Deserialize, Serialize};
use std::fmt;

/// Display severity. `rank()` gives the sort priority: danger first,
/// info last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Danger,
    Warning,
    Success,
    Info,
}

impl Severity {
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Danger => 0,
            Severity::Warning => 1,
            Severity::Success => 2,
            Severity::Info => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Danger => "danger",
            Severity::Warning => "warning",
            Severity::Success => "success",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    /// Stable per detector and finding, e.g. "best-hour-09".
    pub id: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    /// 0-100 heuristic strength of evidence.
    pub confidence: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Confidence for sample-scaled detectors: grows with the bucket's share
/// of the journal, capped at 95 so it never reads as certainty.
pub fn scaled_confidence(sample: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let scaled = 50.0 + 45.0 * (sample as f64 / total as f64);
    (scaled.round() as u8).min(95)
}
