//! Issue model: one reported finding.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Severity band for reported issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueLevel {
    Minor,
    Medium,
    Major,
}

/// One detected problem.
///
/// Produced by a detector's `run`; immutable once produced. The
/// `importance` score drives per-detector ranking and truncation — higher
/// means more severe. The payload is detector-specific (data slices,
/// metric deltas, example rows) and opaque to the core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    /// Identity of the detector that produced this issue.
    pub detector: String,

    /// Human-readable description of the problem.
    pub description: String,

    /// Ranking score; higher = more severe.
    pub importance: f64,

    /// Severity band.
    pub level: IssueLevel,

    /// Detector-specific payload.
    pub payload: Value,
}

impl Issue {
    /// Create an issue with the minimum required fields.
    pub fn new(
        detector: impl Into<String>,
        description: impl Into<String>,
        importance: f64,
    ) -> Self {
        Self {
            detector: detector.into(),
            description: description.into(),
            importance,
            level: IssueLevel::Minor,
            payload: Value::Null,
        }
    }

    /// Set the severity band.
    pub fn with_level(mut self, level: IssueLevel) -> Self {
        self.level = level;
        self
    }

    /// Attach a detector-specific payload.
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }
}
