//! Aggregated scan outcome and per-detector issue ranking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Issue;

/// Cap on reported issues per detector.
pub const MAX_ISSUES_PER_DETECTOR: usize = 15;

/// Rank one detector's issues by descending importance and cap the count.
///
/// Ties keep their emitted order (stable sort). Ranking applies to a single
/// detector's contribution before merging — the aggregate result is never
/// re-sorted globally, so per-detector grouping survives aggregation.
pub fn rank_issues(mut issues: Vec<Issue>, cap: usize) -> Vec<Issue> {
    issues.sort_by(|a, b| b.importance.total_cmp(&a.importance));
    issues.truncate(cap);
    issues
}

/// Ordered outcome of one scan invocation.
///
/// Created at the end of a scan and immutable thereafter. Issues appear in
/// detector execution order, each detector's contribution sorted by
/// descending importance and capped at [`MAX_ISSUES_PER_DETECTOR`]. Callers
/// that want a single global ranking must sort a copy themselves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanResult {
    scan_id: Uuid,
    detectors: Vec<String>,
    issues: Vec<Issue>,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
}

impl ScanResult {
    /// Assemble the result of a completed scan.
    pub fn new(
        scan_id: Uuid,
        detectors: Vec<String>,
        issues: Vec<Issue>,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            scan_id,
            detectors,
            issues,
            started_at,
            finished_at: Utc::now(),
        }
    }

    pub fn scan_id(&self) -> Uuid {
        self.scan_id
    }

    /// Identities of the detectors that ran, in execution order.
    pub fn detectors(&self) -> &[String] {
        &self.detectors
    }

    /// All issues, in detector execution order.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Issues contributed by one detector.
    pub fn issues_for(&self, detector: &str) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|i| i.detector == detector)
            .collect()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    pub fn duration_ms(&self) -> u64 {
        (self.finished_at - self.started_at)
            .num_milliseconds()
            .max(0) as u64
    }
}
