//! Global atomic counters for MQSCAN observability.
//!
//! Counters are incremented silently at the call site. Call
//! [`Metrics::flush`] to emit current values as a single
//! `tracing::info!` event (e.g. at the end of a scan batch).

use std::sync::atomic::{AtomicU64, Ordering};

/// Global metrics singleton.
pub static METRICS: Metrics = Metrics::new();

/// Lightweight atomic counters — no allocations, no locking.
pub struct Metrics {
    scans_completed: AtomicU64,
    detectors_executed: AtomicU64,
    issues_reported: AtomicU64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub const fn new() -> Self {
        Self {
            scans_completed: AtomicU64::new(0),
            detectors_executed: AtomicU64::new(0),
            issues_reported: AtomicU64::new(0),
        }
    }

    /// Increment the scans-completed counter by one.
    pub fn inc_scans_completed(&self) {
        self.scans_completed.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "scans_completed", "counter incremented");
    }

    /// Increment the detectors-executed counter by one.
    pub fn inc_detectors_executed(&self) {
        self.detectors_executed.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "detectors_executed", "counter incremented");
    }

    /// Add a finished detector's issue count to the issues-reported counter.
    pub fn add_issues_reported(&self, count: u64) {
        self.issues_reported.fetch_add(count, Ordering::Relaxed);
        tracing::trace!(metric = "issues_reported", added = count, "counter incremented");
    }

    /// Emit all current counter values as a single `info!` event.
    ///
    /// Call this at natural boundaries (end of a scan batch, daemon tick)
    /// rather than on every increment.
    pub fn flush(&self) {
        tracing::info!(
            metric = "flush",
            scans_completed = self.scans_completed(),
            detectors_executed = self.detectors_executed(),
            issues_reported = self.issues_reported(),
        );
    }

    /// Read the current scans-completed count.
    pub fn scans_completed(&self) -> u64 {
        self.scans_completed.load(Ordering::Relaxed)
    }

    /// Read the current detectors-executed count.
    pub fn detectors_executed(&self) -> u64 {
        self.detectors_executed.load(Ordering::Relaxed)
    }

    /// Read the current issues-reported count.
    pub fn issues_reported(&self) -> u64 {
        self.issues_reported.load(Ordering::Relaxed)
    }

    /// Reset all counters to zero (useful in tests).
    pub fn reset(&self) {
        self.scans_completed.store(0, Ordering::Relaxed);
        self.detectors_executed.store(0, Ordering::Relaxed);
        self.issues_reported.store(0, Ordering::Relaxed);
    }
}
