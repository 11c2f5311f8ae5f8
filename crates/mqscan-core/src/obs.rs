//! Structured observability hooks for scan lifecycle events.
//!
//! This module provides:
//! - Scan-scoped tracing spans via the `ScanSpan` RAII guard
//! - Emission functions for key lifecycle events: scan start, per-detector
//!   completion, scan finish, scan failure
//!
//! Progress notices (detector name, issue count) are emitted at `info!`
//! level; they are observability, not part of the data contract. Verbosity
//! is controlled through the subscriber's `EnvFilter` (`RUST_LOG`).

use tracing::info;

/// RAII guard that enters a scan-scoped tracing span for the duration of a
/// scan.
///
/// # Example
///
/// ```ignore
/// let _span = ScanSpan::enter("scan-12345");
/// // All tracing calls are now associated with scan_id = "scan-12345"
/// ```
pub struct ScanSpan {
    _span: tracing::span::EnteredSpan,
}

impl ScanSpan {
    /// Create and enter a span tagged with the scan id.
    pub fn enter(scan_id: &str) -> Self {
        let span = tracing::info_span!("mqscan.scan", scan_id = %scan_id);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: scan started, with model type and resolved detector count.
pub fn emit_scan_started(scan_id: &str, model_type: &str, detector_count: usize) {
    info!(
        event = "scan.started",
        scan_id = %scan_id,
        model_type = %model_type,
        detector_count = detector_count,
    );
}

/// Emit event: one detector finished, with its (capped) issue count.
pub fn emit_detector_finished(detector: &str, issue_count: usize) {
    info!(event = "scan.detector_finished", detector = %detector, issue_count = issue_count);
}

/// Emit event: scan finished, with duration and total issue count.
pub fn emit_scan_finished(scan_id: &str, duration_ms: u64, issue_count: usize) {
    info!(
        event = "scan.finished",
        scan_id = %scan_id,
        duration_ms = duration_ms,
        issue_count = issue_count,
    );
}

/// Emit event: scan aborted by a detector failure (warning level).
pub fn emit_scan_failed(scan_id: &str, detector: &str, error: &dyn std::fmt::Display) {
    tracing::warn!(event = "scan.failed", scan_id = %scan_id, detector = %detector, error = %error);
}
