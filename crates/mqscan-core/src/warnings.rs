//! Scan-scoped suppression of advisory detector warnings.
//!
//! Detectors surface advisory diagnostics through [`emit`]; the scanner
//! holds a [`SuppressionGuard`] for the duration of detector execution so
//! those diagnostics do not drown the report while it is assembled. The
//! guard restores the previous policy when dropped — on success, early
//! return via `?`, and unwinding panics alike. Functional failures travel
//! through `Result` and are never suppressed.
//!
//! The policy lives on the coordinating thread (detectors execute
//! sequentially on that thread), so concurrent scans on other threads are
//! unaffected.

use std::cell::Cell;
use std::marker::PhantomData;

thread_local! {
    static SUPPRESSED: Cell<bool> = const { Cell::new(false) };
}

/// Whether advisory warnings are currently suppressed on this thread.
pub fn suppressed() -> bool {
    SUPPRESSED.with(Cell::get)
}

/// Route an advisory warning to the log unless suppression is active.
pub fn emit(detector: &str, message: &str) {
    if !suppressed() {
        tracing::warn!(event = "detector.warning", detector = %detector, message = %message);
    }
}

/// Suppress advisory warnings until the returned guard is dropped.
///
/// Guards nest: each one restores the policy that was in force when it was
/// acquired.
#[must_use = "suppression ends when the guard is dropped"]
pub fn suppress() -> SuppressionGuard {
    let previous = SUPPRESSED.with(|s| s.replace(true));
    SuppressionGuard {
        previous,
        _not_send: PhantomData,
    }
}

/// RAII guard restoring the previous warning policy on drop.
pub struct SuppressionGuard {
    previous: bool,
    // Restoration must happen on the acquiring thread.
    _not_send: PhantomData<*const ()>,
}

impl Drop for SuppressionGuard {
    fn drop(&mut self) {
        SUPPRESSED.with(|s| s.set(self.previous));
    }
}
