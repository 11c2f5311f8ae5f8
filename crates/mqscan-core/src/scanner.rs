//! Scan orchestration.
//!
//! [`Scanner`] runs exactly one scan per [`Scanner::analyze`] call: it
//! validates the model/dataset pairing, resolves eligible detectors from
//! the injected registry (always narrowed by the model's declared type,
//! optionally by a caller allow-list), instantiates each detector with its
//! schema-checked configuration, executes them strictly sequentially, and
//! aggregates ranked, truncated issues into a [`ScanResult`].
//!
//! The engine is fail-fast throughout: validation errors, an empty
//! detector resolution, configuration errors, construction errors, and
//! run-time detector errors all abort the scan. A partial report that
//! silently dropped detectors would misrepresent model quality coverage.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::detector::{Detector, DetectorParams};
use crate::domain::{validate_model, Dataset, Model, ModelType, Result, ScanError};
use crate::metrics::METRICS;
use crate::registry::{DetectorRegistration, DetectorRegistry};
use crate::result::{rank_issues, ScanResult, MAX_ISSUES_PER_DETECTOR};
use crate::{obs, warnings};

/// Orchestrates one scan over a (model, dataset) pair.
///
/// Holds no state across scans: detector instances are created per
/// [`analyze`](Self::analyze) call and dropped when it returns.
#[derive(Clone)]
pub struct Scanner {
    registry: Arc<DetectorRegistry>,
    params: BTreeMap<String, DetectorParams>,
    only: Option<Vec<String>>,
}

impl Scanner {
    /// Create a scanner over an explicit detector registry.
    pub fn new(registry: Arc<DetectorRegistry>) -> Self {
        Self {
            registry,
            params: BTreeMap::new(),
            only: None,
        }
    }

    /// Replace the per-detector configuration map
    /// (`detector identity → option name → value`).
    pub fn with_params(mut self, params: BTreeMap<String, DetectorParams>) -> Self {
        self.params = params;
        self
    }

    /// Set the configuration for a single detector.
    pub fn with_params_for(
        mut self,
        detector: impl Into<String>,
        params: DetectorParams,
    ) -> Self {
        self.params.insert(detector.into(), params);
        self
    }

    /// Restrict the scan to detectors matching the given identities or
    /// tags.
    ///
    /// The effective detector set is the intersection of the model-type
    /// match and the allow-list match: an entry that does not also match
    /// the model's type silently contributes nothing.
    pub fn with_only<I, S>(mut self, only: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only = Some(only.into_iter().map(Into::into).collect());
        self
    }

    /// Run the analysis of a model and dataset, detecting issues.
    ///
    /// Detectors execute strictly sequentially, in registry resolution
    /// order, with advisory warnings suppressed for the duration of the
    /// scan. Each detector's issues are sorted by descending importance
    /// and truncated to [`MAX_ISSUES_PER_DETECTOR`] before aggregation;
    /// the aggregate keeps detector execution order and is never re-sorted
    /// globally.
    ///
    /// # Errors
    ///
    /// - [`ScanError::Validation`] — incompatible model/dataset pairing.
    /// - [`ScanError::NoDetectors`] — nothing registered matches the
    ///   model's type.
    /// - [`ScanError::AllowListExcludedAll`] — the allow-list intersection
    ///   removed every eligible detector.
    /// - [`ScanError::Config`] — supplied parameters violate a detector's
    ///   schema.
    /// - [`ScanError::Detector`] (or any error a factory or detector
    ///   surfaces) — construction or run failure, propagated unmodified.
    pub fn analyze(&self, model: &dyn Model, dataset: &Dataset) -> Result<ScanResult> {
        validate_model(model, dataset)?;

        let scan_id = Uuid::new_v4();
        let scan_id_str = scan_id.to_string();
        let _span = obs::ScanSpan::enter(&scan_id_str);

        let model_type = model.meta().model_type;
        let eligible = self.eligible_detectors(model_type)?;

        // All detectors are constructed before any runs: a misconfigured
        // detector aborts the scan with zero issues produced.
        let mut instances: Vec<(String, Box<dyn Detector>)> = Vec::with_capacity(eligible.len());
        for registration in &eligible {
            let instance = self.instantiate(registration)?;
            instances.push((registration.name().to_string(), instance));
        }

        let started_at = Utc::now();
        obs::emit_scan_started(&scan_id_str, model_type.as_tag(), instances.len());

        let _quiet = warnings::suppress();

        let mut issues = Vec::new();
        for (name, detector) in &instances {
            tracing::debug!(event = "scan.detector_started", detector = %name);
            let detected = match detector.run(model, dataset) {
                Ok(detected) => detected,
                Err(err) => {
                    obs::emit_scan_failed(&scan_id_str, name, &err);
                    return Err(err);
                }
            };
            let ranked = rank_issues(detected, MAX_ISSUES_PER_DETECTOR);
            obs::emit_detector_finished(name, ranked.len());
            METRICS.inc_detectors_executed();
            issues.extend(ranked);
        }

        drop(_quiet);

        let detectors = instances.into_iter().map(|(name, _)| name).collect();
        let result = ScanResult::new(scan_id, detectors, issues, started_at);

        obs::emit_scan_finished(&scan_id_str, result.duration_ms(), result.issue_count());
        METRICS.inc_scans_completed();
        METRICS.add_issues_reported(result.issue_count() as u64);

        Ok(result)
    }

    /// Resolve the detector set for a model type, applying the allow-list
    /// intersection when one is configured.
    fn eligible_detectors(&self, model_type: ModelType) -> Result<Vec<&DetectorRegistration>> {
        let candidates = self.registry.matching(&[model_type.as_tag()]);
        if candidates.is_empty() {
            return Err(ScanError::NoDetectors {
                model_type: model_type.to_string(),
            });
        }

        let Some(only) = &self.only else {
            return Ok(candidates);
        };

        let allowed: BTreeSet<&str> = self
            .registry
            .matching(only)
            .into_iter()
            .map(|r| r.name())
            .collect();

        // Intersection preserves the model-type query's iteration order.
        let kept: Vec<&DetectorRegistration> = candidates
            .into_iter()
            .filter(|r| allowed.contains(r.name()))
            .collect();

        if kept.is_empty() {
            return Err(ScanError::AllowListExcludedAll {
                model_type: model_type.to_string(),
            });
        }
        Ok(kept)
    }

    /// Resolve configuration for one registration and build the instance.
    fn instantiate(&self, registration: &DetectorRegistration) -> Result<Box<dyn Detector>> {
        let name = registration.name();
        let supplied = self.params.get(name).cloned().unwrap_or_default();
        let resolved = registration.factory().schema().resolve(name, &supplied)?;
        registration.factory().build(&resolved)
    }
}
