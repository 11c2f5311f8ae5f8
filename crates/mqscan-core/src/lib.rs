//! MQSCAN Core Library
//!
//! Scan orchestration engine for model-quality scanning: given a trained
//! predictive model and an evaluation dataset, run a battery of issue
//! detectors and aggregate their findings into a ranked, bounded
//! [`ScanResult`].
//!
//! Detector implementations, model-framework adapters, dataset loading,
//! persistence, and report rendering live outside this crate and plug in
//! through the [`Detector`]/[`DetectorFactory`] and [`Model`] traits.

pub mod detector;
pub mod domain;
pub mod metrics;
pub mod obs;
pub mod registry;
pub mod result;
pub mod scanner;
pub mod telemetry;
pub mod warnings;

pub use domain::{
    validate_model, ConfigError, Dataset, Issue, IssueLevel, Model, ModelMeta, ModelType,
    Predictions, Result, ScanError, ValidationError,
};

pub use detector::{
    ConfigOption, ConfigSchema, Detector, DetectorFactory, DetectorParams, OptionKind,
};

pub use registry::{DetectorRegistration, DetectorRegistry};

pub use result::{ScanResult, MAX_ISSUES_PER_DETECTOR};

pub use scanner::Scanner;

pub use metrics::METRICS;
pub use obs::{
    emit_detector_finished, emit_scan_failed, emit_scan_finished, emit_scan_started, ScanSpan,
};
pub use telemetry::init_tracing;

/// MQSCAN version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
