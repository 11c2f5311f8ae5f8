//! Domain models for MQSCAN.
//!
//! Canonical definitions for the core entities:
//! - `Model` / `ModelMeta`: the model under scan, opaque beyond its metadata
//! - `Dataset`: tabular evaluation data handed to detectors unchanged
//! - `Issue`: one reported finding, ranked by importance
//! - `ScanError`: the fail-fast failure taxonomy

pub mod dataset;
pub mod error;
pub mod issue;
pub mod model;
pub mod validation;

// Re-export main types and errors
pub use dataset::Dataset;
pub use error::{ConfigError, Result, ScanError, ValidationError};
pub use issue::{Issue, IssueLevel};
pub use model::{Model, ModelMeta, ModelType, Predictions};
pub use validation::validate_model;
