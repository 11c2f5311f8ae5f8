//! Model contract consumed by the scan core.
//!
//! The core reads [`ModelMeta`] to decide detector eligibility; everything
//! else about a model is opaque and belongs to the framework adapters
//! (sklearn, TensorFlow, PyTorch bridges) that live outside this crate.

use serde::{Deserialize, Serialize};

use super::dataset::Dataset;
use super::error::Result;

/// Closed enumeration of supported model task types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    Classification,
    Regression,
}

impl ModelType {
    /// Stable capability-tag string used for registry lookups.
    pub fn as_tag(&self) -> &'static str {
        match self {
            ModelType::Classification => "classification",
            ModelType::Regression => "regression",
        }
    }
}

impl std::fmt::Display for ModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Immutable description of a model under scan.
///
/// # Invariants
///
/// The metadata — in particular `model_type` — must not change for the
/// lifetime of a scan. The scan engine holds the model behind a shared
/// borrow and never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelMeta {
    /// Human-readable model name (for reporting).
    pub name: String,

    /// Task type; drives detector eligibility.
    pub model_type: ModelType,

    /// Feature columns the model consumes.
    pub feature_names: Vec<String>,

    /// Target column the model predicts, when known.
    pub target: Option<String>,
}

impl ModelMeta {
    /// Create metadata for a model with the given features.
    pub fn new(
        name: impl Into<String>,
        model_type: ModelType,
        feature_names: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            model_type,
            feature_names,
            target: None,
        }
    }

    /// Declare the target column.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

/// Raw model outputs, one value per dataset row.
///
/// Typed prediction frames belong to the framework adapters; the core only
/// passes predictions through to detectors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Predictions {
    pub values: Vec<serde_json::Value>,
}

impl Predictions {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Trait for model backends.
///
/// Implementations wrap a trained model and expose a prediction capability
/// over a dataset. Detectors receive the model behind a shared borrow and
/// must treat it as read-only.
pub trait Model: Send + Sync {
    /// Declared model metadata.
    fn meta(&self) -> &ModelMeta;

    /// Produce one prediction per dataset row.
    fn predict(&self, dataset: &Dataset) -> Result<Predictions>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_type_tags_are_stable() {
        assert_eq!(ModelType::Classification.as_tag(), "classification");
        assert_eq!(ModelType::Regression.as_tag(), "regression");
        assert_eq!(ModelType::Classification.to_string(), "classification");
    }

    #[test]
    fn model_type_serde_round_trip() {
        let json = serde_json::to_string(&ModelType::Regression).unwrap();
        assert_eq!(json, "\"regression\"");
        let back: ModelType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ModelType::Regression);
    }

    #[test]
    fn meta_builder_sets_target() {
        let meta = ModelMeta::new(
            "credit",
            ModelType::Classification,
            vec!["age".to_string(), "income".to_string()],
        )
        .with_target("default");
        assert_eq!(meta.target.as_deref(), Some("default"));
        assert_eq!(meta.feature_names.len(), 2);
    }
}
