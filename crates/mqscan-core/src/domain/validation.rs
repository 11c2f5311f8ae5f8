//! Model/dataset compatibility validation.
//!
//! Runs before any detector is resolved: a scan never starts against an
//! incompatible pairing. No-op on success, [`ValidationError`] otherwise.

use super::dataset::Dataset;
use super::error::ValidationError;
use super::model::Model;

/// Validate that `model` and `dataset` can be scanned together.
///
/// Checks:
/// 1. The dataset has at least one row.
/// 2. The model declares at least one feature, and every declared feature
///    exists as a dataset column.
/// 3. The model's declared target (if any) is a dataset column and is not
///    also listed as a feature.
/// 4. When both model and dataset declare a target, they agree.
///
/// # Errors
///
/// - [`ValidationError::EmptyDataset`]
/// - [`ValidationError::NoFeatures`]
/// - [`ValidationError::MissingFeature`]
/// - [`ValidationError::TargetIsFeature`]
/// - [`ValidationError::MissingTarget`]
/// - [`ValidationError::TargetMismatch`]
pub fn validate_model(
    model: &dyn Model,
    dataset: &Dataset,
) -> std::result::Result<(), ValidationError> {
    if dataset.is_empty() {
        return Err(ValidationError::EmptyDataset);
    }

    let meta = model.meta();

    if meta.feature_names.is_empty() {
        return Err(ValidationError::NoFeatures);
    }

    for feature in &meta.feature_names {
        if !dataset.has_column(feature) {
            return Err(ValidationError::MissingFeature {
                feature: feature.clone(),
            });
        }
    }

    if let Some(target) = &meta.target {
        if meta.feature_names.contains(target) {
            return Err(ValidationError::TargetIsFeature {
                target: target.clone(),
            });
        }
        if !dataset.has_column(target) {
            return Err(ValidationError::MissingTarget {
                target: target.clone(),
            });
        }
        if let Some(ds_target) = dataset.target() {
            if ds_target != target {
                return Err(ValidationError::TargetMismatch {
                    model_target: target.clone(),
                    dataset_target: ds_target.to_string(),
                });
            }
        }
    }

    Ok(())
}
