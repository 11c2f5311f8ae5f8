//! Domain-level error taxonomy for MQSCAN.

/// Errors produced by model/dataset compatibility validation.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("dataset is empty")]
    EmptyDataset,

    #[error("model declares no features")]
    NoFeatures,

    #[error("model feature '{feature}' not found in dataset columns")]
    MissingFeature { feature: String },

    #[error("model target '{target}' not found in dataset columns")]
    MissingTarget { target: String },

    #[error("model target '{target}' is also declared as a feature")]
    TargetIsFeature { target: String },

    #[error("model target '{model_target}' does not match dataset target '{dataset_target}'")]
    TargetMismatch {
        model_target: String,
        dataset_target: String,
    },
}

/// Errors produced by checking supplied detector parameters against the
/// detector's declared configuration schema.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("detector '{detector}' has no option named '{option}'")]
    UnknownOption { detector: String, option: String },

    #[error("detector '{detector}' option '{option}' expects {expected}, got {value}")]
    TypeMismatch {
        detector: String,
        option: String,
        expected: &'static str,
        value: String,
    },
}

/// MQSCAN domain errors.
///
/// The scan engine is fail-fast: every variant below aborts the scan that
/// produced it. There is no partial-success mode — a report with silently
/// missing detectors would misrepresent coverage.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("model validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("no issue detectors available for model type '{model_type}'; scan will not be performed")]
    NoDetectors { model_type: String },

    #[error("allow-list excluded every detector eligible for model type '{model_type}'")]
    AllowListExcludedAll { model_type: String },

    #[error("detector '{name}' is already registered")]
    DuplicateDetector { name: String },

    #[error("invalid detector configuration: {0}")]
    Config(#[from] ConfigError),

    /// Construction or run-time failure surfaced by a detector.
    #[error("detector '{detector}' failed: {message}")]
    Detector { detector: String, message: String },

    /// Failure surfaced by a model backend while producing predictions.
    #[error("prediction failed: {0}")]
    Prediction(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for MQSCAN domain operations.
pub type Result<T> = std::result::Result<T, ScanError>;
