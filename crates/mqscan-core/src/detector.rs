//! Detector capability contract and configuration schema.
//!
//! A detector inspects a (model, dataset) pair and emits zero or more
//! [`Issue`]s. Concrete detector implementations live outside this crate;
//! the core consumes them through [`Detector`] + [`DetectorFactory`] and
//! the registry.
//!
//! Configuration is schema-checked: each factory declares its option
//! surface ([`ConfigSchema`]) and supplied parameters are resolved against
//! it before construction, so a misspelled or mistyped option surfaces as a
//! [`ConfigError`] instead of a generic construction failure.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{ConfigError, Dataset, Issue, Model, Result};

/// Constructor parameters for one detector: option name → value.
pub type DetectorParams = BTreeMap<String, Value>;

/// Value kinds accepted by detector configuration options.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    Bool,
    Integer,
    Float,
    String,
}

impl OptionKind {
    pub fn name(&self) -> &'static str {
        match self {
            OptionKind::Bool => "bool",
            OptionKind::Integer => "integer",
            OptionKind::Float => "float",
            OptionKind::String => "string",
        }
    }

    /// Whether a JSON value is acceptable for this kind.
    ///
    /// `Float` admits integers — config files routinely write `1` for `1.0`.
    fn admits(&self, value: &Value) -> bool {
        match self {
            OptionKind::Bool => value.is_boolean(),
            OptionKind::Integer => value.is_i64() || value.is_u64(),
            OptionKind::Float => value.is_number(),
            OptionKind::String => value.is_string(),
        }
    }
}

/// One declared configuration option: kind plus default value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigOption {
    pub kind: OptionKind,
    pub default: Value,
}

/// Declared configuration surface of a detector.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConfigSchema {
    options: BTreeMap<String, ConfigOption>,
}

impl ConfigSchema {
    /// A schema with no options (the default for parameterless detectors).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Declare an option.
    pub fn with_option(
        mut self,
        name: impl Into<String>,
        kind: OptionKind,
        default: Value,
    ) -> Self {
        self.options.insert(name.into(), ConfigOption { kind, default });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn option(&self, name: &str) -> Option<&ConfigOption> {
        self.options.get(name)
    }

    /// Check `supplied` against the schema and merge it over the defaults.
    ///
    /// Every schema option is present in the output: supplied values win,
    /// omitted options take their declared default.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnknownOption`] — `supplied` names an option the
    ///   schema does not declare.
    /// - [`ConfigError::TypeMismatch`] — a supplied value does not fit the
    ///   declared kind.
    pub fn resolve(
        &self,
        detector: &str,
        supplied: &DetectorParams,
    ) -> std::result::Result<DetectorParams, ConfigError> {
        let mut resolved = DetectorParams::new();

        for (name, value) in supplied {
            let option = self.options.get(name).ok_or_else(|| ConfigError::UnknownOption {
                detector: detector.to_string(),
                option: name.clone(),
            })?;
            if !option.kind.admits(value) {
                return Err(ConfigError::TypeMismatch {
                    detector: detector.to_string(),
                    option: name.clone(),
                    expected: option.kind.name(),
                    value: value.to_string(),
                });
            }
            resolved.insert(name.clone(), value.clone());
        }

        for (name, option) in &self.options {
            resolved
                .entry(name.clone())
                .or_insert_with(|| option.default.clone());
        }

        Ok(resolved)
    }
}

/// A configured, runnable detector.
///
/// Instances are created per scan invocation and dropped when the scan
/// completes; no state persists across scans.
pub trait Detector: Send {
    /// Inspect the pair and return discovered issues, in any order.
    ///
    /// `model` and `dataset` are shared read-only inputs. An error here is
    /// scan-fatal: the engine propagates it unmodified and produces no
    /// result.
    fn run(&self, model: &dyn Model, dataset: &Dataset) -> Result<Vec<Issue>>;
}

/// Constructs detector instances from resolved parameters.
///
/// Identity and capability tags are declared at registration time — the
/// registration is the class-level declaration; the factory only knows how
/// to build. `params` has already been resolved against [`Self::schema`],
/// so every declared option is present.
pub trait DetectorFactory: Send + Sync {
    /// Declared configuration surface. Defaults to no options.
    fn schema(&self) -> ConfigSchema {
        ConfigSchema::empty()
    }

    /// Build a detector instance. Errors are scan-fatal.
    fn build(&self, params: &DetectorParams) -> Result<Box<dyn Detector>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> ConfigSchema {
        ConfigSchema::empty()
            .with_option("threshold", OptionKind::Float, json!(0.5))
            .with_option("max_slices", OptionKind::Integer, json!(10))
    }

    #[test]
    fn empty_supplied_yields_defaults() {
        let resolved = schema().resolve("d", &DetectorParams::new()).unwrap();
        assert_eq!(resolved["threshold"], json!(0.5));
        assert_eq!(resolved["max_slices"], json!(10));
    }

    #[test]
    fn supplied_value_wins() {
        let mut supplied = DetectorParams::new();
        supplied.insert("threshold".to_string(), json!(0.9));
        let resolved = schema().resolve("d", &supplied).unwrap();
        assert_eq!(resolved["threshold"], json!(0.9));
        assert_eq!(resolved["max_slices"], json!(10));
    }

    #[test]
    fn unknown_option_rejected() {
        let mut supplied = DetectorParams::new();
        supplied.insert("treshold".to_string(), json!(0.9));
        let err = schema().resolve("d", &supplied).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownOption { option, .. } if option == "treshold"));
    }

    #[test]
    fn kind_mismatch_rejected() {
        let mut supplied = DetectorParams::new();
        supplied.insert("max_slices".to_string(), json!("many"));
        let err = schema().resolve("d", &supplied).unwrap_err();
        assert!(matches!(err, ConfigError::TypeMismatch { option, .. } if option == "max_slices"));
    }

    #[test]
    fn float_option_admits_integer() {
        let mut supplied = DetectorParams::new();
        supplied.insert("threshold".to_string(), json!(1));
        let resolved = schema().resolve("d", &supplied).unwrap();
        assert_eq!(resolved["threshold"], json!(1));
    }
}
