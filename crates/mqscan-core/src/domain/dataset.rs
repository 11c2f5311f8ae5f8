//! Tabular dataset container passed through to detectors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An evaluation dataset: named columns plus JSON-object rows.
///
/// The scan core never inspects cell values — it checks column presence
/// during validation and hands the container to detectors unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Dataset {
    name: Option<String>,
    columns: Vec<String>,
    rows: Vec<Map<String, Value>>,
    target: Option<String>,
}

impl Dataset {
    /// Create a dataset from column names and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Map<String, Value>>) -> Self {
        Self {
            name: None,
            columns,
            rows,
            target: None,
        }
    }

    /// Attach a human-readable name (for reporting).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Declare which column holds ground-truth labels.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn rows(&self) -> &[Map<String, Value>] {
        &self.rows
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
