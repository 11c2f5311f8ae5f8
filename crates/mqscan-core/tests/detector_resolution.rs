//! Registry behavior observed through the public API: tag queries,
//! registration order, duplicate identities, multi-type detectors.

use std::sync::Arc;

use serde_json::{json, Map, Value};

use mqscan_core::{
    Dataset, Detector, DetectorFactory, DetectorParams, DetectorRegistry, Issue, Model, ModelMeta,
    ModelType, Predictions, Result, ScanError, Scanner,
};

struct StubModel {
    meta: ModelMeta,
}

impl Model for StubModel {
    fn meta(&self) -> &ModelMeta {
        &self.meta
    }

    fn predict(&self, dataset: &Dataset) -> Result<Predictions> {
        Ok(Predictions {
            values: vec![Value::Null; dataset.len()],
        })
    }
}

fn model_of(model_type: ModelType) -> StubModel {
    StubModel {
        meta: ModelMeta::new("stub", model_type, vec!["f1".to_string()]),
    }
}

fn dataset() -> Dataset {
    let row: Map<String, Value> = [("f1".to_string(), json!(0))].into_iter().collect();
    Dataset::new(vec!["f1".to_string()], vec![row])
}

struct OneIssueFactory {
    name: String,
}

impl DetectorFactory for OneIssueFactory {
    fn build(&self, _params: &DetectorParams) -> Result<Box<dyn Detector>> {
        Ok(Box::new(OneIssueDetector {
            name: self.name.clone(),
        }))
    }
}

struct OneIssueDetector {
    name: String,
}

impl Detector for OneIssueDetector {
    fn run(&self, _model: &dyn Model, _dataset: &Dataset) -> Result<Vec<Issue>> {
        Ok(vec![Issue::new(self.name.as_str(), "finding", 1.0)])
    }
}

fn register(registry: &mut DetectorRegistry, name: &str, tags: &[&str]) {
    registry
        .register(
            name,
            tags,
            Arc::new(OneIssueFactory {
                name: name.to_string(),
            }),
        )
        .unwrap();
}

// ---- tag queries ----

#[test]
fn matching_returns_exactly_the_tagged_subset() {
    let mut registry = DetectorRegistry::new();
    register(&mut registry, "a", &["classification"]);
    register(&mut registry, "b", &["regression"]);
    register(&mut registry, "c", &["classification", "regression"]);

    let names: Vec<&str> = registry
        .matching(&["classification"])
        .iter()
        .map(|r| r.name())
        .collect();
    assert_eq!(names, ["a", "c"]);

    let names: Vec<&str> = registry
        .matching(&["regression"])
        .iter()
        .map(|r| r.name())
        .collect();
    assert_eq!(names, ["b", "c"]);
}

#[test]
fn empty_query_returns_every_registration() {
    let mut registry = DetectorRegistry::new();
    register(&mut registry, "a", &["classification"]);
    register(&mut registry, "b", &["regression"]);

    assert_eq!(registry.matching::<&str>(&[]).len(), 2);
}

// ---- execution order ----

#[test]
fn execution_order_is_registration_order() {
    let mut registry = DetectorRegistry::new();
    register(&mut registry, "charlie", &["classification"]);
    register(&mut registry, "alpha", &["classification"]);
    register(&mut registry, "bravo", &["classification"]);

    let result = Scanner::new(Arc::new(registry))
        .analyze(&model_of(ModelType::Classification), &dataset())
        .unwrap();

    assert_eq!(
        result.detectors(),
        [
            "charlie".to_string(),
            "alpha".to_string(),
            "bravo".to_string()
        ]
    );
}

// ---- duplicate identities ----

#[test]
fn duplicate_identity_is_rejected() {
    let mut registry = DetectorRegistry::new();
    register(&mut registry, "perf", &["classification"]);

    let err = registry
        .register(
            "perf",
            &["regression"],
            Arc::new(OneIssueFactory {
                name: "perf".to_string(),
            }),
        )
        .unwrap_err();

    assert!(matches!(err, ScanError::DuplicateDetector { name } if name == "perf"));
    assert_eq!(registry.len(), 1);
}

// ---- multi-type detectors ----

#[test]
fn detector_tagged_for_both_types_runs_in_both_scans() {
    let mut registry = DetectorRegistry::new();
    register(&mut registry, "leakage", &["classification", "regression"]);
    let registry = Arc::new(registry);

    let classification = Scanner::new(registry.clone())
        .analyze(&model_of(ModelType::Classification), &dataset())
        .unwrap();
    assert_eq!(classification.detectors(), ["leakage".to_string()]);

    let regression = Scanner::new(registry)
        .analyze(&model_of(ModelType::Regression), &dataset())
        .unwrap();
    assert_eq!(regression.detectors(), ["leakage".to_string()]);
}
