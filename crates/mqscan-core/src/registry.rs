//! Detector registry: catalog of known detectors and tag-based lookup.
//!
//! Registrations are collected once during process start-up (an explicit
//! discovery phase, not import-time side effects) and the finished registry
//! is handed to the [`Scanner`](crate::scanner::Scanner) by constructor
//! injection — tests supply isolated registries the same way. Lookups never
//! mutate, and iteration order is registration order: stable and
//! reproducible for a given registry state.

use std::sync::Arc;

use crate::detector::DetectorFactory;
use crate::domain::{Result, ScanError};

/// One catalog entry: identity, capability tags, factory.
#[derive(Clone)]
pub struct DetectorRegistration {
    name: String,
    tags: Vec<String>,
    factory: Arc<dyn DetectorFactory>,
}

impl DetectorRegistration {
    /// Unique registration identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared capability tags (minimally the applicable model types).
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn factory(&self) -> &dyn DetectorFactory {
        self.factory.as_ref()
    }

    fn matches_any<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter()
            .any(|t| self.tags.iter().any(|own| own == t.as_ref()))
    }
}

impl std::fmt::Debug for DetectorRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectorRegistration")
            .field("name", &self.name)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}

/// Append-only catalog mapping detector identity to factory + tags.
///
/// Backed by an insertion-ordered `Vec` rather than a hash map so that
/// detector resolution — and therefore execution — order is deterministic.
#[derive(Clone, Default)]
pub struct DetectorRegistry {
    entries: Vec<DetectorRegistration>,
}

impl DetectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a detector under a unique identity.
    ///
    /// # Errors
    ///
    /// [`ScanError::DuplicateDetector`] if `name` is already registered.
    /// Re-registration is rejected, never overwritten — a duplicate
    /// identity is an accident worth catching at start-up.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        tags: &[&str],
        factory: Arc<dyn DetectorFactory>,
    ) -> Result<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(ScanError::DuplicateDetector { name });
        }
        self.entries.push(DetectorRegistration {
            name,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            factory,
        });
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registrations whose tag set intersects `tags`, in registration order.
    ///
    /// An empty `tags` slice applies no filter and returns every
    /// registration.
    pub fn matching<S: AsRef<str>>(&self, tags: &[S]) -> Vec<&DetectorRegistration> {
        self.entries
            .iter()
            .filter(|e| tags.is_empty() || e.matches_any(tags))
            .collect()
    }

    /// All registrations, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &DetectorRegistration> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::{Detector, DetectorParams};
    use crate::domain::{Dataset, Issue, Model};

    struct NullDetector;

    impl Detector for NullDetector {
        fn run(&self, _model: &dyn Model, _dataset: &Dataset) -> Result<Vec<Issue>> {
            Ok(Vec::new())
        }
    }

    struct NullFactory;

    impl DetectorFactory for NullFactory {
        fn build(&self, _params: &DetectorParams) -> Result<Box<dyn Detector>> {
            Ok(Box::new(NullDetector))
        }
    }

    fn registry(entries: &[(&str, &[&str])]) -> DetectorRegistry {
        let mut reg = DetectorRegistry::new();
        for (name, tags) in entries {
            reg.register(*name, tags, Arc::new(NullFactory)).unwrap();
        }
        reg
    }

    #[test]
    fn duplicate_identity_rejected() {
        let mut reg = registry(&[("perf", &["classification"])]);
        let err = reg
            .register("perf", &["regression"], Arc::new(NullFactory))
            .unwrap_err();
        assert!(matches!(err, ScanError::DuplicateDetector { name } if name == "perf"));
        // the original registration is untouched
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.iter().next().unwrap().tags(), &["classification"]);
    }

    #[test]
    fn matching_filters_by_tag_intersection() {
        let reg = registry(&[
            ("a", &["classification"]),
            ("b", &["regression"]),
            ("c", &["classification", "regression"]),
        ]);
        let names: Vec<_> = reg
            .matching(&["classification"])
            .iter()
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn empty_query_returns_all_in_order() {
        let reg = registry(&[("c", &["x"]), ("a", &["y"]), ("b", &["z"])]);
        let names: Vec<_> = reg
            .matching::<&str>(&[])
            .iter()
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn unknown_tag_matches_nothing() {
        let reg = registry(&[("a", &["classification"])]);
        assert!(reg.matching(&["text_generation"]).is_empty());
    }
}
