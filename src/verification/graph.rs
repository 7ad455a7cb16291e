// Copyright 2025 Cowboy AI, LLC.

//! Verification of a whole snapshot

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::Serialize;
use tracing::debug;

use super::{verify_category_with, verify_functor, verify_natural_transformation, VerificationResult};
use crate::category::NaturalTransformation;
use crate::config::VerificationConfig;
use crate::knowledge_graph::KnowledgeGraph;

/// Per-entity verification results, keyed by entity id in load order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GraphVerificationReport {
    /// One result per category
    pub categories: IndexMap<String, VerificationResult>,
    /// One result per functor
    pub functors: IndexMap<String, VerificationResult>,
    /// One result per natural transformation
    pub natural_transformations: IndexMap<String, VerificationResult>,
}

impl GraphVerificationReport {
    fn results(&self) -> impl Iterator<Item = &VerificationResult> {
        self.categories
            .values()
            .chain(self.functors.values())
            .chain(self.natural_transformations.values())
    }

    /// True when every contained result is valid
    pub fn is_valid(&self) -> bool {
        self.results().all(VerificationResult::is_valid)
    }

    /// Total number of errors
    pub fn error_count(&self) -> usize {
        self.results().map(|r| r.errors().len()).sum()
    }

    /// Total number of warnings
    pub fn warning_count(&self) -> usize {
        self.results().map(|r| r.warnings().len()).sum()
    }
}

/// Verify every category, functor and natural transformation of a snapshot
///
/// A functor whose categories cannot be found, or a natural transformation
/// whose functors (or their shared source category) cannot be found, gets a
/// result holding a single error naming the missing reference.
pub fn verify_knowledge_graph(
    graph: &KnowledgeGraph,
    config: &VerificationConfig,
) -> GraphVerificationReport {
    let mut report = GraphVerificationReport::default();

    for category in graph.categories() {
        report.categories.insert(
            category.id().to_string(),
            verify_category_with(category, config),
        );
    }

    for functor in graph.functors() {
        let result = match (
            graph.category(functor.source_category()),
            graph.category(functor.target_category()),
        ) {
            (Some(source), Some(target)) => verify_functor(functor, source, target),
            (source, _) => {
                let missing = if source.is_none() {
                    functor.source_category()
                } else {
                    functor.target_category()
                };
                unresolved(format!(
                    "Functor '{}' references unknown category '{}'",
                    functor.id(),
                    missing
                ))
            }
        };
        report.functors.insert(functor.id().to_string(), result);
    }

    for nt in graph.natural_transformations() {
        report
            .natural_transformations
            .insert(nt.id().to_string(), verify_transformation_in(graph, nt));
    }

    debug!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "Knowledge graph verified"
    );
    report
}

fn verify_transformation_in(graph: &KnowledgeGraph, nt: &NaturalTransformation) -> VerificationResult {
    let Some(source_functor) = graph.functor(nt.source_functor()) else {
        return unresolved(format!(
            "Natural transformation '{}' references unknown functor '{}'",
            nt.id(),
            nt.source_functor()
        ));
    };
    let Some(target_functor) = graph.functor(nt.target_functor()) else {
        return unresolved(format!(
            "Natural transformation '{}' references unknown functor '{}'",
            nt.id(),
            nt.target_functor()
        ));
    };
    let Some(category) = graph.category(source_functor.source_category()) else {
        return unresolved(format!(
            "Natural transformation '{}' references unknown category '{}'",
            nt.id(),
            source_functor.source_category()
        ));
    };

    verify_natural_transformation(nt, source_functor, target_functor, category)
}

fn unresolved(message: String) -> VerificationResult {
    let mut result = VerificationResult::new();
    result.error(message);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Category, CategoryObject, Functor, IdMapping, Morphism};

    fn one_object(id: &str, object: &str) -> Category {
        Category::new(
            id,
            id,
            vec![CategoryObject::new(object, object, "test").unwrap()],
            vec![Morphism::identity(object).unwrap()],
        )
        .unwrap()
    }

    #[test]
    fn test_report_covers_every_entity() {
        let mut objects = IdMapping::new();
        objects.insert("a".to_string(), "b".to_string());
        let functor = Functor::new("F", "F", "A", "B", objects, IdMapping::new()).unwrap();
        let dangling = Functor::new("G", "G", "A", "Z", IdMapping::new(), IdMapping::new()).unwrap();
        let nt = NaturalTransformation::new("eta", "η", "F", "H", IdMapping::new()).unwrap();

        let graph = KnowledgeGraph::new(
            vec![one_object("A", "a"), one_object("B", "b")],
            vec![functor, dangling],
            vec![nt],
        )
        .unwrap();

        let report = graph.verify();
        assert!(report.categories["A"].is_valid());
        assert!(report.categories["B"].is_valid());
        assert!(report.functors["F"].is_valid());
        assert_eq!(
            report.functors["G"].errors(),
            ["Functor 'G' references unknown category 'Z'"]
        );
        assert!(report.natural_transformations["eta"].errors()[0].contains("unknown functor 'H'"));
        assert!(!report.is_valid());
        assert_eq!(report.error_count(), 2);
    }

    #[test]
    fn test_empty_graph_is_valid() {
        let graph = KnowledgeGraph::new(vec![], vec![], vec![]).unwrap();
        let report = graph.verify();
        assert!(report.is_valid());
        assert_eq!(report.warning_count(), 0);
    }
}
