// Copyright 2025 Cowboy AI, LLC.

//! Snapshot of a whole knowledge graph
//!
//! A loader collects every category, functor and natural transformation it
//! found and hands them over as one [`KnowledgeGraph`]. The snapshot only
//! refuses duplicate ids, since those make lookups ambiguous; everything
//! else is left to verification.

use std::collections::HashSet;

use crate::category::{Category, Functor, Morphism, NaturalTransformation};
use crate::config::{KnowledgeGraphConfig, VerificationConfig};
use crate::errors::{CategoryError, CategoryResult};
use crate::traversal::{self, DomainPath};
use crate::verification::{verify_knowledge_graph, GraphVerificationReport};

/// Immutable collection of everything a service call may need
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeGraph {
    categories: Vec<Category>,
    functors: Vec<Functor>,
    natural_transformations: Vec<NaturalTransformation>,
    config: KnowledgeGraphConfig,
}

fn ensure_unique<'a>(
    entity: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> CategoryResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CategoryError::DuplicateId {
                entity,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

impl KnowledgeGraph {
    /// Build a snapshot with the default configuration
    pub fn new(
        categories: Vec<Category>,
        functors: Vec<Functor>,
        natural_transformations: Vec<NaturalTransformation>,
    ) -> CategoryResult<Self> {
        ensure_unique("Category", categories.iter().map(Category::id))?;
        ensure_unique("Functor", functors.iter().map(Functor::id))?;
        ensure_unique(
            "NaturalTransformation",
            natural_transformations.iter().map(NaturalTransformation::id),
        )?;

        Ok(Self {
            categories,
            functors,
            natural_transformations,
            config: KnowledgeGraphConfig::default(),
        })
    }

    /// Replace the configuration, returning a new snapshot
    pub fn with_config(mut self, config: KnowledgeGraphConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &KnowledgeGraphConfig {
        &self.config
    }

    /// All categories
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All functors
    pub fn functors(&self) -> &[Functor] {
        &self.functors
    }

    /// All natural transformations
    pub fn natural_transformations(&self) -> &[NaturalTransformation] {
        &self.natural_transformations
    }

    /// Category by id
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id() == id)
    }

    /// Functor by id
    pub fn functor(&self, id: &str) -> Option<&Functor> {
        self.functors.iter().find(|functor| functor.id() == id)
    }

    /// Natural transformation by id
    pub fn natural_transformation(&self, id: &str) -> Option<&NaturalTransformation> {
        self.natural_transformations
            .iter()
            .find(|nt| nt.id() == id)
    }

    /// First category containing an object
    pub fn category_of_object(&self, object_id: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.contains_object(object_id))
    }

    /// Shortest path between two objects of a category
    pub fn find_path(&self, category_id: &str, source: &str, target: &str) -> Vec<Morphism> {
        self.category(category_id)
            .map(|category| traversal::find_path(source, target, category))
            .unwrap_or_default()
    }

    /// All simple paths, bounded by the configured depth
    pub fn find_all_paths(&self, category_id: &str, source: &str, target: &str) -> Vec<Vec<Morphism>> {
        self.category(category_id)
            .map(|category| {
                traversal::find_all_paths(
                    source,
                    target,
                    category,
                    Some(self.config.traversal.max_depth),
                )
            })
            .unwrap_or_default()
    }

    /// Routes from an object into another category
    pub fn find_domain_path(&self, source_object: &str, target_category: &str) -> Vec<DomainPath> {
        traversal::find_domain_path(
            source_object,
            target_category,
            &self.categories,
            &self.functors,
            &self.natural_transformations,
        )
    }

    /// Verify every entity using the configured checks
    pub fn verify(&self) -> GraphVerificationReport {
        self.verify_with(&self.config.verification)
    }

    /// Verify every entity with explicit checks
    pub fn verify_with(&self, config: &VerificationConfig) -> GraphVerificationReport {
        verify_knowledge_graph(self, config)
    }
}
