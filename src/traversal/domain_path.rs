// Copyright 2025 Cowboy AI, LLC.

//! Cross-category routes through functors
//!
//! The search space is the product of categories and objects: a state is a
//! `(category id, object id)` pair and each state is expanded at most once.
//! A functor moves a state from its source category into its target
//! category when it maps the current object. A natural transformation does
//! not move the state; it only extends a route that already sits in the
//! target category.

use std::collections::{HashSet, VecDeque};

use schemars::JsonSchema;
use serde::Serialize;
use tracing::{debug, trace};

use super::DEFAULT_MAX_DEPTH;
use crate::category::{Category, Functor, NaturalTransformation};

/// One hop of a cross-category route
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "kind", content = "entity", rename_all = "camelCase")]
pub enum DomainStep {
    /// Moved to another category along a functor
    Functor(Functor),
    /// Applied a natural transformation component
    NaturalTransformation(NaturalTransformation),
}

impl DomainStep {
    /// Id of the functor or natural transformation
    pub fn id(&self) -> &str {
        match self {
            DomainStep::Functor(functor) => functor.id(),
            DomainStep::NaturalTransformation(nt) => nt.id(),
        }
    }

    /// Display name of the functor or natural transformation
    pub fn name(&self) -> &str {
        match self {
            DomainStep::Functor(functor) => functor.name(),
            DomainStep::NaturalTransformation(nt) => nt.name(),
        }
    }
}

/// A route from an object into a target category
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DomainPath {
    /// Hops in the order they are applied
    pub steps: Vec<DomainStep>,
    /// Object the route ends on, in the target category
    pub result_object: String,
}

impl DomainPath {
    /// Number of hops
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True for the zero-hop route (already in the target category)
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[derive(Clone, Copy)]
enum StepRef<'a> {
    Functor(&'a Functor),
    Transformation(&'a NaturalTransformation),
}

struct SearchState<'a> {
    category: &'a str,
    object: &'a str,
    steps: Vec<StepRef<'a>>,
}

fn complete(steps: &[StepRef<'_>], result_object: &str) -> DomainPath {
    DomainPath {
        steps: steps
            .iter()
            .map(|step| match step {
                StepRef::Functor(functor) => DomainStep::Functor((*functor).clone()),
                StepRef::Transformation(nt) => DomainStep::NaturalTransformation((*nt).clone()),
            })
            .collect(),
        result_object: result_object.to_string(),
    }
}

fn extended<'a>(steps: &[StepRef<'a>], step: StepRef<'a>) -> Vec<StepRef<'a>> {
    let mut next = Vec::with_capacity(steps.len() + 1);
    next.extend_from_slice(steps);
    next.push(step);
    next
}

/// Routes from `source_object` into `target_category`, fewest hops first
///
/// The source object is located in the first category that contains it; if
/// none does, the result is empty. When that category already is the target,
/// the single zero-hop route is returned. Routes hold at most
/// [`DEFAULT_MAX_DEPTH`] hops.
pub fn find_domain_path(
    source_object: &str,
    target_category: &str,
    categories: &[Category],
    functors: &[Functor],
    natural_transformations: &[NaturalTransformation],
) -> Vec<DomainPath> {
    debug!(source_object, target_category, "Finding cross-category path");

    let Some(start) = categories
        .iter()
        .find(|category| category.contains_object(source_object))
    else {
        return Vec::new();
    };

    if start.id() == target_category {
        return vec![complete(&[], source_object)];
    }

    let mut paths = Vec::new();
    let mut visited: HashSet<(&str, &str)> = HashSet::from([(start.id(), source_object)]);
    let mut queue = VecDeque::from([SearchState {
        category: start.id(),
        object: source_object,
        steps: Vec::new(),
    }]);

    while let Some(state) = queue.pop_front() {
        trace!(
            category = state.category,
            object = state.object,
            depth = state.steps.len(),
            "Expanding state"
        );

        if state.steps.len() >= DEFAULT_MAX_DEPTH {
            continue;
        }

        for functor in functors
            .iter()
            .filter(|functor| functor.source_category() == state.category)
        {
            let Some(mapped) = functor.map_object(state.object) else {
                continue;
            };
            let steps = extended(&state.steps, StepRef::Functor(functor));

            if functor.target_category() == target_category {
                paths.push(complete(&steps, mapped));
            }

            if visited.insert((functor.target_category(), mapped)) {
                queue.push_back(SearchState {
                    category: functor.target_category(),
                    object: mapped,
                    steps,
                });
            }
        }

        if state.category == target_category {
            for nt in natural_transformations
                .iter()
                .filter(|nt| nt.component(state.object).is_some())
            {
                let steps = extended(&state.steps, StepRef::Transformation(nt));
                paths.push(complete(&steps, state.object));
            }
        }
    }

    paths.sort_by_key(DomainPath::len);
    debug!(count = paths.len(), "Cross-category search finished");
    paths
}
