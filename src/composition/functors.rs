// Copyright 2025 Cowboy AI, LLC.

//! Functor composition

use super::{composed_id, composed_name};
use crate::category::{Category, Functor, IdMapping};

/// Compose `F: C -> D` with `G: D -> E` into `G∘F: C -> E`
///
/// Returns `None` when `F.targetCategory != G.sourceCategory`. An entry
/// `a -> b` of `F` whose image `b` is not mapped by `G` is left out of the
/// composite without any diagnostic.
pub fn compose_functors(first: &Functor, second: &Functor) -> Option<Functor> {
    if first.target_category() != second.source_category() {
        return None;
    }

    Some(Functor::from_parts(
        composed_id(first.id(), second.id()),
        composed_name(first.name(), second.name()),
        first.source_category().to_string(),
        second.target_category().to_string(),
        chain_mapping(first.object_mapping(), second.object_mapping()),
        chain_mapping(first.morphism_mapping(), second.morphism_mapping()),
    ))
}

/// Compose a sequence of functors left to right
///
/// An empty slice or any adjacent pair that does not compose yields `None`.
pub fn compose_functor_chain(chain: &[Functor]) -> Option<Functor> {
    let (first, rest) = chain.split_first()?;
    rest.iter()
        .try_fold(first.clone(), |acc, next| compose_functors(&acc, next))
}

/// Identity functor on a category
///
/// Maps every object and every morphism to itself.
pub fn identity_functor(category: &Category) -> Functor {
    let objects = category
        .objects()
        .iter()
        .map(|obj| (obj.id().to_string(), obj.id().to_string()))
        .collect();
    let morphisms = category
        .morphisms()
        .iter()
        .map(|morph| (morph.id().to_string(), morph.id().to_string()))
        .collect();

    Functor::from_parts(
        format!("id-{}", category.id()),
        format!("Id({})", category.name()),
        category.id().to_string(),
        category.id().to_string(),
        objects,
        morphisms,
    )
}

fn chain_mapping(first: &IdMapping, second: &IdMapping) -> IdMapping {
    first
        .iter()
        .filter_map(|(from, via)| second.get(via).map(|to| (from.clone(), to.clone())))
        .collect()
}
