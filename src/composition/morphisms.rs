// Copyright 2025 Cowboy AI, LLC.

//! Morphism composition

use serde_json::json;

use super::{composed_id, composed_name};
use crate::category::{Metadata, Morphism};

/// Metadata key recording which morphisms a composite was built from
pub const COMPOSED_FROM_KEY: &str = "composedFrom";

/// Compose `f: A -> B` with `g: B -> C` into `g∘f: A -> C`
///
/// Returns `None` when `f.target != g.source`.
pub fn compose_morphisms(f: &Morphism, g: &Morphism) -> Option<Morphism> {
    if !f.is_composable_with(g) {
        return None;
    }

    let mut metadata = Metadata::new();
    metadata.insert(COMPOSED_FROM_KEY.to_string(), json!([f.id(), g.id()]));

    Some(Morphism::from_parts(
        composed_id(f.id(), g.id()),
        composed_name(f.name(), g.name()),
        f.source().to_string(),
        g.target().to_string(),
        metadata,
    ))
}

/// Compose a path of morphisms left to right
///
/// An empty slice or any adjacent pair that does not compose yields `None`.
/// A single morphism is returned unchanged.
pub fn compose_morphism_chain(chain: &[Morphism]) -> Option<Morphism> {
    let (first, rest) = chain.split_first()?;
    rest.iter()
        .try_fold(first.clone(), |acc, next| compose_morphisms(&acc, next))
}
