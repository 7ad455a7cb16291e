// Copyright 2025 Cowboy AI, LLC.

//! Typing of natural transformation components
//!
//! Only `η_A : F(A) -> G(A)` is checked for each object `A`. The commuting
//! square `G(f) ∘ η_A = η_B ∘ F(f)` is not.

use tracing::debug;

use super::VerificationResult;
use crate::category::{Category, Functor, NaturalTransformation};

/// Check the components of `nt: source_functor ⇒ target_functor`
///
/// For every object `A` of `category` a component must be registered, must
/// name a morphism of `category`, and must have source `F(A)` and target
/// `G(A)` wherever those images are defined. Passing functors other than the
/// ones `nt` declares is also an error.
pub fn verify_natural_transformation(
    nt: &NaturalTransformation,
    source_functor: &Functor,
    target_functor: &Functor,
    category: &Category,
) -> VerificationResult {
    debug!(
        natural_transformation = nt.id(),
        category = category.id(),
        "Verifying natural transformation"
    );
    let mut result = VerificationResult::new();

    if nt.source_functor() != source_functor.id() {
        result.error(format!(
            "Natural transformation '{}' declares source functor '{}' but was checked against '{}'",
            nt.id(),
            nt.source_functor(),
            source_functor.id()
        ));
    }
    if nt.target_functor() != target_functor.id() {
        result.error(format!(
            "Natural transformation '{}' declares target functor '{}' but was checked against '{}'",
            nt.id(),
            nt.target_functor(),
            target_functor.id()
        ));
    }

    for obj in category.objects() {
        let Some(component_id) = nt.component(obj.id()) else {
            result.error(format!(
                "Natural transformation '{}' has no component for object '{}'",
                nt.id(),
                obj.id()
            ));
            continue;
        };

        let Some(component) = category.morphism(component_id) else {
            result.error(format!(
                "Component '{}' of natural transformation '{}' for object '{}' is not a morphism of category '{}'",
                component_id,
                nt.id(),
                obj.id(),
                category.id()
            ));
            continue;
        };

        let (Some(expected_source), Some(expected_target)) = (
            source_functor.map_object(obj.id()),
            target_functor.map_object(obj.id()),
        ) else {
            continue;
        };

        if component.source() != expected_source {
            result.error(format!(
                "Component '{}' for object '{}' has source '{}' but {}({}) is '{}'",
                component_id,
                obj.id(),
                component.source(),
                source_functor.id(),
                obj.id(),
                expected_source
            ));
        }
        if component.target() != expected_target {
            result.error(format!(
                "Component '{}' for object '{}' has target '{}' but {}({}) is '{}'",
                component_id,
                obj.id(),
                component.target(),
                target_functor.id(),
                obj.id(),
                expected_target
            ));
        }
    }

    debug!(
        natural_transformation = nt.id(),
        errors = result.errors().len(),
        "Natural transformation verified"
    );
    result
}
