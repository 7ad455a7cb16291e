// Copyright 2025 Cowboy AI, LLC.

//! Category laws: identities, well-formed morphisms, composition closure

use std::collections::HashSet;

use tracing::debug;

use super::VerificationResult;
use crate::category::Category;
use crate::config::VerificationConfig;

/// Check a category with the default configuration
///
/// Errors: an object without an identity (self-loop) morphism, a morphism
/// whose source or target is not an object of the category.
/// Warnings: a composable pair `f: A -> B`, `g: B -> C` of non-identity
/// morphisms with no morphism `A -> C`.
pub fn verify_category(category: &Category) -> VerificationResult {
    verify_category_with(category, &VerificationConfig::default())
}

/// Check a category, optionally skipping the composition closure scan
pub fn verify_category_with(category: &Category, config: &VerificationConfig) -> VerificationResult {
    debug!(category = category.id(), "Verifying category");
    let mut result = VerificationResult::new();

    check_identities(category, &mut result);
    check_endpoints(category, &mut result);
    if config.composition_closure {
        check_composition_closure(category, &mut result);
    }

    debug!(
        category = category.id(),
        errors = result.errors().len(),
        warnings = result.warnings().len(),
        "Category verified"
    );
    result
}

fn check_identities(category: &Category, result: &mut VerificationResult) {
    for obj in category.objects() {
        if category.identity_for(obj.id()).is_none() {
            result.error(format!(
                "Object '{}' in category '{}' has no identity morphism",
                obj.id(),
                category.id()
            ));
        }
    }
}

fn check_endpoints(category: &Category, result: &mut VerificationResult) {
    for morph in category.morphisms() {
        if !category.contains_object(morph.source()) {
            result.error(format!(
                "Morphism '{}' has source '{}', which is not an object of category '{}'",
                morph.id(),
                morph.source(),
                category.id()
            ));
        }
        if !category.contains_object(morph.target()) {
            result.error(format!(
                "Morphism '{}' has target '{}', which is not an object of category '{}'",
                morph.id(),
                morph.target(),
                category.id()
            ));
        }
    }
}

// O(m²) over non-identity morphisms
fn check_composition_closure(category: &Category, result: &mut VerificationResult) {
    let arrows: HashSet<(&str, &str)> = category
        .morphisms()
        .iter()
        .map(|morph| (morph.source(), morph.target()))
        .collect();
    let non_identities: Vec<_> = category
        .morphisms()
        .iter()
        .filter(|morph| !morph.is_identity())
        .collect();

    for f in &non_identities {
        for g in non_identities.iter().filter(|g| f.is_composable_with(g)) {
            if !arrows.contains(&(f.source(), g.target())) {
                result.warning(format!(
                    "Missing composite {}∘{}: no morphism from '{}' to '{}' composing '{}' and '{}'",
                    g.name(),
                    f.name(),
                    f.source(),
                    g.target(),
                    f.id(),
                    g.id()
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{CategoryObject, Morphism};

    fn objects(ids: &[&str]) -> Vec<CategoryObject> {
        ids.iter()
            .map(|id| CategoryObject::new(*id, *id, "test").unwrap())
            .collect()
    }

    fn arrow(id: &str, source: &str, target: &str) -> Morphism {
        Morphism::new(id, id, source, target).unwrap()
    }

    #[test]
    fn test_valid_category() {
        let category = Category::new(
            "C",
            "C",
            objects(&["A", "B"]),
            vec![
                Morphism::identity("A").unwrap(),
                Morphism::identity("B").unwrap(),
                arrow("f", "A", "B"),
            ],
        )
        .unwrap();

        let result = verify_category(&category);
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn test_missing_identity_is_one_error() {
        let category = Category::new(
            "C",
            "C",
            objects(&["A", "B"]),
            vec![Morphism::identity("A").unwrap(), arrow("f", "A", "B")],
        )
        .unwrap();

        let result = verify_category(&category);
        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].contains("'B'"));
        assert!(result.errors()[0].contains("identity"));
    }

    #[test]
    fn test_dangling_endpoints() {
        let category = Category::new(
            "C",
            "C",
            objects(&["A"]),
            vec![Morphism::identity("A").unwrap(), arrow("f", "X", "Y")],
        )
        .unwrap();

        let result = verify_category(&category);
        assert_eq!(result.errors().len(), 2);
        assert!(result.errors()[0].contains("source 'X'"));
        assert!(result.errors()[1].contains("target 'Y'"));
    }

    #[test]
    fn test_closure_warning_is_not_fatal() {
        let category = Category::new(
            "C",
            "C",
            objects(&["A", "B", "D"]),
            vec![
                Morphism::identity("A").unwrap(),
                Morphism::identity("B").unwrap(),
                Morphism::identity("D").unwrap(),
                arrow("f", "A", "B"),
                arrow("g", "B", "D"),
            ],
        )
        .unwrap();

        let result = verify_category(&category);
        assert!(result.is_valid());
        assert_eq!(result.warnings().len(), 1);
        assert!(result.warnings()[0].contains("g∘f"));

        let quiet = verify_category_with(
            &category,
            &VerificationConfig {
                composition_closure: false,
            },
        );
        assert!(quiet.warnings().is_empty());
    }

    #[test]
    fn test_round_trip_closed_by_identity() {
        let category = Category::new(
            "C",
            "C",
            objects(&["A", "B"]),
            vec![
                Morphism::identity("A").unwrap(),
                Morphism::identity("B").unwrap(),
                arrow("f", "A", "B"),
                arrow("g", "B", "A"),
            ],
        )
        .unwrap();

        // g∘f: A -> A and f∘g: B -> B both exist as identities
        assert!(verify_category(&category).warnings().is_empty());
    }
}
