// Copyright 2025 Cowboy AI, LLC.

//! Functor laws: total and valid object mapping, identity preservation

use tracing::debug;

use super::VerificationResult;
use crate::category::{identity_morphism_id, Category, Functor};

/// Check that `functor` is a functor from `source` to `target`
///
/// Errors:
/// - the functor declares different categories than the ones given
/// - an object of `source` has no image
/// - an image is not an object of `target`
/// - the image of `id-A` is not an identity on `F(A)`. An image found in
///   `target` must be a self-loop on `F(A)`; an image missing from `target`
///   must at least be named `id-<F(A)>`.
///
/// Warnings: morphism images missing from `target`, and mapped morphisms
/// whose image does not connect the images of their endpoints.
pub fn verify_functor(functor: &Functor, source: &Category, target: &Category) -> VerificationResult {
    debug!(
        functor = functor.id(),
        source = source.id(),
        target = target.id(),
        "Verifying functor"
    );
    let mut result = VerificationResult::new();

    check_declared_categories(functor, source, target, &mut result);
    check_object_mapping(functor, source, target, &mut result);
    check_identity_preservation(functor, source, target, &mut result);
    check_morphism_images(functor, source, target, &mut result);

    debug!(
        functor = functor.id(),
        errors = result.errors().len(),
        warnings = result.warnings().len(),
        "Functor verified"
    );
    result
}

fn check_declared_categories(
    functor: &Functor,
    source: &Category,
    target: &Category,
    result: &mut VerificationResult,
) {
    if functor.source_category() != source.id() {
        result.error(format!(
            "Functor '{}' declares source category '{}' but was checked against '{}'",
            functor.id(),
            functor.source_category(),
            source.id()
        ));
    }
    if functor.target_category() != target.id() {
        result.error(format!(
            "Functor '{}' declares target category '{}' but was checked against '{}'",
            functor.id(),
            functor.target_category(),
            target.id()
        ));
    }
}

fn check_object_mapping(
    functor: &Functor,
    source: &Category,
    target: &Category,
    result: &mut VerificationResult,
) {
    for obj in source.objects() {
        if functor.map_object(obj.id()).is_none() {
            result.error(format!(
                "Functor '{}' does not map object '{}' of category '{}'",
                functor.id(),
                obj.id(),
                source.id()
            ));
        }
    }

    for (from, to) in functor.object_mapping() {
        if !target.contains_object(to) {
            result.error(format!(
                "Functor '{}' maps object '{}' to '{}', which does not exist in category '{}'",
                functor.id(),
                from,
                to,
                target.id()
            ));
        }
    }
}

fn check_identity_preservation(
    functor: &Functor,
    source: &Category,
    target: &Category,
    result: &mut VerificationResult,
) {
    for obj in source.objects() {
        let Some(image_obj) = functor.map_object(obj.id()) else {
            continue;
        };
        let identity = identity_morphism_id(obj.id());
        let Some(image) = functor.map_morphism(&identity) else {
            continue;
        };

        let preserved = match target.morphism(image) {
            Some(morph) => morph.source() == image_obj && morph.target() == image_obj,
            None => image == identity_morphism_id(image_obj),
        };

        if !preserved {
            result.error(format!(
                "Functor '{}' does not preserve the identity of object '{}': '{}' maps to '{}', which is not the identity on '{}'",
                functor.id(),
                obj.id(),
                identity,
                image,
                image_obj
            ));
        }
    }
}

fn check_morphism_images(
    functor: &Functor,
    source: &Category,
    target: &Category,
    result: &mut VerificationResult,
) {
    for (from, to) in functor.morphism_mapping() {
        let Some(image) = target.morphism(to) else {
            result.warning(format!(
                "Functor '{}' maps morphism '{}' to '{}', which is not a morphism of category '{}'",
                functor.id(),
                from,
                to,
                target.id()
            ));
            continue;
        };
        let Some(morph) = source.morphism(from) else {
            continue;
        };

        let (Some(image_source), Some(image_target)) = (
            functor.map_object(morph.source()),
            functor.map_object(morph.target()),
        ) else {
            continue;
        };

        if image.source() != image_source || image.target() != image_target {
            result.warning(format!(
                "Functor '{}' maps morphism '{}' to '{}', which does not go from '{}' to '{}'",
                functor.id(),
                from,
                to,
                image_source,
                image_target
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{CategoryObject, IdMapping, Morphism};

    fn mapping(pairs: &[(&str, &str)]) -> IdMapping {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn discrete(id: &str, objects: &[&str]) -> Category {
        Category::new(
            id,
            id,
            objects
                .iter()
                .map(|o| CategoryObject::new(*o, *o, "test").unwrap())
                .collect(),
            objects.iter().map(|o| Morphism::identity(*o).unwrap()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_functor() {
        let source = discrete("C", &["A"]);
        let target = discrete("D", &["X"]);
        let functor = Functor::new(
            "F",
            "F",
            "C",
            "D",
            mapping(&[("A", "X")]),
            mapping(&[("id-A", "id-X")]),
        )
        .unwrap();

        let result = verify_functor(&functor, &source, &target);
        assert!(result.is_valid(), "{result}");
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn test_incomplete_and_invalid_mapping() {
        let source = discrete("C", &["A", "B"]);
        let target = discrete("D", &["X"]);
        let functor = Functor::new(
            "F",
            "F",
            "C",
            "D",
            mapping(&[("A", "Nope")]),
            IdMapping::new(),
        )
        .unwrap();

        let result = verify_functor(&functor, &source, &target);
        assert_eq!(result.errors().len(), 2);
        assert!(result.errors()[0].contains("does not map object 'B'"));
        assert!(result.errors()[1].contains("'Nope'"));
    }

    #[test]
    fn test_identity_mapped_to_unrelated_morphism() {
        let source = discrete("C", &["A"]);
        let target = Category::new(
            "D",
            "D",
            vec![
                CategoryObject::new("X", "X", "test").unwrap(),
                CategoryObject::new("Y", "Y", "test").unwrap(),
            ],
            vec![
                Morphism::identity("X").unwrap(),
                Morphism::identity("Y").unwrap(),
                Morphism::new("g", "g", "X", "Y").unwrap(),
            ],
        )
        .unwrap();
        let functor = Functor::new(
            "F",
            "F",
            "C",
            "D",
            mapping(&[("A", "X")]),
            mapping(&[("id-A", "g")]),
        )
        .unwrap();

        let result = verify_functor(&functor, &source, &target);
        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].contains("identity"));
        assert!(result.errors()[0].contains("'A'"));
    }

    #[test]
    fn test_unresolved_identity_image_follows_convention() {
        let source = discrete("C", &["A"]);
        let target = Category::new(
            "D",
            "D",
            vec![CategoryObject::new("X", "X", "test").unwrap()],
            vec![],
        )
        .unwrap();

        let by_name = Functor::new(
            "F",
            "F",
            "C",
            "D",
            mapping(&[("A", "X")]),
            mapping(&[("id-A", "id-X")]),
        )
        .unwrap();
        let result = verify_functor(&by_name, &source, &target);
        assert!(result.is_valid());
        assert_eq!(result.warnings().len(), 1);

        let wrong_name = Functor::new(
            "F",
            "F",
            "C",
            "D",
            mapping(&[("A", "X")]),
            mapping(&[("id-A", "ghost")]),
        )
        .unwrap();
        let result = verify_functor(&wrong_name, &source, &target);
        assert!(!result.is_valid());
        assert!(result.errors()[0].contains("identity"));
    }

    #[test]
    fn test_declared_category_mismatch() {
        let source = discrete("C", &[]);
        let target = discrete("D", &[]);
        let functor = Functor::new("F", "F", "C", "E", IdMapping::new(), IdMapping::new()).unwrap();

        let result = verify_functor(&functor, &source, &target);
        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].contains("target category 'E'"));
    }

    #[test]
    fn test_morphism_image_with_wrong_endpoints_warns() {
        let source = Category::new(
            "C",
            "C",
            vec![
                CategoryObject::new("A", "A", "test").unwrap(),
                CategoryObject::new("B", "B", "test").unwrap(),
            ],
            vec![
                Morphism::identity("A").unwrap(),
                Morphism::identity("B").unwrap(),
                Morphism::new("f", "f", "A", "B").unwrap(),
            ],
        )
        .unwrap();
        let target = Category::new(
            "D",
            "D",
            vec![
                CategoryObject::new("X", "X", "test").unwrap(),
                CategoryObject::new("Y", "Y", "test").unwrap(),
            ],
            vec![
                Morphism::identity("X").unwrap(),
                Morphism::identity("Y").unwrap(),
                Morphism::new("back", "back", "Y", "X").unwrap(),
            ],
        )
        .unwrap();
        let functor = Functor::new(
            "F",
            "F",
            "C",
            "D",
            mapping(&[("A", "X"), ("B", "Y")]),
            mapping(&[("f", "back")]),
        )
        .unwrap();

        let result = verify_functor(&functor, &source, &target);
        assert!(result.is_valid());
        assert_eq!(result.warnings().len(), 1);
        assert!(result.warnings()[0].contains("'back'"));
    }
}
