// Copyright 2025 Cowboy AI, LLC.

//! Natural transformations between functors
//!
//! A natural transformation `η: F ⇒ G` picks, for every object `A` of the
//! shared source category, a component morphism `η_A : F(A) -> G(A)`.
//! Components are stored by id; whether they type-check is decided by
//! [`verify_natural_transformation`](crate::verification::verify_natural_transformation).

use schemars::JsonSchema;
use serde::Serialize;

use super::functor::IdMapping;
use crate::errors::{require_non_empty, CategoryResult};

/// A natural transformation between two functors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NaturalTransformation {
    id: String,
    name: String,
    source_functor: String,
    target_functor: String,
    components: IdMapping,
}

impl NaturalTransformation {
    /// Create a new natural transformation
    ///
    /// # Arguments
    /// * `source_functor` - Id of `F`
    /// * `target_functor` - Id of `G`
    /// * `components` - Object id to component morphism id
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        source_functor: impl Into<String>,
        target_functor: impl Into<String>,
        components: IdMapping,
    ) -> CategoryResult<Self> {
        let id = id.into();
        let name = name.into();
        let source_functor = source_functor.into();
        let target_functor = target_functor.into();
        require_non_empty("NaturalTransformation", "id", &id)?;
        require_non_empty("NaturalTransformation", "name", &name)?;
        require_non_empty("NaturalTransformation", "sourceFunctor", &source_functor)?;
        require_non_empty("NaturalTransformation", "targetFunctor", &target_functor)?;

        Ok(Self {
            id,
            name,
            source_functor,
            target_functor,
            components,
        })
    }

    /// Transformation id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Id of the source functor
    pub fn source_functor(&self) -> &str {
        &self.source_functor
    }

    /// Id of the target functor
    pub fn target_functor(&self) -> &str {
        &self.target_functor
    }

    /// Read-only view of the components
    pub fn components(&self) -> &IdMapping {
        &self.components
    }

    /// Component morphism id for an object
    pub fn component(&self, object_id: &str) -> Option<&str> {
        self.components.get(object_id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_lookup() {
        let mut components = IdMapping::new();
        components.insert("A".to_string(), "eta-A".to_string());
        let nt = NaturalTransformation::new("eta", "η", "F", "G", components).unwrap();

        assert_eq!(nt.component("A"), Some("eta-A"));
        assert_eq!(nt.component("B"), None);
        assert_eq!(nt.source_functor(), "F");
        assert_eq!(nt.target_functor(), "G");
    }

    #[test]
    fn test_empty_functor_reference_rejected() {
        let err = NaturalTransformation::new("eta", "η", "F", "", IdMapping::new()).unwrap_err();
        assert!(err.is_validation_error());
        assert!(err.to_string().contains("targetFunctor"));
    }
}
