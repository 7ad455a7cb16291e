// Copyright 2025 Cowboy AI, LLC.

//! Functors between categories
//!
//! A functor is stored as two id mappings: objects of the source category to
//! objects of the target category, and morphisms to morphisms. The mappings
//! are meant to be total but loaders may hand over partial ones, so lookups
//! return `Option`.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::Serialize;

use crate::errors::{require_non_empty, CategoryResult};

/// Id-to-id mapping used by functors and natural transformations
pub type IdMapping = IndexMap<String, String>;

/// A functor between two categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Functor {
    id: String,
    name: String,
    source_category: String,
    target_category: String,
    object_mapping: IdMapping,
    morphism_mapping: IdMapping,
}

impl Functor {
    /// Create a new functor
    ///
    /// # Arguments
    /// * `source_category` - Id of the category being mapped
    /// * `target_category` - Id of the category mapped into
    /// * `object_mapping` - Object id to object id
    /// * `morphism_mapping` - Morphism id to morphism id
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        source_category: impl Into<String>,
        target_category: impl Into<String>,
        object_mapping: IdMapping,
        morphism_mapping: IdMapping,
    ) -> CategoryResult<Self> {
        let id = id.into();
        let name = name.into();
        let source_category = source_category.into();
        let target_category = target_category.into();
        require_non_empty("Functor", "id", &id)?;
        require_non_empty("Functor", "name", &name)?;
        require_non_empty("Functor", "sourceCategory", &source_category)?;
        require_non_empty("Functor", "targetCategory", &target_category)?;

        Ok(Self::from_parts(
            id,
            name,
            source_category,
            target_category,
            object_mapping,
            morphism_mapping,
        ))
    }

    pub(crate) fn from_parts(
        id: String,
        name: String,
        source_category: String,
        target_category: String,
        object_mapping: IdMapping,
        morphism_mapping: IdMapping,
    ) -> Self {
        Self {
            id,
            name,
            source_category,
            target_category,
            object_mapping,
            morphism_mapping,
        }
    }

    /// Functor id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Id of the source category
    pub fn source_category(&self) -> &str {
        &self.source_category
    }

    /// Id of the target category
    pub fn target_category(&self) -> &str {
        &self.target_category
    }

    /// Read-only view of the object mapping
    pub fn object_mapping(&self) -> &IdMapping {
        &self.object_mapping
    }

    /// Read-only view of the morphism mapping
    pub fn morphism_mapping(&self) -> &IdMapping {
        &self.morphism_mapping
    }

    /// Image of an object, if mapped
    pub fn map_object(&self, object_id: &str) -> Option<&str> {
        self.object_mapping.get(object_id).map(String::as_str)
    }

    /// Image of a morphism, if mapped
    pub fn map_morphism(&self, morphism_id: &str) -> Option<&str> {
        self.morphism_mapping.get(morphism_id).map(String::as_str)
    }

    /// True when source and target category coincide
    pub fn is_endofunctor(&self) -> bool {
        self.source_category == self.target_category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(pairs: &[(&str, &str)]) -> IdMapping {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_functor_mapping_lookup() {
        let functor = Functor::new(
            "F",
            "Forget",
            "Grp",
            "Set",
            mapping(&[("G", "S")]),
            mapping(&[("id-G", "id-S")]),
        )
        .unwrap();

        assert_eq!(functor.map_object("G"), Some("S"));
        assert_eq!(functor.map_object("H"), None);
        assert_eq!(functor.map_morphism("id-G"), Some("id-S"));
        assert!(!functor.is_endofunctor());
    }

    #[test]
    fn test_caller_mapping_is_moved_in() {
        let mut objects = mapping(&[("G", "S")]);
        let functor = Functor::new("F", "F", "Grp", "Set", objects.clone(), IdMapping::new()).unwrap();
        objects.insert("H".to_string(), "T".to_string());
        assert_eq!(functor.object_mapping().len(), 1);
    }

    #[test]
    fn test_empty_category_reference_rejected() {
        let err = Functor::new("F", "F", "", "Set", IdMapping::new(), IdMapping::new()).unwrap_err();
        assert!(err.to_string().contains("sourceCategory"));
        let err = Functor::new("F", "F", "Grp", "", IdMapping::new(), IdMapping::new()).unwrap_err();
        assert!(err.to_string().contains("targetCategory"));
    }
}
