// Copyright 2025 Cowboy AI, LLC.

//! Categories - objects plus the morphisms between them
//!
//! A category is stored exactly as the loader supplied it: ordered objects,
//! ordered morphisms. Nothing here checks that every object has an identity
//! or that morphism endpoints exist; that is the job of
//! [`verify_category`](crate::verification::verify_category).

use schemars::JsonSchema;
use serde::Serialize;

use super::morphism::Morphism;
use super::object::CategoryObject;
use crate::errors::{require_non_empty, CategoryResult};

/// A category of the knowledge graph
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    id: String,
    name: String,
    objects: Vec<CategoryObject>,
    morphisms: Vec<Morphism>,
}

impl Category {
    /// Create a new category from its objects and morphisms
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        objects: Vec<CategoryObject>,
        morphisms: Vec<Morphism>,
    ) -> CategoryResult<Self> {
        let id = id.into();
        let name = name.into();
        require_non_empty("Category", "id", &id)?;
        require_non_empty("Category", "name", &name)?;

        Ok(Self {
            id,
            name,
            objects,
            morphisms,
        })
    }

    /// Category id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Category name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Objects in load order
    pub fn objects(&self) -> &[CategoryObject] {
        &self.objects
    }

    /// Morphisms in load order
    pub fn morphisms(&self) -> &[Morphism] {
        &self.morphisms
    }

    /// Look up an object by id
    pub fn object(&self, id: &str) -> Option<&CategoryObject> {
        self.objects.iter().find(|obj| obj.id() == id)
    }

    /// Look up a morphism by id
    pub fn morphism(&self, id: &str) -> Option<&Morphism> {
        self.morphisms.iter().find(|morph| morph.id() == id)
    }

    /// True when an object with this id belongs to the category
    pub fn contains_object(&self, id: &str) -> bool {
        self.object(id).is_some()
    }

    /// All morphisms leaving `source`
    pub fn morphisms_from<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a Morphism> {
        self.morphisms.iter().filter(move |morph| morph.source() == source)
    }

    /// All morphisms entering `target`
    pub fn morphisms_to<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a Morphism> {
        self.morphisms.iter().filter(move |morph| morph.target() == target)
    }

    /// All morphisms `source -> target`
    pub fn morphisms_between<'a>(
        &'a self,
        source: &'a str,
        target: &'a str,
    ) -> impl Iterator<Item = &'a Morphism> {
        self.morphisms_from(source)
            .filter(move |morph| morph.target() == target)
    }

    /// First identity (self-loop) on an object, preferring the canonical one
    pub fn identity_for(&self, object_id: &str) -> Option<&Morphism> {
        let mut loops = self
            .morphisms
            .iter()
            .filter(|morph| morph.source() == object_id && morph.target() == object_id);
        let first = loops.next()?;
        if first.is_canonical_identity() {
            return Some(first);
        }
        loops
            .find(|morph| morph.is_canonical_identity())
            .or(Some(first))
    }
}
