// Copyright 2025 Cowboy AI, LLC.

//! Morphisms between objects of a category
//!
//! A morphism is a directed edge `source -> target`. A self-loop is treated
//! as an identity morphism, and the canonical identity on object `x` carries
//! the id `id-x`. Verification and traversal both rely on this convention;
//! [`identity_morphism_id`] and [`Morphism::is_identity`] are the only places
//! that spell it out.

use schemars::JsonSchema;
use serde::Serialize;

use super::object::Metadata;
use crate::errors::{require_non_empty, CategoryResult};

const IDENTITY_PREFIX: &str = "id-";

/// Id of the canonical identity morphism on `object_id`
pub fn identity_morphism_id(object_id: &str) -> String {
    format!("{IDENTITY_PREFIX}{object_id}")
}

/// A directed morphism between two objects
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Morphism {
    id: String,
    name: String,
    source: String,
    target: String,
    metadata: Metadata,
}

impl Morphism {
    /// Create a new morphism with empty metadata
    ///
    /// Endpoints are not checked against any category here.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> CategoryResult<Self> {
        let id = id.into();
        let name = name.into();
        let source = source.into();
        let target = target.into();
        require_non_empty("Morphism", "id", &id)?;
        require_non_empty("Morphism", "name", &name)?;
        require_non_empty("Morphism", "source", &source)?;
        require_non_empty("Morphism", "target", &target)?;

        Ok(Self {
            id,
            name,
            source,
            target,
            metadata: Metadata::new(),
        })
    }

    /// Canonical identity morphism `id-<object>` on an object
    pub fn identity(object_id: impl Into<String>) -> CategoryResult<Self> {
        let object_id = object_id.into();
        require_non_empty("Morphism", "source", &object_id)?;
        let id = identity_morphism_id(&object_id);
        Self::new(id.clone(), id, object_id.clone(), object_id)
    }

    /// Build from parts already known to be non-empty
    pub(crate) fn from_parts(
        id: String,
        name: String,
        source: String,
        target: String,
        metadata: Metadata,
    ) -> Self {
        debug_assert!(!id.is_empty() && !name.is_empty());
        debug_assert!(!source.is_empty() && !target.is_empty());
        Self {
            id,
            name,
            source,
            target,
            metadata,
        }
    }

    /// Replace the metadata, returning a new morphism
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Morphism id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source object id
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Target object id
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Read-only view of the metadata
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Self-loops count as identities
    pub fn is_identity(&self) -> bool {
        self.source == self.target
    }

    /// A self-loop whose id follows the `id-<object>` convention
    pub fn is_canonical_identity(&self) -> bool {
        self.is_identity() && self.id == identity_morphism_id(&self.source)
    }

    /// True when `self` can be followed by `next`
    pub fn is_composable_with(&self, next: &Morphism) -> bool {
        self.target == next.source
    }
}
