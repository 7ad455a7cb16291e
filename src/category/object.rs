// Copyright 2025 Cowboy AI, LLC.

//! Objects of a category
//!
//! An object is a node of the knowledge graph: a concept with an id that is
//! unique inside its category, a human title and a free-text domain tag.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::Serialize;

use crate::errors::{require_non_empty, CategoryResult};

/// Opaque key/value annotations carried by objects and morphisms
pub type Metadata = IndexMap<String, serde_json::Value>;

/// An object in a category
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryObject {
    id: String,
    title: String,
    domain: String,
    metadata: Metadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

impl CategoryObject {
    /// Create a new object with empty metadata and no content
    ///
    /// # Arguments
    /// * `id` - Identifier, unique within the owning category
    /// * `title` - Human readable title
    /// * `domain` - Classification tag (e.g. "mathematics", "software")
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        domain: impl Into<String>,
    ) -> CategoryResult<Self> {
        let id = id.into();
        let title = title.into();
        let domain = domain.into();
        require_non_empty("CategoryObject", "id", &id)?;
        require_non_empty("CategoryObject", "title", &title)?;
        require_non_empty("CategoryObject", "domain", &domain)?;

        Ok(Self {
            id,
            title,
            domain,
            metadata: Metadata::new(),
            content: None,
        })
    }

    /// Replace the metadata, returning a new object
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Attach free-form content, returning a new object
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Object id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Object title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Classification tag
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Read-only view of the metadata
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Optional content body
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_creation() {
        let obj = CategoryObject::new("set", "Set", "mathematics").unwrap();
        assert_eq!(obj.id(), "set");
        assert_eq!(obj.title(), "Set");
        assert_eq!(obj.domain(), "mathematics");
        assert!(obj.metadata().is_empty());
        assert_eq!(obj.content(), None);
    }

    #[test]
    fn test_empty_fields_rejected() {
        for (id, title, domain, field) in [
            ("", "Set", "math", "id"),
            ("set", "", "math", "title"),
            ("set", "Set", "", "domain"),
        ] {
            let err = CategoryObject::new(id, title, domain).unwrap_err();
            assert!(err.to_string().contains(field), "{err}");
        }
    }

    #[test]
    fn test_builders_produce_new_values() {
        let base = CategoryObject::new("set", "Set", "mathematics").unwrap();
        let mut metadata = Metadata::new();
        metadata.insert("tags".to_string(), json!(["foundations"]));

        let annotated = base
            .clone()
            .with_metadata(metadata.clone())
            .with_content("A collection of elements");

        metadata.insert("mutated".to_string(), json!(true));

        assert!(base.metadata().is_empty());
        assert_eq!(annotated.metadata().len(), 1);
        assert_eq!(annotated.content(), Some("A collection of elements"));
    }

    #[test]
    fn test_serializes_without_missing_content() {
        let obj = CategoryObject::new("set", "Set", "mathematics").unwrap();
        let value = serde_json::to_value(&obj).unwrap();
        assert_eq!(value["id"], "set");
        assert!(value.get("content").is_none());
    }
}
