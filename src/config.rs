// Copyright 2025 Cowboy AI, LLC.

//! Configuration for traversal and verification
//!
//! Presenters load these from whatever format they speak; every field has a
//! default so partial documents deserialize.

use serde::{Deserialize, Serialize};

use crate::traversal::DEFAULT_MAX_DEPTH;

/// Bounds applied to path enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TraversalConfig {
    /// Maximum number of morphisms in an enumerated path
    pub max_depth: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Which optional checks verification runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VerificationConfig {
    /// Emit warnings for composable pairs without a composite (O(m²))
    pub composition_closure: bool,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            composition_closure: true,
        }
    }
}

/// Top-level configuration for a knowledge graph session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeGraphConfig {
    /// Path search settings
    pub traversal: TraversalConfig,
    /// Law checking settings
    pub verification: VerificationConfig,
}
