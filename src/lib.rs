// Copyright 2025 Cowboy AI, LLC.

//! # CIM Category
//!
//! Category-theoretic knowledge graph core for the Composable Information Machine.
//!
//! The crate models a knowledge graph as categories (objects and morphisms),
//! functors between categories and natural transformations between functors,
//! and provides the algorithms that work on it:
//! - **Composition**: compose morphisms and functors (a partial operation)
//! - **Traversal**: shortest and all paths inside a category, routes across
//!   categories through functors
//! - **Verification**: identity, closure, functor and naturality-typing laws
//!
//! ## Design Principles
//!
//! 1. **Immutability**: entities are validated once and never change
//! 2. **No I/O**: callers load snapshots and render results
//! 3. **Three channels**: construction errors are `Err`, law violations are
//!    result entries, inapplicable operations are `None` or empty
//! 4. **Termination**: every search is depth bounded
//!
//! ```
//! use cim_category::{compose_morphisms, Morphism};
//!
//! let f = Morphism::new("f", "f", "A", "B").unwrap();
//! let g = Morphism::new("g", "g", "B", "C").unwrap();
//! let gf = compose_morphisms(&f, &g).unwrap();
//! assert_eq!(gf.name(), "g∘f");
//! assert!(compose_morphisms(&g, &f).is_none());
//! ```

#![warn(missing_docs)]

pub mod category;
pub mod composition;
pub mod config;
mod errors;
mod knowledge_graph;
pub mod traversal;
pub mod verification;

// Re-export core types
pub use category::{
    identity_morphism_id, Category, CategoryObject, Functor, IdMapping, Metadata, Morphism,
    NaturalTransformation,
};
pub use composition::{
    compose_functor_chain, compose_functors, compose_morphism_chain, compose_morphisms,
    identity_functor,
};
pub use config::{KnowledgeGraphConfig, TraversalConfig, VerificationConfig};
pub use errors::{CategoryError, CategoryResult};
pub use knowledge_graph::KnowledgeGraph;
pub use traversal::{
    find_all_paths, find_domain_path, find_path, DomainPath, DomainStep, DEFAULT_MAX_DEPTH,
};
pub use verification::{
    verify_category, verify_category_with, verify_functor, verify_knowledge_graph,
    verify_natural_transformation, GraphVerificationReport, VerificationResult,
};
