// Copyright 2025 Cowboy AI, LLC.

//! Entity model of the category knowledge graph
//!
//! Categories hold objects and morphisms; functors map one category into
//! another; natural transformations relate two functors. Every entity is
//! validated on construction and immutable afterwards. Cross references
//! (a morphism's endpoints, a functor's categories) are plain ids and are
//! only checked by the verification module.

pub mod domain_category;
pub mod functor;
pub mod morphism;
pub mod natural_transformation;
pub mod object;

pub use domain_category::Category;
pub use functor::{Functor, IdMapping};
pub use morphism::{identity_morphism_id, Morphism};
pub use natural_transformation::NaturalTransformation;
pub use object::{CategoryObject, Metadata};
