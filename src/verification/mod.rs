// Copyright 2025 Cowboy AI, LLC.

//! Law checking for categories, functors and natural transformations
//!
//! Violations are never raised. Each check returns a [`VerificationResult`]
//! whose errors mark broken laws and whose warnings mark incompleteness;
//! the caller decides whether to reject, warn or continue.

mod category_laws;
mod functor_laws;
mod graph;
mod naturality;
mod result;

pub use category_laws::{verify_category, verify_category_with};
pub use functor_laws::verify_functor;
pub use graph::{verify_knowledge_graph, GraphVerificationReport};
pub use naturality::verify_natural_transformation;
pub use result::VerificationResult;
