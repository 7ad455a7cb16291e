// Copyright 2025 Cowboy AI, LLC.

//! Composition of morphisms and functors
//!
//! Composition is partial: two morphisms compose only when the first one's
//! target is the second one's source, and two functors only when the first
//! one's target category is the second one's source category. A pair that
//! does not line up yields `None`, which is an ordinary outcome.
//!
//! Composites follow one naming scheme: id `composed-<first>-<second>`, name
//! `<second>∘<first>` (the usual right-to-left reading of `∘`). Longer chains
//! are built by repeated pairwise composition; associativity is assumed.

pub mod functors;
pub mod morphisms;

pub use functors::{compose_functor_chain, compose_functors, identity_functor};
pub use morphisms::{compose_morphism_chain, compose_morphisms, COMPOSED_FROM_KEY};

pub(crate) fn composed_id(first: &str, second: &str) -> String {
    format!("composed-{first}-{second}")
}

pub(crate) fn composed_name(first: &str, second: &str) -> String {
    format!("{second}∘{first}")
}
