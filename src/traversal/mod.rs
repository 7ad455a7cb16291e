// Copyright 2025 Cowboy AI, LLC.

//! Path search inside a category and across categories
//!
//! Every function here is a pure function of its arguments. Missing objects
//! or categories give an empty result and search depth is capped, so cyclic
//! graphs always terminate; a capped branch is dropped silently.
//!
//! - [`find_path`]: shortest morphism path (BFS)
//! - [`find_all_paths`]: every simple path up to a depth (iterative DFS)
//! - [`find_domain_path`]: routes from an object into another category
//!   through functors (BFS over `(category, object)` states)

mod domain_path;
mod in_category;

pub use domain_path::{find_domain_path, DomainPath, DomainStep};
pub use in_category::{find_all_paths, find_path};

/// Depth cap shared by path enumeration and cross-category search
pub const DEFAULT_MAX_DEPTH: usize = 10;
