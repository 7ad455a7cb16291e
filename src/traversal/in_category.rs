// Copyright 2025 Cowboy AI, LLC.

//! Morphism paths between two objects of one category
//!
//! Identity morphisms (self-loops) never count as edges: following one makes
//! no progress, and letting them in would turn every object into a cycle.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use super::DEFAULT_MAX_DEPTH;
use crate::category::{Category, Morphism};

type Adjacency<'a> = HashMap<&'a str, Vec<&'a Morphism>>;

/// Outgoing non-identity morphisms per object, in load order
fn adjacency(category: &Category) -> Adjacency<'_> {
    let mut adjacency: Adjacency<'_> = HashMap::new();
    for morph in category.morphisms().iter().filter(|m| !m.is_identity()) {
        adjacency.entry(morph.source()).or_default().push(morph);
    }
    adjacency
}

/// Both endpoints are distinct objects of the category
fn searchable(source: &str, target: &str, category: &Category) -> bool {
    source != target && category.contains_object(source) && category.contains_object(target)
}

/// Shortest path (fewest morphisms) from `source` to `target`
///
/// Returns an empty vector when `source == target` (the trivial path), when
/// either object is missing from the category, or when no path exists.
pub fn find_path(source: &str, target: &str, category: &Category) -> Vec<Morphism> {
    debug!(source, target, category = category.id(), "Finding shortest path");

    if !searchable(source, target, category) {
        return Vec::new();
    }

    let adjacency = adjacency(category);
    // object -> morphism it was first reached through
    let mut parents: HashMap<&str, &Morphism> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::from([source]);
    let mut queue: VecDeque<&str> = VecDeque::from([source]);

    while let Some(current) = queue.pop_front() {
        if current == target {
            return reconstruct(&parents, source, target);
        }

        for morph in adjacency.get(current).into_iter().flatten() {
            if visited.insert(morph.target()) {
                parents.insert(morph.target(), *morph);
                queue.push_back(morph.target());
            }
        }
    }

    Vec::new()
}

fn reconstruct(parents: &HashMap<&str, &Morphism>, source: &str, target: &str) -> Vec<Morphism> {
    let mut path = Vec::new();
    let mut current = target;

    while current != source {
        let Some(morph) = parents.get(current) else {
            break;
        };
        path.push((*morph).clone());
        current = morph.source();
    }

    path.reverse();
    path
}

struct Frame<'a> {
    object: &'a str,
    next_edge: usize,
}

/// Every simple path from `source` to `target`, shortest first
///
/// A path never visits an object twice and holds at most `max_depth`
/// morphisms (`None` means [`DEFAULT_MAX_DEPTH`]). Paths of equal length
/// keep their discovery order.
pub fn find_all_paths(
    source: &str,
    target: &str,
    category: &Category,
    max_depth: Option<usize>,
) -> Vec<Vec<Morphism>> {
    let max_depth = max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
    debug!(source, target, category = category.id(), max_depth, "Finding all paths");

    if !searchable(source, target, category) {
        return Vec::new();
    }

    let adjacency = adjacency(category);
    let mut paths: Vec<Vec<Morphism>> = Vec::new();

    // path[i] is the morphism leading into stack[i + 1]
    let mut path: Vec<&Morphism> = Vec::new();
    let mut on_path: HashSet<&str> = HashSet::from([source]);
    let mut stack = vec![Frame {
        object: source,
        next_edge: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let edges = adjacency
            .get(frame.object)
            .map(Vec::as_slice)
            .unwrap_or_default();

        if path.len() >= max_depth || frame.next_edge >= edges.len() {
            stack.pop();
            if let Some(morph) = path.pop() {
                on_path.remove(morph.target());
            }
            continue;
        }

        let morph = edges[frame.next_edge];
        frame.next_edge += 1;

        if morph.target() == target {
            paths.push(
                path.iter()
                    .copied()
                    .chain(std::iter::once(morph))
                    .cloned()
                    .collect(),
            );
            continue;
        }

        if on_path.insert(morph.target()) {
            path.push(morph);
            stack.push(Frame {
                object: morph.target(),
                next_edge: 0,
            });
        }
    }

    paths.sort_by_key(Vec::len);
    debug!(count = paths.len(), "Path enumeration finished");
    paths
}
