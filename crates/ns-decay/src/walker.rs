//! Depth-first decay-tree traversal.
//!
//! The walker drives an explicit worklist instead of recursing, so a deep or
//! malformed daughter graph can neither overflow the call stack nor loop
//! forever. Each particle is visited at most once per traversal, identified by
//! its key in the collection.

use std::collections::HashSet;

use ns_core::{ParticleCollection, ParticleRecord};
use serde::{Deserialize, Serialize};

/// Position of a visited node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    /// Key of the particle in its collection.
    pub key: usize,
    /// Distance from the root (root = 0).
    pub depth: usize,
}

impl Visit {
    /// Whether this is the traversal root.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.depth == 0
    }
}

/// Data-quality counters for one or more traversals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalSummary {
    /// Nodes handed to the visitor.
    pub visited: usize,
    /// Largest depth seen.
    pub max_depth_reached: usize,
    /// Daughter references that did not resolve (dangling or foreign).
    pub unresolved: usize,
    /// References to particles already visited (cycles, shared daughters).
    pub revisits: usize,
    /// Resolvable daughters not followed because of the depth limit.
    pub truncated: usize,
}

impl TraversalSummary {
    /// True when the traversal saw neither unresolved refs, revisits nor truncation.
    pub fn is_clean(&self) -> bool {
        self.unresolved == 0 && self.revisits == 0 && self.truncated == 0
    }

    /// Accumulate another summary into this one.
    pub fn merge(&mut self, other: &TraversalSummary) {
        self.visited += other.visited;
        self.max_depth_reached = self.max_depth_reached.max(other.max_depth_reached);
        self.unresolved += other.unresolved;
        self.revisits += other.revisits;
        self.truncated += other.truncated;
    }
}

/// Pre-order walker over the daughter relation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecayTreeWalker {
    max_depth: Option<usize>,
}

impl DecayTreeWalker {
    /// Walker without a depth limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walker that does not descend below `max_depth` (root = 0). `None` = unlimited.
    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        Self { max_depth }
    }

    /// Configured depth limit.
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Visit the subtree rooted at `root`.
    ///
    /// `visit` is called once per reachable particle, root first, each node
    /// before its daughters, daughters in their stored order. Unresolvable
    /// daughters are skipped; already-visited particles are not entered again.
    /// A `root` key outside the collection visits nothing.
    pub fn traverse<C, F>(&self, collection: &C, root: usize, mut visit: F) -> TraversalSummary
    where
        C: ParticleCollection + ?Sized,
        F: FnMut(&C::Particle, Visit),
    {
        let mut summary = TraversalSummary::default();
        if collection.get(root).is_none() {
            return summary;
        }

        let mut visited: HashSet<usize> = HashSet::new();
        let mut stack: Vec<Visit> = vec![Visit { key: root, depth: 0 }];

        while let Some(node) = stack.pop() {
            if !visited.insert(node.key) {
                summary.revisits += 1;
                continue;
            }
            let Some(particle) = collection.get(node.key) else {
                continue;
            };

            visit(particle, node);
            summary.visited += 1;
            summary.max_depth_reached = summary.max_depth_reached.max(node.depth);

            let daughters = particle.daughters();
            if daughters.is_empty() {
                continue;
            }
            if let Some(limit) = self.max_depth
                && node.depth >= limit
            {
                for daughter in daughters {
                    match collection.resolve(daughter) {
                        Some(_) => summary.truncated += 1,
                        None => summary.unresolved += 1,
                    }
                }
                continue;
            }

            // Reverse push keeps the first daughter on top of the stack.
            for daughter in daughters.iter().rev() {
                match collection.resolve(daughter) {
                    None => summary.unresolved += 1,
                    Some((key, _)) if visited.contains(&key) => summary.revisits += 1,
                    Some((key, _)) => stack.push(Visit { key, depth: node.depth + 1 }),
                }
            }
        }

        summary
    }
}
