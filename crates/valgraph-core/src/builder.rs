// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mutable scratch graph used to assemble an [`ImmutableValueGraph`].
//!
//! The builder is transient: callers construct it, insert nodes and edge
//! values, then [`freeze`](MutableValueGraph::freeze) it into the immutable
//! store. Deserialization and structural copy both go through this path.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::endpoints::EndpointPair;
use crate::store::ImmutableValueGraph;

/// Error returned when an insertion violates the graph's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A self-loop was inserted into a graph built with
    /// `allow_self_loops = false`.
    #[error("self-loops are disallowed by this graph")]
    SelfLoopsDisallowed,
}

/// Mutable value graph under construction.
///
/// Simple-graph semantics: edge identity is the endpoint pair, so at most
/// one value exists per (ordered or unordered) pair and re-inserting an
/// edge replaces its value. Directedness and the self-loop policy are fixed
/// at construction.
#[derive(Debug, Clone)]
pub struct MutableValueGraph<N, V> {
    directed: bool,
    allow_self_loops: bool,
    nodes: BTreeSet<N>,
    edges: BTreeMap<EndpointPair<N>, V>,
}

impl<N: Clone + Ord, V> MutableValueGraph<N, V> {
    /// Creates an empty scratch graph with the given shape.
    #[must_use]
    pub fn new(directed: bool, allow_self_loops: bool) -> Self {
        Self {
            directed,
            allow_self_loops,
            nodes: BTreeSet::new(),
            edges: BTreeMap::new(),
        }
    }

    /// Returns `true` if edges are ordered pairs.
    #[must_use]
    pub fn directed(&self) -> bool {
        self.directed
    }

    /// Returns `true` if self-loops may be inserted.
    #[must_use]
    pub fn allows_self_loops(&self) -> bool {
        self.allow_self_loops
    }

    /// Current node count.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Current edge count.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Adds a node. Returns `false` if it was already present.
    pub fn add_node(&mut self, node: N) -> bool {
        self.nodes.insert(node)
    }

    /// Inserts an edge value between `u` and `v`, implicitly adding missing
    /// endpoint nodes. Returns the value previously stored for that pair,
    /// if any.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::SelfLoopsDisallowed`] when `u == v` and the
    /// graph was built without self-loop support; the graph is unchanged.
    pub fn put_edge_value(&mut self, u: N, v: N, value: V) -> Result<Option<V>, BuildError> {
        if u == v && !self.allow_self_loops {
            return Err(BuildError::SelfLoopsDisallowed);
        }
        self.nodes.insert(u.clone());
        self.nodes.insert(v.clone());
        let pair = EndpointPair::of(self.directed, u, v);
        Ok(self.edges.insert(pair, value))
    }

    /// Removes the edge between `u` and `v`, returning its value.
    pub fn remove_edge(&mut self, u: &N, v: &N) -> Option<V> {
        let pair = EndpointPair::of(self.directed, u.clone(), v.clone());
        self.edges.remove(&pair)
    }

    /// Removes a node and every incident edge. Returns `false` if the node
    /// was not present.
    pub fn remove_node(&mut self, node: &N) -> bool {
        if !self.nodes.remove(node) {
            return false;
        }
        self.edges.retain(|pair, _| !pair.incident_to(node));
        true
    }

    /// Freezes the scratch graph into an [`ImmutableValueGraph`].
    #[must_use]
    pub fn freeze(self) -> ImmutableValueGraph<N, V> {
        ImmutableValueGraph::from_parts(
            self.directed,
            self.allow_self_loops,
            self.nodes,
            self.edges,
        )
    }
}
