// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Frozen read-only value graph.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::builder::{BuildError, MutableValueGraph};
use crate::descriptor::GraphDescriptor;
use crate::endpoints::EndpointPair;

/// Immutable weighted value graph.
///
/// Produced by [`MutableValueGraph::freeze`]; once frozen the topology can
/// never change. All iteration is in canonical (`Ord`) order, so two
/// structurally equal graphs are observationally identical regardless of
/// insertion order.
///
/// Successor/predecessor adjacency is materialized at freeze time so degree
/// queries do not scan the edge set.
#[derive(Debug, Clone)]
pub struct ImmutableValueGraph<N, V> {
    descriptor: GraphDescriptor,
    nodes: BTreeSet<N>,
    edges: BTreeMap<EndpointPair<N>, V>,
    succ: BTreeMap<N, BTreeSet<N>>,
    pred: BTreeMap<N, BTreeSet<N>>,
}

impl<N: Clone + Ord, V> ImmutableValueGraph<N, V> {
    pub(crate) fn from_parts(
        directed: bool,
        allow_self_loops: bool,
        nodes: BTreeSet<N>,
        edges: BTreeMap<EndpointPair<N>, V>,
    ) -> Self {
        let mut succ: BTreeMap<N, BTreeSet<N>> = BTreeMap::new();
        let mut pred: BTreeMap<N, BTreeSet<N>> = BTreeMap::new();
        for pair in edges.keys() {
            let (u, v) = (pair.node_u().clone(), pair.node_v().clone());
            if directed {
                succ.entry(u.clone()).or_default().insert(v.clone());
                pred.entry(v).or_default().insert(u);
            } else {
                // Undirected adjacency is symmetric; `pred` mirrors `succ`.
                succ.entry(u.clone()).or_default().insert(v.clone());
                succ.entry(v.clone()).or_default().insert(u.clone());
                pred.entry(u.clone()).or_default().insert(v.clone());
                pred.entry(v).or_default().insert(u);
            }
        }
        Self {
            descriptor: GraphDescriptor::simple(directed, allow_self_loops),
            nodes,
            edges,
            succ,
            pred,
        }
    }

    /// The graph's shape descriptor. Frozen graphs always report
    /// `modifiable = false`.
    #[must_use]
    pub fn descriptor(&self) -> GraphDescriptor {
        self.descriptor
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates nodes in canonical order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    /// Iterates edge endpoint pairs in canonical order.
    pub fn edges(&self) -> impl Iterator<Item = &EndpointPair<N>> {
        self.edges.keys()
    }

    /// Iterates `(endpoints, value)` entries in canonical order.
    pub fn edge_entries(&self) -> impl Iterator<Item = (&EndpointPair<N>, &V)> {
        self.edges.iter()
    }

    /// Returns `true` if `node` is in the graph.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    /// Returns `true` if the given endpoint pair identifies an edge.
    #[must_use]
    pub fn has_edge(&self, edge: &EndpointPair<N>) -> bool {
        self.edges.contains_key(edge)
    }

    /// Returns `true` if an edge connects `u` and `v` (respecting
    /// directedness).
    #[must_use]
    pub fn has_edge_between(&self, u: &N, v: &N) -> bool {
        self.edges
            .contains_key(&EndpointPair::of(self.descriptor.directed, u.clone(), v.clone()))
    }

    /// The value attached to `edge`, if the edge exists.
    #[must_use]
    pub fn edge_value(&self, edge: &EndpointPair<N>) -> Option<&V> {
        self.edges.get(edge)
    }

    /// The value attached to the edge between `u` and `v`, if it exists.
    #[must_use]
    pub fn edge_value_between(&self, u: &N, v: &N) -> Option<&V> {
        self.edges
            .get(&EndpointPair::of(self.descriptor.directed, u.clone(), v.clone()))
    }

    /// Number of edges incident to `node`; a self-loop counts twice.
    /// `None` when the node is absent.
    #[must_use]
    pub fn degree(&self, node: &N) -> Option<usize> {
        if !self.nodes.contains(node) {
            return None;
        }
        if self.descriptor.directed {
            return Some(
                self.out_degree(node).unwrap_or(0) + self.in_degree(node).unwrap_or(0),
            );
        }
        let neighbors = self.succ.get(node);
        let count = neighbors.map_or(0, BTreeSet::len);
        let has_loop = neighbors.is_some_and(|set| set.contains(node));
        Some(count + usize::from(has_loop))
    }

    /// Number of outgoing edges from `node` (equals [`degree`] divided
    /// between directions for undirected graphs). `None` when absent.
    ///
    /// [`degree`]: ImmutableValueGraph::degree
    #[must_use]
    pub fn out_degree(&self, node: &N) -> Option<usize> {
        if !self.nodes.contains(node) {
            return None;
        }
        Some(self.succ.get(node).map_or(0, BTreeSet::len))
    }

    /// Number of incoming edges to `node`. `None` when absent.
    #[must_use]
    pub fn in_degree(&self, node: &N) -> Option<usize> {
        if !self.nodes.contains(node) {
            return None;
        }
        Some(self.pred.get(node).map_or(0, BTreeSet::len))
    }

    /// Builds an independent structural copy: every node and edge is
    /// re-inserted into a fresh store.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] only if the scratch builder rejects data the
    /// frozen graph already held, which indicates a broken internal
    /// invariant rather than a recoverable condition. Callers are expected
    /// to surface it, not retry.
    pub fn copy_of(&self) -> Result<Self, BuildError>
    where
        V: Clone,
    {
        let mut scratch = MutableValueGraph::new(
            self.descriptor.directed,
            self.descriptor.allows_self_loops,
        );
        for node in &self.nodes {
            scratch.add_node(node.clone());
        }
        for (pair, value) in &self.edges {
            scratch.put_edge_value(
                pair.node_u().clone(),
                pair.node_v().clone(),
                value.clone(),
            )?;
        }
        Ok(scratch.freeze())
    }
}

impl<N: Clone + Ord + Serialize, V: Serialize> ImmutableValueGraph<N, V> {
    /// Canonical serialization (descriptor, nodes, edges in canonical
    /// order) for hashing/comparison.
    #[allow(clippy::expect_used)]
    pub fn to_canonical_bytes(&self) -> Vec<u8> {
        let nodes: Vec<&N> = self.nodes.iter().collect();
        let edges: Vec<(&N, &N, &V)> = self
            .edges
            .iter()
            .map(|(pair, value)| (pair.node_u(), pair.node_v(), value))
            .collect();
        let mut bytes = Vec::new();
        ciborium::into_writer(&(self.descriptor, nodes, edges), &mut bytes)
            .expect("canonical serialize");
        bytes
    }

    /// Blake3 hash of the canonical form.
    #[must_use]
    pub fn canonical_hash(&self) -> [u8; 32] {
        blake3::hash(&self.to_canonical_bytes()).into()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn diamond() -> ImmutableValueGraph<&'static str, f64> {
        let mut scratch = MutableValueGraph::new(true, false);
        scratch.put_edge_value("a", "b", 1.0).unwrap();
        scratch.put_edge_value("a", "c", 2.0).unwrap();
        scratch.put_edge_value("b", "d", 3.0).unwrap();
        scratch.put_edge_value("c", "d", 4.0).unwrap();
        scratch.freeze()
    }

    #[test]
    fn frozen_graph_answers_queries() {
        let graph = diamond();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert!(graph.contains_node(&"a"));
        assert!(graph.has_edge_between(&"a", &"b"));
        assert!(!graph.has_edge_between(&"b", &"a"));
        assert_eq!(graph.edge_value_between(&"c", &"d"), Some(&4.0));
        assert_eq!(graph.edge_value_between(&"d", &"c"), None);
    }

    #[test]
    fn directed_degrees_split_in_and_out() {
        let graph = diamond();
        assert_eq!(graph.out_degree(&"a"), Some(2));
        assert_eq!(graph.in_degree(&"a"), Some(0));
        assert_eq!(graph.in_degree(&"d"), Some(2));
        assert_eq!(graph.degree(&"b"), Some(2));
        assert_eq!(graph.degree(&"missing"), None);
    }

    #[test]
    fn undirected_self_loop_counts_twice() {
        let mut scratch: MutableValueGraph<u32, ()> = MutableValueGraph::new(false, true);
        scratch.put_edge_value(1, 1, ()).unwrap();
        scratch.put_edge_value(1, 2, ()).unwrap();
        let graph = scratch.freeze();
        assert_eq!(graph.degree(&1), Some(3));
        assert_eq!(graph.degree(&2), Some(1));
    }

    #[test]
    fn copy_of_is_structurally_equal_but_independent() {
        let graph = diamond();
        let copy = graph.copy_of().unwrap();
        assert_eq!(graph.canonical_hash(), copy.canonical_hash());
        assert_eq!(copy.node_count(), graph.node_count());
        assert_eq!(copy.edge_count(), graph.edge_count());
    }

    #[test]
    fn canonical_hash_ignores_insertion_order() {
        let mut forward: MutableValueGraph<u8, u8> = MutableValueGraph::new(false, false);
        forward.put_edge_value(1, 2, 9).unwrap();
        forward.put_edge_value(2, 3, 8).unwrap();

        let mut backward: MutableValueGraph<u8, u8> = MutableValueGraph::new(false, false);
        backward.put_edge_value(3, 2, 8).unwrap();
        backward.put_edge_value(2, 1, 9).unwrap();

        assert_eq!(
            hex::encode(forward.freeze().canonical_hash()),
            hex::encode(backward.freeze().canonical_hash())
        );
    }

    #[test]
    fn canonical_hash_tracks_values() {
        let mut a: MutableValueGraph<u8, u8> = MutableValueGraph::new(true, false);
        a.put_edge_value(1, 2, 7).unwrap();
        let mut b: MutableValueGraph<u8, u8> = MutableValueGraph::new(true, false);
        b.put_edge_value(1, 2, 8).unwrap();
        assert_ne!(a.freeze().canonical_hash(), b.freeze().canonical_hash());
    }
}
