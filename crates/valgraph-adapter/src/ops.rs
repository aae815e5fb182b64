// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The mutating-operation set, reified as one enum.
//!
//! Reifying mutations gives the adapter a single rejection entry point
//! ([`ValueGraphAdapter::apply`](crate::ValueGraphAdapter::apply)) instead
//! of duplicating the same rejection logic across every write method.

use valgraph_core::EndpointPair;

/// A structural mutation of a value graph.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOp<N, V> {
    /// Add a node.
    AddNode(N),
    /// Remove a node (and, in mutable graphs, its incident edges).
    RemoveNode(N),
    /// Insert an edge carrying `value` between `source` and `target`.
    AddEdge {
        /// Source node (first endpoint for undirected graphs).
        source: N,
        /// Target node (second endpoint for undirected graphs).
        target: N,
        /// Payload attached to the new edge.
        value: V,
    },
    /// Remove the edge identified by its endpoints.
    RemoveEdge(EndpointPair<N>),
    /// Replace the numeric weight of an existing edge.
    SetEdgeWeight {
        /// Edge to reweight.
        edge: EndpointPair<N>,
        /// New weight.
        weight: f64,
    },
}
