// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Read-only adapter over an [`ImmutableValueGraph`].

use std::sync::{Arc, OnceLock};

use valgraph_core::{EndpointPair, GraphDescriptor, ImmutableValueGraph};

use crate::convert::WeightConverter;
use crate::errors::GraphError;
use crate::ops::MutationOp;

/// Read-only graph adapter over an immutable value graph.
///
/// Reads delegate straight to the wrapped graph; weight queries pass the
/// edge value through the converter. Writes never reach the graph — see
/// [`apply`](Self::apply).
///
/// # Read-Only Enforcement Boundary
///
/// **DO NOT** add any of the following to this type:
/// - a method returning `&mut ImmutableValueGraph<N, V>`
/// - interior mutability around the wrapped graph
/// - a setter that swaps the converter
///
/// The wrapped graph reference is replaced in exactly two places: a
/// [`try_clone`](Self::try_clone) (fresh structural copy) and the wire
/// reader (fresh rebuild from the byte stream). Nothing mutates it in
/// place.
///
/// # Concurrency
///
/// The adapter performs no locking. Concurrent read-only use is safe when
/// `N`, `V` and the converter are safe for concurrent reads; that
/// precondition is documented, not enforced.
#[derive(Debug)]
pub struct ValueGraphAdapter<N, V, C> {
    graph: ImmutableValueGraph<N, V>,
    converter: Arc<C>,
    // Memoized canonical element lists; rebuilt lazily after clone or
    // deserialization replaces the graph.
    vertex_list: OnceLock<Vec<N>>,
    edge_list: OnceLock<Vec<EndpointPair<N>>>,
}

impl<N: Clone + Ord, V, C> ValueGraphAdapter<N, V, C> {
    /// Wraps `graph` with `converter`.
    #[must_use]
    pub fn new(graph: ImmutableValueGraph<N, V>, converter: C) -> Self {
        Self::with_shared(graph, Arc::new(converter))
    }

    /// Wraps `graph` with an already-shared converter.
    #[must_use]
    pub fn with_shared(graph: ImmutableValueGraph<N, V>, converter: Arc<C>) -> Self {
        Self {
            graph,
            converter,
            vertex_list: OnceLock::new(),
            edge_list: OnceLock::new(),
        }
    }

    /// The wrapped immutable graph.
    #[must_use]
    pub fn view(&self) -> &ImmutableValueGraph<N, V> {
        &self.graph
    }

    /// The weight converter.
    #[must_use]
    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// The shared converter handle (same allocation across clones).
    #[must_use]
    pub fn shared_converter(&self) -> Arc<C> {
        Arc::clone(&self.converter)
    }

    /// The wrapped graph's descriptor with `modifiable` forced to `false`.
    ///
    /// Only the modifiability flag is overridden: an adapter over a
    /// directed graph never reports itself undirected, and vice versa.
    #[must_use]
    pub fn descriptor(&self) -> GraphDescriptor {
        self.graph.descriptor().as_unmodifiable()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterates nodes in canonical order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.graph.nodes()
    }

    /// Iterates edge endpoint pairs in canonical order.
    pub fn edges(&self) -> impl Iterator<Item = &EndpointPair<N>> {
        self.graph.edges()
    }

    /// Memoized canonical node list.
    #[must_use]
    pub fn vertex_list(&self) -> &[N] {
        self.vertex_list
            .get_or_init(|| self.graph.nodes().cloned().collect())
    }

    /// Memoized canonical edge list.
    #[must_use]
    pub fn edge_list(&self) -> &[EndpointPair<N>] {
        self.edge_list
            .get_or_init(|| self.graph.edges().cloned().collect())
    }

    /// Returns `true` if `node` is in the graph.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.graph.contains_node(node)
    }

    /// Returns `true` if the endpoint pair identifies an edge.
    #[must_use]
    pub fn has_edge(&self, edge: &EndpointPair<N>) -> bool {
        self.graph.has_edge(edge)
    }

    /// Returns `true` if an edge connects `u` and `v`.
    #[must_use]
    pub fn has_edge_between(&self, u: &N, v: &N) -> bool {
        self.graph.has_edge_between(u, v)
    }

    /// The payload value attached to `edge`.
    ///
    /// # Errors
    ///
    /// [`GraphError::NoSuchEdge`] when the edge is absent.
    pub fn edge_value(&self, edge: &EndpointPair<N>) -> Result<&V, GraphError> {
        self.graph.edge_value(edge).ok_or(GraphError::NoSuchEdge)
    }

    /// Number of incident edges (self-loops count twice).
    ///
    /// # Errors
    ///
    /// [`GraphError::NoSuchNode`] when the node is absent.
    pub fn degree(&self, node: &N) -> Result<usize, GraphError> {
        self.graph.degree(node).ok_or(GraphError::NoSuchNode)
    }

    /// Number of outgoing edges.
    ///
    /// # Errors
    ///
    /// [`GraphError::NoSuchNode`] when the node is absent.
    pub fn out_degree(&self, node: &N) -> Result<usize, GraphError> {
        self.graph.out_degree(node).ok_or(GraphError::NoSuchNode)
    }

    /// Number of incoming edges.
    ///
    /// # Errors
    ///
    /// [`GraphError::NoSuchNode`] when the node is absent.
    pub fn in_degree(&self, node: &N) -> Result<usize, GraphError> {
        self.graph.in_degree(node).ok_or(GraphError::NoSuchNode)
    }

    /// Derives the numeric weight of `edge` by passing its value through
    /// the converter.
    ///
    /// # Errors
    ///
    /// [`GraphError::NoSuchEdge`] when the edge is absent.
    pub fn edge_weight(&self, edge: &EndpointPair<N>) -> Result<f64, GraphError>
    where
        C: WeightConverter<V>,
    {
        Ok(self.converter.weight_of(self.edge_value(edge)?))
    }

    /// Derives the numeric weight of the edge between `u` and `v`.
    ///
    /// # Errors
    ///
    /// [`GraphError::NoSuchEdge`] when no such edge exists.
    pub fn edge_weight_between(&self, u: &N, v: &N) -> Result<f64, GraphError>
    where
        C: WeightConverter<V>,
    {
        let value = self
            .graph
            .edge_value_between(u, v)
            .ok_or(GraphError::NoSuchEdge)?;
        Ok(self.converter.weight_of(value))
    }

    /// Applies a structural mutation. Always fails: the adapter is
    /// immutable, and rejection happens before any side effect, so a failed
    /// call leaves the adapter bit-identical.
    ///
    /// # Errors
    ///
    /// [`GraphError::Immutable`], for every operation.
    pub fn apply(&self, op: MutationOp<N, V>) -> Result<(), GraphError> {
        match op {
            MutationOp::AddNode(_)
            | MutationOp::RemoveNode(_)
            | MutationOp::AddEdge { .. }
            | MutationOp::RemoveEdge(_)
            | MutationOp::SetEdgeWeight { .. } => Err(GraphError::Immutable),
        }
    }

    /// Rejected: the adapter is immutable.
    ///
    /// # Errors
    ///
    /// Always [`GraphError::Immutable`].
    pub fn add_node(&self, node: N) -> Result<(), GraphError> {
        self.apply(MutationOp::AddNode(node))
    }

    /// Rejected: the adapter is immutable.
    ///
    /// # Errors
    ///
    /// Always [`GraphError::Immutable`].
    pub fn remove_node(&self, node: N) -> Result<(), GraphError> {
        self.apply(MutationOp::RemoveNode(node))
    }

    /// Rejected: the adapter is immutable.
    ///
    /// # Errors
    ///
    /// Always [`GraphError::Immutable`].
    pub fn add_edge(&self, source: N, target: N, value: V) -> Result<(), GraphError> {
        self.apply(MutationOp::AddEdge {
            source,
            target,
            value,
        })
    }

    /// Rejected: the adapter is immutable.
    ///
    /// # Errors
    ///
    /// Always [`GraphError::Immutable`].
    pub fn remove_edge(&self, edge: EndpointPair<N>) -> Result<(), GraphError> {
        self.apply(MutationOp::RemoveEdge(edge))
    }

    /// Rejected: the adapter is immutable.
    ///
    /// # Errors
    ///
    /// Always [`GraphError::Immutable`].
    pub fn set_edge_weight(&self, edge: EndpointPair<N>, weight: f64) -> Result<(), GraphError> {
        self.apply(MutationOp::SetEdgeWeight { edge, weight })
    }

    /// Builds a second adapter over an independent structural copy of the
    /// wrapped graph.
    ///
    /// The converter is shared (same `Arc`), the graph is rebuilt node by
    /// node and edge by edge, and the memoized element lists start empty so
    /// they recompute against the new graph.
    ///
    /// # Errors
    ///
    /// [`GraphError::StructuralCopy`] when the copy primitive rejects data
    /// the frozen graph already held — an internal-invariant violation
    /// surfaced to the caller rather than swallowed.
    pub fn try_clone(&self) -> Result<Self, GraphError>
    where
        V: Clone,
    {
        let graph = self.graph.copy_of().map_err(GraphError::StructuralCopy)?;
        Ok(Self::with_shared(graph, Arc::clone(&self.converter)))
    }
}
