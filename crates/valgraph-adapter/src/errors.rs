// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error taxonomy for adapter operations.

use thiserror::Error;
use valgraph_core::BuildError;

/// Errors surfaced by [`ValueGraphAdapter`](crate::ValueGraphAdapter)
/// operations.
///
/// All variants are reported synchronously to the immediate caller; the
/// adapter never retries or recovers internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Any attempted mutation. The adapter's state is untouched: rejection
    /// happens before any side effect.
    #[error("graph is immutable")]
    Immutable,

    /// A query named an edge absent from the wrapped graph.
    #[error("no such edge in graph")]
    NoSuchEdge,

    /// A query named a node absent from the wrapped graph.
    #[error("no such node in graph")]
    NoSuchNode,

    /// The structural-copy primitive rejected data the frozen graph already
    /// held. This is an internal-invariant violation, wrapped and re-raised
    /// rather than swallowed; it is not a recoverable condition.
    #[error("structural copy failed: {0}")]
    StructuralCopy(#[source] BuildError),
}
