// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Edge identity as a pair of endpoint nodes.

use serde::{Deserialize, Serialize};

/// The two nodes identifying an edge.
///
/// An `EndpointPair` is *ordered* in a directed graph and *unordered* in an
/// undirected one. Unordered pairs are canonicalized at construction (the
/// smaller node is stored first), so the derived `Eq`/`Ord`/`Hash` impls
/// give `(u, v) == (v, u)` for unordered pairs while ordered pairs keep
/// `(u, v) != (v, u)`.
///
/// A single graph never mixes ordered and unordered pairs; the constructors
/// take their cue from the graph's directedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EndpointPair<N> {
    node_u: N,
    node_v: N,
    ordered: bool,
}

impl<N: Ord> EndpointPair<N> {
    /// Constructs an ordered pair for a directed edge `source -> target`.
    #[must_use]
    pub fn ordered(source: N, target: N) -> Self {
        Self {
            node_u: source,
            node_v: target,
            ordered: true,
        }
    }

    /// Constructs an unordered pair for an undirected edge.
    ///
    /// The endpoints are stored in canonical (sorted) order, so
    /// `unordered(a, b) == unordered(b, a)`.
    #[must_use]
    pub fn unordered(u: N, v: N) -> Self {
        let (node_u, node_v) = if v < u { (v, u) } else { (u, v) };
        Self {
            node_u,
            node_v,
            ordered: false,
        }
    }

    /// Constructs the pair kind matching `directed`.
    #[must_use]
    pub fn of(directed: bool, u: N, v: N) -> Self {
        if directed {
            Self::ordered(u, v)
        } else {
            Self::unordered(u, v)
        }
    }
}

impl<N> EndpointPair<N> {
    /// First endpoint: the source for ordered pairs, the canonically
    /// smaller node for unordered ones.
    #[must_use]
    pub fn node_u(&self) -> &N {
        &self.node_u
    }

    /// Second endpoint: the target for ordered pairs, the canonically
    /// larger node for unordered ones.
    #[must_use]
    pub fn node_v(&self) -> &N {
        &self.node_v
    }

    /// Returns `true` for pairs constructed for a directed edge.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.ordered
    }

    /// The edge source. `None` for unordered pairs, which have no
    /// source/target distinction.
    #[must_use]
    pub fn source(&self) -> Option<&N> {
        self.ordered.then_some(&self.node_u)
    }

    /// The edge target. `None` for unordered pairs.
    #[must_use]
    pub fn target(&self) -> Option<&N> {
        self.ordered.then_some(&self.node_v)
    }

    /// Consumes the pair, yielding `(node_u, node_v)`.
    #[must_use]
    pub fn into_nodes(self) -> (N, N) {
        (self.node_u, self.node_v)
    }
}

impl<N: PartialEq> EndpointPair<N> {
    /// Returns `true` if `node` is one of the two endpoints.
    #[must_use]
    pub fn incident_to(&self, node: &N) -> bool {
        self.node_u == *node || self.node_v == *node
    }

    /// Returns the endpoint opposite `node`, or `None` if `node` is not an
    /// endpoint of this pair.
    #[must_use]
    pub fn adjacent_node(&self, node: &N) -> Option<&N> {
        if self.node_u == *node {
            Some(&self.node_v)
        } else if self.node_v == *node {
            Some(&self.node_u)
        } else {
            None
        }
    }

    /// Returns `true` if the pair is a self-loop (`node_u == node_v`).
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.node_u == self.node_v
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ordered_pairs_distinguish_direction() {
        let ab = EndpointPair::ordered("a", "b");
        let ba = EndpointPair::ordered("b", "a");
        assert_ne!(ab, ba);
        assert_eq!(ab.source(), Some(&"a"));
        assert_eq!(ab.target(), Some(&"b"));
    }

    #[test]
    fn unordered_pairs_are_symmetric() {
        let ab = EndpointPair::unordered("a", "b");
        let ba = EndpointPair::unordered("b", "a");
        assert_eq!(ab, ba);
        assert_eq!(ab.node_u(), &"a");
        assert_eq!(ab.node_v(), &"b");
        assert_eq!(ab.source(), None);
        assert_eq!(ab.target(), None);
    }

    #[test]
    fn unordered_pairs_hash_symmetrically() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let hash_of = |pair: &EndpointPair<&str>| {
            let mut hasher = DefaultHasher::new();
            pair.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(
            hash_of(&EndpointPair::unordered("x", "y")),
            hash_of(&EndpointPair::unordered("y", "x"))
        );
    }

    #[test]
    fn adjacent_node_walks_both_directions() {
        let pair = EndpointPair::unordered(1, 2);
        assert_eq!(pair.adjacent_node(&1), Some(&2));
        assert_eq!(pair.adjacent_node(&2), Some(&1));
        assert_eq!(pair.adjacent_node(&3), None);
        assert!(pair.incident_to(&1));
        assert!(!pair.incident_to(&3));
    }

    #[test]
    fn self_loop_detection() {
        assert!(EndpointPair::ordered(7, 7).is_self_loop());
        assert!(!EndpointPair::ordered(7, 8).is_self_loop());
    }
}
