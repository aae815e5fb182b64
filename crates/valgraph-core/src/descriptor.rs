// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Graph shape descriptor flags.

use serde::{Deserialize, Serialize};

/// Read-only summary of a graph's shape.
///
/// The descriptor travels with serialized graphs as a single flags byte
/// (see [`GraphDescriptor::to_flags`]); unknown bits are rejected on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphDescriptor {
    /// Edges are ordered pairs.
    pub directed: bool,
    /// Edges from a node to itself are allowed.
    pub allows_self_loops: bool,
    /// More than one edge may connect the same endpoint pair.
    pub allows_multiple_edges: bool,
    /// Directed and undirected edges may coexist.
    pub allows_mixed_edges: bool,
    /// Structural mutation is allowed.
    pub modifiable: bool,
}

impl GraphDescriptor {
    const FLAG_DIRECTED: u8 = 1 << 0;
    const FLAG_SELF_LOOPS: u8 = 1 << 1;
    const FLAG_MULTI: u8 = 1 << 2;
    const FLAG_MIXED: u8 = 1 << 3;
    const FLAG_MODIFIABLE: u8 = 1 << 4;
    const FLAG_ALL: u8 = Self::FLAG_DIRECTED
        | Self::FLAG_SELF_LOOPS
        | Self::FLAG_MULTI
        | Self::FLAG_MIXED
        | Self::FLAG_MODIFIABLE;

    /// Descriptor of a simple (no multi, no mixed edges) unmodifiable graph.
    #[must_use]
    pub const fn simple(directed: bool, allows_self_loops: bool) -> Self {
        Self {
            directed,
            allows_self_loops,
            allows_multiple_edges: false,
            allows_mixed_edges: false,
            modifiable: false,
        }
    }

    /// Returns this descriptor with `modifiable` forced to `false`.
    ///
    /// All other flags pass through untouched: an unmodifiable view of a
    /// directed graph is still directed.
    #[must_use]
    pub const fn as_unmodifiable(self) -> Self {
        Self {
            modifiable: false,
            ..self
        }
    }

    /// Returns `true` when the shape is simple: no multi, no mixed edges.
    #[must_use]
    pub const fn is_simple(self) -> bool {
        !self.allows_multiple_edges && !self.allows_mixed_edges
    }

    /// Packs the descriptor into a single wire flags byte.
    #[must_use]
    pub fn to_flags(self) -> u8 {
        let mut flags = 0u8;
        if self.directed {
            flags |= Self::FLAG_DIRECTED;
        }
        if self.allows_self_loops {
            flags |= Self::FLAG_SELF_LOOPS;
        }
        if self.allows_multiple_edges {
            flags |= Self::FLAG_MULTI;
        }
        if self.allows_mixed_edges {
            flags |= Self::FLAG_MIXED;
        }
        if self.modifiable {
            flags |= Self::FLAG_MODIFIABLE;
        }
        flags
    }

    /// Unpacks a wire flags byte.
    ///
    /// Returns `None` when reserved bits are set; readers must treat that as
    /// a format error rather than silently dropping unknown flags.
    #[must_use]
    pub fn from_flags(flags: u8) -> Option<Self> {
        if flags & !Self::FLAG_ALL != 0 {
            return None;
        }
        Some(Self {
            directed: flags & Self::FLAG_DIRECTED != 0,
            allows_self_loops: flags & Self::FLAG_SELF_LOOPS != 0,
            allows_multiple_edges: flags & Self::FLAG_MULTI != 0,
            allows_mixed_edges: flags & Self::FLAG_MIXED != 0,
            modifiable: flags & Self::FLAG_MODIFIABLE != 0,
        })
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn flags_round_trip_every_combination() {
        for flags in 0..=GraphDescriptor::FLAG_ALL {
            let descriptor = GraphDescriptor::from_flags(flags).unwrap();
            assert_eq!(descriptor.to_flags(), flags);
        }
    }

    #[test]
    fn reserved_bits_are_rejected() {
        assert!(GraphDescriptor::from_flags(0b0010_0000).is_none());
        assert!(GraphDescriptor::from_flags(0b1000_0001).is_none());
    }

    #[test]
    fn as_unmodifiable_only_clears_modifiable() {
        let descriptor = GraphDescriptor {
            directed: true,
            allows_self_loops: true,
            allows_multiple_edges: false,
            allows_mixed_edges: false,
            modifiable: true,
        };
        let frozen = descriptor.as_unmodifiable();
        assert!(!frozen.modifiable);
        assert!(frozen.directed);
        assert!(frozen.allows_self_loops);
    }

    #[test]
    fn simple_shape_predicate() {
        assert!(GraphDescriptor::simple(true, false).is_simple());
        let multi = GraphDescriptor {
            allows_multiple_edges: true,
            ..GraphDescriptor::simple(false, false)
        };
        assert!(!multi.is_simple());
    }
}
