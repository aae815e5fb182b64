// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Value-to-weight conversion seam.

use serde::{Deserialize, Serialize};

/// Converts an edge's payload value into a numeric weight.
///
/// Contract:
/// - Pure: the result depends only on `value` and the converter's own
///   (fixed) state; no ambient input (time, randomness, globals).
/// - Stateless-shareable: a single converter instance is shared across
///   clones of an adapter, so implementations must be safe to reuse.
/// - Persistable when the wire format is used: the wire codec persists the
///   converter's state via serde, so converters crossing a serialization
///   boundary must implement `Serialize`/`Deserialize`. That requirement is
///   checked at the call site's type bounds, not discovered at I/O time.
pub trait WeightConverter<V> {
    /// Derives the numeric weight for `value`.
    fn weight_of(&self, value: &V) -> f64;
}

/// Identity converter for graphs whose edge values already are `f64`
/// weights.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityWeight;

impl WeightConverter<f64> for IdentityWeight {
    fn weight_of(&self, value: &f64) -> f64 {
        *value
    }
}
