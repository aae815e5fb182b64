// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! valgraph-adapter: read-only graph adapter over an immutable value graph.
//!
//! [`ValueGraphAdapter`] wraps a frozen [`ImmutableValueGraph`] plus a
//! caller-supplied [`WeightConverter`] and exposes the full graph contract:
//! every read delegates to the wrapped graph (values pass through the
//! converter when a numeric weight is requested), while every mutating
//! operation is rejected with [`GraphError::Immutable`] before any side
//! effect.
//!
//! The [`wire`] module serializes an adapter to a compact self-describing
//! byte stream and rebuilds an equivalent immutable structure on read.
//!
//! # Example
//!
//! ```
//! use valgraph_adapter::{IdentityWeight, MutableValueGraph, ValueGraphAdapter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut scratch = MutableValueGraph::new(true, false);
//! scratch.put_edge_value("v1", "v2", 5.0)?;
//!
//! let adapter = ValueGraphAdapter::new(scratch.freeze(), IdentityWeight);
//! assert_eq!(adapter.edge_weight_between(&"v1", &"v2")?, 5.0);
//! assert!(adapter.add_node("v3").is_err());
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]

mod adapter;
mod convert;
mod errors;
mod ops;
/// Wire codec for adapters (write/read byte streams).
pub mod wire;

/// The read-only adapter itself.
pub use adapter::ValueGraphAdapter;
/// Value-to-weight conversion seam.
pub use convert::{IdentityWeight, WeightConverter};
/// Graph operation errors.
pub use errors::GraphError;
/// The mutating-operation set (always rejected by the adapter).
pub use ops::MutationOp;
/// Storage-layer types re-exported for callers assembling graphs.
pub use valgraph_core::{
    BuildError, EndpointPair, GraphDescriptor, ImmutableValueGraph, MutableValueGraph,
};
