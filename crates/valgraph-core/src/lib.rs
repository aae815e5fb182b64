// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! valgraph-core: immutable weighted value-graph storage.
//!
//! A *value graph* attaches an arbitrary payload to every edge instead of
//! (or in addition to) a numeric weight. This crate provides the storage
//! layer: [`EndpointPair`] edge identities, the [`GraphDescriptor`] shape
//! flags, the frozen [`ImmutableValueGraph`] view, and the
//! [`MutableValueGraph`] scratch builder that produces it.
//!
//! Iteration order is canonical everywhere (`BTreeMap`/`BTreeSet` storage):
//! two structurally equal graphs iterate identically and hash identically
//! via [`ImmutableValueGraph::canonical_hash`].
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

mod builder;
mod descriptor;
mod endpoints;
mod store;

/// Scratch builder and its rejection error.
pub use builder::{BuildError, MutableValueGraph};
/// Graph shape flags (directed, self-loops, multi, mixed, modifiable).
pub use descriptor::GraphDescriptor;
/// Edge identity as an ordered or unordered node pair.
pub use endpoints::EndpointPair;
/// Frozen read-only value graph.
pub use store::ImmutableValueGraph;
