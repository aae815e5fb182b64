// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Wire format for serialized adapters.
//!
//! The stream persists exactly the structural information needed to rebuild
//! an equivalent immutable graph, independent of any runtime object-graph
//! mechanism. Layout (little-endian, every serde element a `u32`
//! length-prefixed CBOR blob):
//!
//! ```text
//! [magic "VGADAPT1"]
//! [converter blob]                     adapter-native state
//! [descriptor flags: 1 byte]
//! [u32 n][node blob] * n               canonical iteration order
//! [u32 m]([node_u][node_v][value]) * m
//! ```
//!
//! Reading mirrors writing exactly. Only simple shapes are accepted back:
//! a persisted descriptor claiming multiple or mixed edges aborts the
//! rebuild with [`WireError::UnsupportedShape`] and produces no adapter.
//!
//! Stream I/O is synchronous and blocking; a failure mid-stream leaves the
//! stream indeterminate and is surfaced to the caller, never retried here.

mod read;
mod write;

pub use read::{read_adapter, read_adapter_from_slice};
pub use write::{write_adapter, write_adapter_to_vec};

use std::io;

use thiserror::Error;
use valgraph_core::{BuildError, GraphDescriptor};

/// Magic bytes opening every serialized adapter.
pub const MAGIC: [u8; 8] = *b"VGADAPT1";

/// Errors raised while writing or reading the wire format.
#[derive(Debug, Error)]
pub enum WireError {
    /// Stream I/O failure, propagated unchanged from the underlying
    /// reader/writer.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The stream does not open with [`MAGIC`].
    #[error("invalid magic: expected {expected:?}, got {actual:?}")]
    BadMagic {
        /// Expected magic bytes.
        expected: [u8; 8],
        /// Actual bytes found.
        actual: [u8; 8],
    },

    /// The descriptor flags byte sets reserved bits.
    #[error("unknown descriptor flag bits: {flags:#04x}")]
    UnknownFlags {
        /// The offending flags byte.
        flags: u8,
    },

    /// The persisted descriptor claims a shape this adapter does not
    /// support (multiple or mixed edges).
    #[error("unsupported graph shape: multiple or mixed edges")]
    UnsupportedShape {
        /// The rejected descriptor.
        descriptor: GraphDescriptor,
    },

    /// CBOR encoding of an element failed.
    #[error("CBOR encode failed: {0}")]
    Encode(String),

    /// CBOR decoding of an element failed.
    #[error("CBOR decode failed: {0}")]
    Decode(String),

    /// The scratch rebuild rejected a persisted edge (e.g. a self-loop in
    /// a stream whose descriptor disallows them).
    #[error("rebuild rejected persisted edge: {0}")]
    Rebuild(#[from] BuildError),

    /// An element count or blob length exceeds the format's 32-bit range.
    #[error("element count exceeds u32 range: {count}")]
    CountOverflow {
        /// The out-of-range count.
        count: usize,
    },
}

pub(crate) fn u32_count(count: usize) -> Result<u32, WireError> {
    u32::try_from(count).map_err(|_| WireError::CountOverflow { count })
}
