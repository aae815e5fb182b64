// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Wire reader.

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::adapter::ValueGraphAdapter;
use crate::convert::WeightConverter;
use valgraph_core::{GraphDescriptor, MutableValueGraph};

use super::{WireError, MAGIC};

/// Reconstructs an adapter from `reader`.
///
/// Mirrors [`write_adapter`](super::write_adapter) exactly: magic,
/// converter state, descriptor flags, nodes, edges. The graph is rebuilt
/// through a fresh scratch [`MutableValueGraph`] honoring the persisted
/// directedness and self-loop flag, then frozen into the adapter's view.
///
/// # Errors
///
/// - [`WireError::BadMagic`] / [`WireError::UnknownFlags`] on a malformed
///   header.
/// - [`WireError::UnsupportedShape`] when the persisted descriptor claims
///   multiple or mixed edges; no partial adapter is produced.
/// - [`WireError::Decode`] on CBOR element failures,
///   [`WireError::Rebuild`] when an edge contradicts the persisted shape,
///   and I/O errors (including truncation) propagated unchanged.
pub fn read_adapter<R, N, V, C>(reader: &mut R) -> Result<ValueGraphAdapter<N, V, C>, WireError>
where
    R: Read,
    N: Clone + Ord + DeserializeOwned,
    V: DeserializeOwned,
    C: WeightConverter<V> + DeserializeOwned,
{
    let mut magic = [0u8; 8];
    reader.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(WireError::BadMagic {
            expected: MAGIC,
            actual: magic,
        });
    }

    let converter: C = read_blob(reader)?;

    let mut flags = [0u8; 1];
    reader.read_exact(&mut flags)?;
    let descriptor = GraphDescriptor::from_flags(flags[0])
        .ok_or(WireError::UnknownFlags { flags: flags[0] })?;
    if !descriptor.is_simple() {
        return Err(WireError::UnsupportedShape { descriptor });
    }

    let mut scratch: MutableValueGraph<N, V> =
        MutableValueGraph::new(descriptor.directed, descriptor.allows_self_loops);

    let node_count = read_u32(reader)?;
    for _ in 0..node_count {
        scratch.add_node(read_blob(reader)?);
    }

    let edge_count = read_u32(reader)?;
    for _ in 0..edge_count {
        let source: N = read_blob(reader)?;
        let target: N = read_blob(reader)?;
        let value: V = read_blob(reader)?;
        scratch.put_edge_value(source, target, value)?;
    }

    Ok(ValueGraphAdapter::new(scratch.freeze(), converter))
}

/// Reconstructs an adapter from an in-memory byte slice.
///
/// # Errors
///
/// Same failure modes as [`read_adapter`].
pub fn read_adapter_from_slice<N, V, C>(
    bytes: &[u8],
) -> Result<ValueGraphAdapter<N, V, C>, WireError>
where
    N: Clone + Ord + DeserializeOwned,
    V: DeserializeOwned,
    C: WeightConverter<V> + DeserializeOwned,
{
    read_adapter(&mut &bytes[..])
}

fn read_u32<R: Read>(reader: &mut R) -> Result<u32, WireError> {
    let mut bytes = [0u8; 4];
    reader.read_exact(&mut bytes)?;
    Ok(u32::from_le_bytes(bytes))
}

fn read_blob<R: Read, T: DeserializeOwned>(reader: &mut R) -> Result<T, WireError> {
    let len = read_u32(reader)? as usize;
    let mut bytes = vec![0u8; len];
    reader.read_exact(&mut bytes)?;
    ciborium::from_reader(&bytes[..]).map_err(|e| WireError::Decode(e.to_string()))
}
