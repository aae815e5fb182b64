// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Wire writer.

use std::io::Write;

use serde::Serialize;

use crate::adapter::ValueGraphAdapter;
use crate::convert::WeightConverter;

use super::{u32_count, WireError, MAGIC};

/// Serializes `adapter` to `writer`.
///
/// Element order follows the wrapped graph's canonical iteration order, so
/// the output is deterministic: equal graphs serialize to identical bytes.
/// For directed graphs each edge is written source first, target second.
///
/// # Errors
///
/// I/O errors propagate unchanged; [`WireError::Encode`] on CBOR failures;
/// [`WireError::CountOverflow`] when a count or blob length does not fit in
/// 32 bits. A failure after some elements were written leaves `writer` in
/// an indeterminate state.
pub fn write_adapter<W, N, V, C>(
    writer: &mut W,
    adapter: &ValueGraphAdapter<N, V, C>,
) -> Result<(), WireError>
where
    W: Write,
    N: Clone + Ord + Serialize,
    V: Serialize,
    C: WeightConverter<V> + Serialize,
{
    writer.write_all(&MAGIC)?;
    write_blob(writer, adapter.converter())?;
    writer.write_all(&[adapter.descriptor().to_flags()])?;

    let graph = adapter.view();
    writer.write_all(&u32_count(graph.node_count())?.to_le_bytes())?;
    for node in graph.nodes() {
        write_blob(writer, node)?;
    }

    writer.write_all(&u32_count(graph.edge_count())?.to_le_bytes())?;
    for (pair, value) in graph.edge_entries() {
        write_blob(writer, pair.node_u())?;
        write_blob(writer, pair.node_v())?;
        write_blob(writer, value)?;
    }
    Ok(())
}

/// Serializes `adapter` to an owned byte vector.
///
/// # Errors
///
/// Same failure modes as [`write_adapter`].
pub fn write_adapter_to_vec<N, V, C>(
    adapter: &ValueGraphAdapter<N, V, C>,
) -> Result<Vec<u8>, WireError>
where
    N: Clone + Ord + Serialize,
    V: Serialize,
    C: WeightConverter<V> + Serialize,
{
    let mut bytes = Vec::new();
    write_adapter(&mut bytes, adapter)?;
    Ok(bytes)
}

fn write_blob<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    element: &T,
) -> Result<(), WireError> {
    let mut bytes = Vec::new();
    ciborium::into_writer(element, &mut bytes).map_err(|e| WireError::Encode(e.to_string()))?;
    writer.write_all(&u32_count(bytes.len())?.to_le_bytes())?;
    writer.write_all(&bytes)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::convert::IdentityWeight;
    use valgraph_core::MutableValueGraph;

    #[test]
    fn stream_opens_with_magic() {
        let mut scratch: MutableValueGraph<String, f64> = MutableValueGraph::new(true, false);
        scratch
            .put_edge_value("v1".into(), "v2".into(), 5.0)
            .unwrap();
        let adapter = ValueGraphAdapter::new(scratch.freeze(), IdentityWeight);

        let bytes = write_adapter_to_vec(&adapter).unwrap();
        assert_eq!(&bytes[0..8], &MAGIC);
    }

    #[test]
    fn equal_graphs_serialize_identically() {
        let build = |order_flip: bool| {
            let mut scratch: MutableValueGraph<u32, f64> = MutableValueGraph::new(false, false);
            if order_flip {
                scratch.put_edge_value(3, 2, 8.0).unwrap();
                scratch.put_edge_value(2, 1, 9.0).unwrap();
            } else {
                scratch.put_edge_value(1, 2, 9.0).unwrap();
                scratch.put_edge_value(2, 3, 8.0).unwrap();
            }
            ValueGraphAdapter::new(scratch.freeze(), IdentityWeight)
        };
        assert_eq!(
            hex::encode(write_adapter_to_vec(&build(false)).unwrap()),
            hex::encode(write_adapter_to_vec(&build(true)).unwrap())
        );
    }
}
