// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use std::sync::Arc;

use valgraph_adapter::{
    EndpointPair, IdentityWeight, MutableValueGraph, ValueGraphAdapter, WeightConverter,
};

fn sample() -> ValueGraphAdapter<String, f64, IdentityWeight> {
    let mut scratch = MutableValueGraph::new(true, false);
    scratch.put_edge_value("v1".into(), "v2".into(), 5.0).unwrap();
    scratch.put_edge_value("v2".into(), "v3".into(), 2.5).unwrap();
    ValueGraphAdapter::new(scratch.freeze(), IdentityWeight)
}

#[test]
fn clone_is_structurally_equal() {
    let adapter = sample();
    let clone = adapter.try_clone().unwrap();

    assert_eq!(
        adapter.nodes().collect::<Vec<_>>(),
        clone.nodes().collect::<Vec<_>>()
    );
    assert_eq!(
        adapter.edges().collect::<Vec<_>>(),
        clone.edges().collect::<Vec<_>>()
    );
    for edge in adapter.edges() {
        assert_eq!(
            adapter.edge_weight(edge).unwrap(),
            clone.edge_weight(edge).unwrap()
        );
    }
    assert_eq!(
        adapter.view().canonical_hash(),
        clone.view().canonical_hash()
    );
}

#[test]
fn clone_shares_the_converter_allocation() {
    let adapter = sample();
    let clone = adapter.try_clone().unwrap();
    assert!(Arc::ptr_eq(
        &adapter.shared_converter(),
        &clone.shared_converter()
    ));
}

#[test]
fn clone_does_not_alias_the_graph() {
    // The clone owns a freshly built graph, so dropping the original must
    // not invalidate anything the clone answers.
    let clone = {
        let adapter = sample();
        adapter.try_clone().unwrap()
    };
    let edge = EndpointPair::ordered("v1".to_owned(), "v2".to_owned());
    assert_eq!(clone.edge_weight(&edge).unwrap(), 5.0);
    assert_eq!(clone.node_count(), 3);
}

#[test]
fn clone_resets_memoized_lists() {
    let adapter = sample();
    // Force memoization on the source.
    let source_vertices = adapter.vertex_list().to_vec();

    let clone = adapter.try_clone().unwrap();
    // The clone recomputes against its own graph and agrees on content.
    assert_eq!(clone.vertex_list(), source_vertices.as_slice());
    assert_ne!(
        adapter.vertex_list().as_ptr(),
        clone.vertex_list().as_ptr()
    );
}

#[test]
fn clone_preserves_converter_behavior() {
    #[derive(Debug)]
    struct Scale(f64);
    impl WeightConverter<f64> for Scale {
        fn weight_of(&self, value: &f64) -> f64 {
            value * self.0
        }
    }

    let mut scratch = MutableValueGraph::new(false, false);
    scratch.put_edge_value("a".to_owned(), "b".to_owned(), 10.0).unwrap();
    let adapter = ValueGraphAdapter::new(scratch.freeze(), Scale(0.1));
    let clone = adapter.try_clone().unwrap();

    let edge = EndpointPair::unordered("a".to_owned(), "b".to_owned());
    assert_eq!(clone.edge_weight(&edge).unwrap(), 1.0);
}
