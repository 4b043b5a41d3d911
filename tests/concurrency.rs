//! Concurrent-mutation smoke test: several threads hammering a shared graph
//! should leave the catalogs internally consistent (I1/I2/I5) once joined.
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use latticegraph::{Graph, GraphOption};

#[test]
fn concurrent_mutation_preserves_invariants() {
    let graph = Arc::new(Graph::new(&[GraphOption::EnableMultiEdges, GraphOption::EnableWeighted]));
    let mut handles = Vec::new();

    for worker in 0..8 {
        let graph = Arc::clone(&graph);
        handles.push(thread::spawn(move || {
            for i in 0..50 {
                let from = format!("w{worker}-{i}");
                let to = format!("w{worker}-{}", i + 1);
                graph.add_edge(&from, &to, 1.0, &[]).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(graph.edge_count(), 8 * 50);

    let adjacency = graph.adjacency_list();
    let mut seen_ids: HashSet<String> = HashSet::new();
    for (source, ids) in &adjacency {
        assert!(!ids.is_empty(), "empty bucket left behind for {source}");
        for id in ids {
            assert!(seen_ids.insert(id.clone()), "edge id {id} appeared under two sources");
            let edge = graph.get_edge(id).unwrap();
            assert!(graph.has_vertex(edge.from()));
            assert!(graph.has_vertex(edge.to()));
        }
    }
    assert_eq!(seen_ids.len(), graph.edge_count());
}

#[test]
fn concurrent_removal_leaves_no_dangling_buckets() {
    let graph = Arc::new(Graph::new(&[GraphOption::EnableWeighted]));
    let ids: Vec<String> = (0..100)
        .map(|i| {
            let from = format!("v{i}");
            let to = format!("v{}", i + 1);
            graph.add_edge(&from, &to, 1.0, &[]).unwrap()
        })
        .collect();

    let mut handles = Vec::new();
    for chunk in ids.chunks(10) {
        let graph = Arc::clone(&graph);
        let chunk: Vec<String> = chunk.to_vec();
        handles.push(thread::spawn(move || {
            for id in chunk {
                graph.remove_edge(&id).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(graph.edge_count(), 0);
    assert!(graph.adjacency_list().is_empty());
}
