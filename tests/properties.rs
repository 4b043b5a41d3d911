//! Focused checks of the quantified invariants P1-P10.
use std::collections::HashSet;

use latticegraph::{EdgeOption, Graph, GraphOption};

fn invariants_hold(graph: &Graph) {
    // I1/I2: every edge id appears where it should, and only there; every
    // endpoint is a known vertex.
    let adjacency = graph.adjacency_list();
    for edge in graph.edges() {
        assert!(graph.has_vertex(edge.from()));
        assert!(graph.has_vertex(edge.to()));
        let forward = adjacency.get(edge.from()).map(|ids| ids.contains(&edge.id().to_string())).unwrap_or(false);
        assert!(forward, "edge {} missing from forward bucket", edge.id());
        if !edge.directed() && edge.from() != edge.to() {
            let mirror = adjacency.get(edge.to()).map(|ids| ids.contains(&edge.id().to_string())).unwrap_or(false);
            assert!(mirror, "edge {} missing from mirror bucket", edge.id());
        }
    }
    // I5: no empty nested buckets.
    for (_, ids) in adjacency {
        assert!(!ids.is_empty());
    }
}

#[test]
fn p1_p2_p5_basic_consistency() {
    let graph = Graph::new(&[GraphOption::EnableMultiEdges, GraphOption::EnableLoops, GraphOption::EnableWeighted]);
    graph.add_edge("A", "B", 1.0, &[]).unwrap();
    graph.add_edge("B", "C", 1.0, &[]).unwrap();
    graph.add_edge("C", "C", 1.0, &[]).unwrap();
    invariants_hold(&graph);

    for id in graph.vertices() {
        assert!(graph.has_vertex(&id));
    }
    let mut ids = graph.vertices();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    ids.dedup();
    assert_eq!(ids.len(), graph.vertex_count());
}

#[test]
fn p3_monotonic_auto_ids() {
    let graph = Graph::new(&[]);
    let mut seen = Vec::new();
    for i in 0..5 {
        let from = format!("v{i}");
        let to = format!("v{}", i + 1);
        let id = graph.add_edge(&from, &to, 0.0, &[]).unwrap();
        seen.push(id);
    }
    let mut sorted = seen.clone();
    sorted.sort();
    assert_eq!(seen, sorted, "auto ids e1..e5 already sort lexicographically");
}

#[test]
fn p4_policy_invariants() {
    let weighted = Graph::new(&[GraphOption::EnableWeighted]);
    weighted.add_edge("A", "B", 5.0, &[]).unwrap();
    let unweighted = Graph::new(&[]);
    unweighted.add_edge("A", "B", 0.0, &[]).unwrap();
    for edge in unweighted.edges() {
        assert_eq!(edge.weight(), 0.0);
    }

    let no_loops = Graph::new(&[]);
    no_loops.add_edge("A", "B", 0.0, &[]).unwrap();
    assert!(no_loops.add_edge("A", "A", 0.0, &[]).is_err());
    for edge in no_loops.edges() {
        assert_ne!(edge.from(), edge.to());
    }

    let no_multi = Graph::new(&[]);
    no_multi.add_edge("A", "B", 0.0, &[]).unwrap();
    assert!(no_multi.add_edge("A", "B", 0.0, &[]).is_err());
}

#[test]
fn p6_edge_enumeration_matches_count() {
    let graph = Graph::new(&[]);
    graph.add_edge("A", "B", 0.0, &[]).unwrap();
    graph.add_edge("B", "C", 0.0, &[]).unwrap();
    let edges = graph.edges();
    assert_eq!(edges.len(), graph.edge_count());
    let mut ids: Vec<&str> = edges.iter().map(|e| e.id()).collect();
    let mut unique = ids.clone();
    unique.dedup();
    ids.sort();
    assert_eq!(ids.len(), unique.len());
}

#[test]
fn p7_degree_sums_match_directed_edge_count() {
    let graph = Graph::new_mixed(&[GraphOption::EnableLoops, GraphOption::EnableMultiEdges]);
    graph.add_edge("A", "B", 0.0, &[EdgeOption::OverrideDirectedness(true)]).unwrap();
    graph.add_edge("B", "C", 0.0, &[EdgeOption::OverrideDirectedness(true)]).unwrap();
    graph.add_edge("C", "A", 0.0, &[EdgeOption::OverrideDirectedness(true)]).unwrap();
    graph.add_edge("A", "A", 0.0, &[EdgeOption::OverrideDirectedness(true)]).unwrap();
    graph.add_edge("A", "D", 0.0, &[EdgeOption::OverrideDirectedness(false)]).unwrap();
    graph.add_edge("D", "D", 0.0, &[EdgeOption::OverrideDirectedness(false)]).unwrap();

    let directed_count = graph.edges().into_iter().filter(|e| e.directed()).count();
    let in_sum: usize = graph.vertices().iter().map(|v| graph.degree(v).unwrap().in_degree).sum();
    let out_sum: usize = graph.vertices().iter().map(|v| graph.degree(v).unwrap().out_degree).sum();
    assert_eq!(in_sum, directed_count);
    assert_eq!(out_sum, directed_count);
}

#[test]
fn p8_clone_preserves_topology_without_aliasing() {
    let graph = Graph::new(&[GraphOption::EnableWeighted]);
    graph.add_edge("A", "B", 1.0, &[]).unwrap();
    graph.add_edge("B", "C", 2.0, &[]).unwrap();

    let cloned = graph.clone();
    assert_eq!(graph.vertices(), cloned.vertices());
    let original_ids: HashSet<String> = graph.edges().into_iter().map(|e| e.id().to_string()).collect();
    let cloned_ids: HashSet<String> = cloned.edges().into_iter().map(|e| e.id().to_string()).collect();
    assert_eq!(original_ids, cloned_ids);

    cloned.set_edge_id("e1", "renamed").unwrap();
    assert!(graph.get_edge("e1").is_ok());
    assert!(cloned.get_edge("e1").is_err());
}

#[test]
fn p9_induced_subgraph_matches_keep_set() {
    let graph = Graph::new(&[]);
    graph.add_edge("A", "B", 0.0, &[]).unwrap();
    graph.add_edge("B", "C", 0.0, &[]).unwrap();
    graph.add_edge("A", "C", 0.0, &[]).unwrap();

    let keep: HashSet<String> = ["A", "B"].iter().map(|s| s.to_string()).collect();
    let induced = graph.induced_subgraph(&keep);

    let induced_vertices: HashSet<String> = induced.vertices().into_iter().collect();
    assert_eq!(induced_vertices, keep);
    assert_eq!(induced.edge_count(), 1);
    assert!(induced.has_edge("A", "B"));
    assert!(!induced.has_edge("A", "C"));

    // Source is unchanged.
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.vertex_count(), 3);
}

#[test]
fn p10_unweighted_view_zeroes_weights_without_mutating_source() {
    let graph = Graph::new(&[GraphOption::EnableWeighted]);
    graph.add_edge("A", "B", 4.5, &[]).unwrap();

    let view = graph.unweighted_view();
    assert!(!view.stats().weighted);
    for edge in view.edges() {
        assert_eq!(edge.weight(), 0.0);
    }
    let source_ids: HashSet<String> = graph.edges().into_iter().map(|e| e.id().to_string()).collect();
    let view_ids: HashSet<String> = view.edges().into_iter().map(|e| e.id().to_string()).collect();
    assert_eq!(source_ids, view_ids);
    assert_eq!(graph.get_edge("e1").unwrap().weight(), 4.5);

    let new_id = view.add_edge("B", "C", 0.0, &[EdgeOption::AssignId("e99".into())]).unwrap();
    assert_ne!(new_id, "e1");
}
