//! # Statistics
//!
//! ## Description
//! A best-effort, read-only snapshot of the graph's configuration and size.
//! `stats()` never holds both locks at once: it reads flags and vertex count
//! under the vertex lock, releases it, then acquires the edge lock to count
//! and classify edges.
use super::Graph;

/// # Graph statistics snapshot
///
/// ## Description
/// A point-in-time snapshot; under concurrent mutation the vertex-count and
/// edge-count fields may reflect slightly different instants of the graph's
/// lifetime, since the two counts are read under separate lock acquisitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    pub default_directedness: bool,
    pub weighted: bool,
    pub multi_edges_allowed: bool,
    pub loops_allowed: bool,
    pub mixed_mode: bool,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub directed_edge_count: usize,
    pub undirected_edge_count: usize,
}

impl Graph {
    /// Build a [`GraphStats`] snapshot.
    pub fn stats(&self) -> GraphStats {
        let (flags, vertex_count) = {
            let vertex_state = self.vertices.read();
            (vertex_state.flags, vertex_state.catalog.len())
        };
        let (edge_count, directed_edge_count, undirected_edge_count) = {
            let edge_state = self.edges.read();
            let directed = edge_state.catalog.values().filter(|edge| edge.directed()).count();
            (edge_state.catalog.len(), directed, edge_state.catalog.len() - directed)
        };
        GraphStats {
            default_directedness: flags.directed_default(),
            weighted: flags.weighted(),
            multi_edges_allowed: flags.multi_edges_allowed(),
            loops_allowed: flags.loops_allowed(),
            mixed_mode: flags.mixed_mode(),
            vertex_count,
            edge_count,
            directed_edge_count,
            undirected_edge_count,
        }
    }
}
