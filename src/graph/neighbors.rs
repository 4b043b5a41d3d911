//! # Neighborhood query operations
//!
//! ## Description
//! `impl Graph` block covering `neighbors`, `neighbor_ids`, and
//! `adjacency_list`. All three return freshly allocated, deterministically
//! sorted containers.
use std::collections::HashMap;

use itertools::Itertools;

use crate::edge::Edge;
use crate::errors::{GraphError, GraphResult};

use super::Graph;

impl Graph {
    /// Edges incident to `id`: directed edges where `id` is the source, and
    /// undirected edges incident to `id` from either mirrored bucket, each edge
    /// id appearing at most once (a self-loop appears once). Sorted by edge id
    /// ascending.
    pub fn neighbors(&self, id: &str) -> GraphResult<Vec<Edge>> {
        if id.is_empty() {
            return Err(GraphError::EmptyVertexId);
        }
        if !self.has_vertex(id) {
            return Err(GraphError::VertexNotFound);
        }
        let edge_state = self.edges.read();
        let ids: Vec<String> = match edge_state.adjacency.get(id) {
            Some(by_dest) => by_dest.values().flat_map(|set| set.iter().cloned()).collect(),
            None => Vec::new(),
        };
        let mut edges: Vec<Edge> = ids.into_iter().filter_map(|edge_id| edge_state.catalog.get(&edge_id).cloned()).collect();
        edges.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(edges)
    }

    /// Vertex ids adjacent to `id`, unique and sorted lexicographically
    /// ascending. For each edge returned by [`Graph::neighbors`]: if its source
    /// is `id`, its destination is included; otherwise, if it is undirected and
    /// its destination is `id`, its source is included.
    pub fn neighbor_ids(&self, id: &str) -> GraphResult<Vec<String>> {
        let incident = self.neighbors(id)?;
        let ids = incident
            .iter()
            .filter_map(|edge| {
                if edge.from() == id {
                    Some(edge.to().to_string())
                } else if !edge.directed() && edge.to() == id {
                    Some(edge.from().to_string())
                } else {
                    None
                }
            })
            .unique()
            .sorted()
            .collect();
        Ok(ids)
    }

    /// Snapshot mapping each source vertex id to a freshly allocated, sorted
    /// list of incident edge ids. Key iteration order of the returned map is
    /// not part of the contract; per-list order is.
    pub fn adjacency_list(&self) -> HashMap<String, Vec<String>> {
        let edge_state = self.edges.read();
        edge_state
            .adjacency
            .iter()
            .map(|(source, by_dest)| {
                let ids = by_dest.values().flat_map(|set| set.iter().cloned()).sorted().collect();
                (source.clone(), ids)
            })
            .collect()
    }
}
