//! # Cloning and derived views
//!
//! ## Description
//! A hand-rolled [`Clone`] impl performing a deep topology clone, plus
//! `clone_empty`, `unweighted_view`, and `induced_subgraph`. None of these
//! mutate the source graph; all carry the identity counter forward so ids
//! minted on a derived graph never collide with ids copied from the source.
use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;

use crate::config::GraphFlags;
use crate::edge::Edge;
use crate::identity::IdentityCounter;
use crate::vertex::Vertex;

use super::{EdgeState, Graph, VertexState};

impl Clone for Graph {
    /// Deep topology clone: configuration flags copied, vertices copied (shallow
    /// metadata), every edge copied as a fresh record preserving id, endpoints,
    /// weight, and directedness, adjacency rebuilt from scratch. No edge record
    /// in the clone aliases a record in the source.
    fn clone(&self) -> Self {
        let vertex_state = self.vertices.read();
        let edge_state = self.edges.read();
        let new_vertices = VertexState { flags: vertex_state.flags, catalog: vertex_state.catalog.clone() };
        let mut new_edges = EdgeState::empty();
        for edge in edge_state.catalog.values() {
            new_edges.insert_edge(edge.clone());
        }
        Graph {
            vertices: RwLock::new(new_vertices),
            edges: RwLock::new(new_edges),
            next_id: IdentityCounter::from_raw(self.next_id.load()),
        }
    }
}

impl Graph {
    /// A new graph with the same configuration flags and a copy of the vertex
    /// catalog (metadata handles shallow-copied), no edges, and the identity
    /// counter advanced to this graph's current value. Takes both read locks in
    /// the documented order (vertex catalog, then edge/adjacency) for a
    /// consistent snapshot even though only the vertex catalog's contents are
    /// copied.
    pub fn clone_empty(&self) -> Graph {
        let vertex_state = self.vertices.read();
        let _edge_state = self.edges.read();
        let new_vertices = VertexState { flags: vertex_state.flags, catalog: vertex_state.catalog.clone() };
        Graph {
            vertices: RwLock::new(new_vertices),
            edges: RwLock::new(EdgeState::empty()),
            next_id: IdentityCounter::from_raw(self.next_id.load()),
        }
    }

    /// A fresh graph with identical topology (same vertex ids, same edge ids,
    /// same endpoints, same directedness) but weighted disabled and every
    /// copied edge's weight forced to zero. The identity counter is carried
    /// over so a subsequent `add_edge` on the view cannot collide with a
    /// copied id. Does not mutate `self`.
    pub fn unweighted_view(&self) -> Graph {
        let vertex_state = self.vertices.read();
        let edge_state = self.edges.read();
        let mut flags = vertex_state.flags;
        flags.remove(GraphFlags::WEIGHTED);
        let new_vertices = VertexState { flags, catalog: vertex_state.catalog.clone() };
        let mut new_edges = EdgeState::empty();
        for edge in edge_state.catalog.values() {
            new_edges.insert_edge(Edge::new(
                edge.id().to_string(),
                edge.from().to_string(),
                edge.to().to_string(),
                0.0,
                edge.directed(),
            ));
        }
        Graph {
            vertices: RwLock::new(new_vertices),
            edges: RwLock::new(new_edges),
            next_id: IdentityCounter::from_raw(self.next_id.load()),
        }
    }

    /// A fresh graph with the same configuration as `self`, containing only
    /// vertices whose id is present in `keep` and only edges whose both
    /// endpoints are in `keep`. Copied edges preserve id, weight, and
    /// directedness. Identity counter carried over. Does not mutate `self`.
    pub fn induced_subgraph(&self, keep: &HashSet<String>) -> Graph {
        let vertex_state = self.vertices.read();
        let edge_state = self.edges.read();
        let new_catalog: HashMap<String, Vertex> = vertex_state
            .catalog
            .iter()
            .filter(|(id, _)| keep.contains(*id))
            .map(|(id, vertex)| (id.clone(), vertex.clone()))
            .collect();
        let new_vertices = VertexState { flags: vertex_state.flags, catalog: new_catalog };
        let mut new_edges = EdgeState::empty();
        for edge in edge_state.catalog.values() {
            if keep.contains(edge.from()) && keep.contains(edge.to()) {
                new_edges.insert_edge(edge.clone());
            }
        }
        Graph {
            vertices: RwLock::new(new_vertices),
            edges: RwLock::new(new_edges),
            next_id: IdentityCounter::from_raw(self.next_id.load()),
        }
    }
}
