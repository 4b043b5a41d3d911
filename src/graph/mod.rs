//! # Graph module
//!
//! ## Description
//! [`Graph`] is the crate's single composable graph type: string-identified
//! vertices, identified edges, directed/undirected/mixed orientation, optional
//! weighting, optional multi-edges, optional self-loops. This module owns
//! construction, the vertex lifecycle, and the two lock-guarded state blocks;
//! sibling modules ([`edges`], [`neighbors`], [`views`], [`stats`]) add the rest
//! of the operation surface as `impl Graph` blocks.
pub mod edges;
pub mod neighbors;
pub mod stats;
pub mod views;

use std::collections::HashMap;
use parking_lot::RwLock;

use crate::config::{apply_options, GraphFlags, GraphOption};
use crate::edge::Edge;
use crate::errors::{GraphError, GraphResult};
use crate::identity::IdentityCounter;
use crate::vertex::Vertex;

// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * LOCK-GUARDED STATE                                                                *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *

/// Vertex catalog plus the immutable configuration flags, guarded by the vertex
/// lock. Configuration flags never change after construction, so sharing the
/// lock with the catalog costs nothing and keeps the lock count at two.
pub(crate) struct VertexState {
    pub(crate) flags: GraphFlags,
    pub(crate) catalog: HashMap<String, Vertex>,
}

/// Edge catalog plus the adjacency index, guarded by the edge/adjacency lock.
/// Adjacency is `source -> destination -> edge ids`, mirrored under
/// `destination -> source` for undirected, non-loop edges.
pub(crate) struct EdgeState {
    pub(crate) catalog: HashMap<String, Edge>,
    pub(crate) adjacency: HashMap<String, HashMap<String, std::collections::HashSet<String>>>,
}

impl EdgeState {
    fn empty() -> Self {
        Self { catalog: HashMap::new(), adjacency: HashMap::new() }
    }

    fn insert_bucket(&mut self, from: &str, to: &str, edge_id: &str) {
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .entry(to.to_string())
            .or_default()
            .insert(edge_id.to_string());
    }

    fn remove_bucket(&mut self, from: &str, to: &str, edge_id: &str) {
        if let Some(by_dest) = self.adjacency.get_mut(from) {
            if let Some(ids) = by_dest.get_mut(to) {
                ids.remove(edge_id);
                if ids.is_empty() {
                    by_dest.remove(to);
                }
            }
            if by_dest.is_empty() {
                self.adjacency.remove(from);
            }
        }
    }

    /// Insert `edge` into the catalog and adjacency index, mirroring undirected
    /// non-loop edges.
    pub(crate) fn insert_edge(&mut self, edge: Edge) {
        self.insert_bucket(edge.from(), edge.to(), edge.id());
        if !edge.directed() && !edge.is_loop() {
            self.insert_bucket(edge.to(), edge.from(), edge.id());
        }
        self.catalog.insert(edge.id().to_string(), edge);
    }

    /// Remove the edge with id `edge_id` from the catalog and prune both
    /// adjacency mirrors. Returns the removed edge, if present.
    pub(crate) fn remove_edge(&mut self, edge_id: &str) -> Option<Edge> {
        let edge = self.catalog.remove(edge_id)?;
        self.remove_bucket(edge.from(), edge.to(), edge.id());
        if !edge.directed() && !edge.is_loop() {
            self.remove_bucket(edge.to(), edge.from(), edge.id());
        }
        Some(edge)
    }

    /// Rename the edge with id `old` to `new` in the catalog and both adjacency
    /// mirrors, in place. Caller has already validated `new` is free.
    pub(crate) fn rename_edge(&mut self, old: &str, new: &str) {
        if let Some(mut edge) = self.catalog.remove(old) {
            self.remove_bucket(edge.from(), edge.to(), old);
            if !edge.directed() && !edge.is_loop() {
                self.remove_bucket(edge.to(), edge.from(), old);
            }
            edge.set_id(new);
            self.insert_bucket(edge.from(), edge.to(), new);
            if !edge.directed() && !edge.is_loop() {
                self.insert_bucket(edge.to(), edge.from(), new);
            }
            self.catalog.insert(new.to_string(), edge);
        }
    }
}

// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * GRAPH                                                                             *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *

/// # Graph
///
/// ## Description
/// An in-memory, deterministic, thread-safe labeled graph. See the crate-level
/// documentation for the full capability model.
///
/// ## Lock discipline
/// Two independent `parking_lot::RwLock`s partition the state: one over the
/// vertex catalog and configuration flags, one over the edge catalog and
/// adjacency index. Operations that need both always take the vertex lock
/// first. The identity counter lives outside either lock and is updated with
/// atomic primitives, so auto-id reservation never waits on catalog mutation.
pub struct Graph {
    pub(crate) vertices: RwLock<VertexState>,
    pub(crate) edges: RwLock<EdgeState>,
    pub(crate) next_id: IdentityCounter,
}

impl Graph {
    /// Construct an empty graph, applying `options` left-to-right.
    pub fn new(options: &[GraphOption]) -> Self {
        let flags = apply_options(GraphFlags::empty(), options);
        Self {
            vertices: RwLock::new(VertexState { flags, catalog: HashMap::new() }),
            edges: RwLock::new(EdgeState::empty()),
            next_id: IdentityCounter::new(),
        }
    }

    /// Construct an empty graph with mixed mode enabled before `options` are
    /// applied, equivalent to `Graph::new` with `GraphOption::EnableMixedMode`
    /// prepended.
    pub fn new_mixed(options: &[GraphOption]) -> Self {
        let flags = apply_options(GraphFlags::MIXED_MODE, options);
        Self {
            vertices: RwLock::new(VertexState { flags, catalog: HashMap::new() }),
            edges: RwLock::new(EdgeState::empty()),
            next_id: IdentityCounter::new(),
        }
    }

    /// The graph's immutable capability flags.
    pub fn config(&self) -> GraphFlags {
        self.vertices.read().flags
    }

    /// Whether new edges default to directed when no per-edge override is given.
    pub fn is_directed_default(&self) -> bool {
        self.config().directed_default()
    }

    /// Reset the graph to empty: catalogs and adjacency reinitialized, identity
    /// counter reset to zero, configuration flags preserved. Takes both locks in
    /// the documented order.
    pub fn clear(&self) {
        let mut vertex_state = self.vertices.write();
        let mut edge_state = self.edges.write();
        vertex_state.catalog.clear();
        edge_state.catalog.clear();
        edge_state.adjacency.clear();
        // Safe to reset directly (rather than via the CAS catch-up path): both
        // write locks are held, so no concurrent add_edge can be mid-flight.
        self.next_id.hard_reset();
    }

    // * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
    // * VERTEX LIFECYCLE                                                              *
    // * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *

    /// Register `id` in the vertex catalog with empty metadata. Idempotent:
    /// calling this on an existing id is a no-op.
    pub fn add_vertex(&self, id: &str) -> GraphResult<()> {
        if id.is_empty() {
            return Err(GraphError::EmptyVertexId);
        }
        let mut state = self.vertices.write();
        state.catalog.entry(id.to_string()).or_insert_with(|| Vertex::new(id));
        Ok(())
    }

    /// Whether `id` is present in the vertex catalog. Empty ids and unknown ids
    /// both yield `false`; this never errors.
    pub fn has_vertex(&self, id: &str) -> bool {
        if id.is_empty() {
            return false;
        }
        self.vertices.read().catalog.contains_key(id)
    }

    /// Remove `id` and every edge incident to it (directed or undirected).
    pub fn remove_vertex(&self, id: &str) -> GraphResult<()> {
        if id.is_empty() {
            return Err(GraphError::EmptyVertexId);
        }
        let mut vertex_state = self.vertices.write();
        if !vertex_state.catalog.contains_key(id) {
            return Err(GraphError::VertexNotFound);
        }
        let mut edge_state = self.edges.write();
        let incident: Vec<String> = edge_state
            .catalog
            .values()
            .filter(|edge| edge.from() == id || edge.to() == id)
            .map(|edge| edge.id().to_string())
            .collect();
        for edge_id in incident {
            edge_state.remove_edge(&edge_id);
        }
        vertex_state.catalog.remove(id);
        Ok(())
    }

    /// All vertex ids, freshly allocated and sorted lexicographically ascending.
    pub fn vertices(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.vertices.read().catalog.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Number of vertices currently in the catalog.
    pub fn vertex_count(&self) -> usize {
        self.vertices.read().catalog.len()
    }

    /// A shallow copy of the id-to-`Vertex` map, safe to retain independently of
    /// subsequent graph mutations.
    pub fn vertices_map(&self) -> HashMap<String, Vertex> {
        self.vertices.read().catalog.clone()
    }

    /// In/out/undirected degree of `id`. Directed edges contribute to `in_degree`
    /// and `out_degree` separately (a directed self-loop contributes to both);
    /// undirected edges contribute to `undirected` (an undirected self-loop
    /// contributes 2, by the classic graph-theory convention).
    pub fn degree(&self, id: &str) -> GraphResult<Degree> {
        if id.is_empty() {
            return Err(GraphError::EmptyVertexId);
        }
        if !self.has_vertex(id) {
            return Err(GraphError::VertexNotFound);
        }
        let mut degree = Degree::default();
        for edge in self.edges.read().catalog.values() {
            if edge.directed() {
                if edge.from() == id {
                    degree.out_degree += 1;
                }
                if edge.to() == id {
                    degree.in_degree += 1;
                }
            } else if edge.is_loop() {
                if edge.from() == id {
                    degree.undirected += 2;
                }
            } else if edge.from() == id || edge.to() == id {
                degree.undirected += 1;
            }
        }
        Ok(degree)
    }
}

/// In/out/undirected degree triple returned by [`Graph::degree`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Degree {
    pub in_degree: usize,
    pub out_degree: usize,
    pub undirected: usize,
}
