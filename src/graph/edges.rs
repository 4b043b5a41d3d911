//! # Edge lifecycle and query operations
//!
//! ## Description
//! `impl Graph` block covering the admission-gated `add_edge`, the rest of
//! the edge mutation surface (`remove_edge`, `set_edge_id`, `filter_edges`), and
//! the edge-catalog query surface (`has_edge`, `get_edge`, `edges`,
//! `edge_count`, `has_directed_edges`, `get_named_edges`, `validate_edge_id`).
use itertools::Itertools;

use crate::edge::{Edge, EdgeOption};
use crate::errors::{GraphError, GraphResult};
use crate::identity::parse_canonical;

use super::Graph;

impl Graph {
    /// Add an edge from `from` to `to` carrying `weight`, applying `options` in
    /// call order. Admission is gated in order: endpoint validity, weight
    /// policy, loop policy, endpoint materialization, multi-edge policy,
    /// baseline construction, then sequential option application. The first
    /// failing check aborts with no catalog mutation.
    pub fn add_edge(&self, from: &str, to: &str, weight: f64, options: &[EdgeOption]) -> GraphResult<String> {
        if from.is_empty() || to.is_empty() {
            return Err(GraphError::EmptyVertexId);
        }
        let flags = self.config();
        if !flags.weighted() && weight != 0.0 {
            return Err(GraphError::BadWeight);
        }
        if from == to && !flags.loops_allowed() {
            return Err(GraphError::LoopNotAllowed);
        }

        self.add_vertex(from)?;
        self.add_vertex(to)?;

        let mut edge_state = self.edges.write();
        if !flags.multi_edges_allowed()
            && edge_state
                .adjacency
                .get(from)
                .and_then(|by_dest| by_dest.get(to))
                .is_some_and(|ids| !ids.is_empty())
        {
            return Err(GraphError::MultiEdgeNotAllowed);
        }

        let mut edge = Edge::new(String::new(), from, to, weight, flags.directed_default());
        let mut assigned_id: Option<String> = None;
        for option in options {
            match option {
                EdgeOption::OverrideDirectedness(directed) => {
                    if !flags.mixed_mode() {
                        return Err(GraphError::MixedEdgesNotAllowed);
                    }
                    edge.set_directed(*directed);
                }
                EdgeOption::AssignId(id) => {
                    if id.is_empty() {
                        return Err(GraphError::EmptyEdgeId);
                    }
                    if edge_state.catalog.contains_key(id) {
                        return Err(GraphError::EdgeIdConflict);
                    }
                    assigned_id = Some(id.clone());
                }
            }
        }

        // Defensive re-check: no option above can change from/to, but a future
        // option must not be able to smuggle a loop past the policy gate.
        if edge.from() == edge.to() && !flags.loops_allowed() {
            return Err(GraphError::LoopNotAllowed);
        }

        let final_id = match assigned_id {
            Some(id) => {
                self.next_id.observe(&id);
                id
            }
            None => self.next_id.next_canonical(),
        };
        edge.set_id(&final_id);
        edge_state.insert_edge(edge);
        Ok(final_id)
    }

    /// Remove the edge with id `id` from the catalog and prune its adjacency
    /// mirrors.
    pub fn remove_edge(&self, id: &str) -> GraphResult<()> {
        let mut edge_state = self.edges.write();
        match edge_state.remove_edge(id) {
            Some(_) => Ok(()),
            None => Err(GraphError::EdgeNotFound),
        }
    }

    /// Atomically rename edge `old` to `new`, rewriting adjacency to match and
    /// advancing the identity counter if `new` is itself in canonical form.
    pub fn set_edge_id(&self, old: &str, new: &str) -> GraphResult<()> {
        if old.is_empty() || new.is_empty() {
            return Err(GraphError::EmptyEdgeId);
        }
        if old == new {
            return Ok(());
        }
        let mut edge_state = self.edges.write();
        if !edge_state.catalog.contains_key(old) {
            return Err(GraphError::EdgeNotFound);
        }
        if edge_state.catalog.contains_key(new) {
            return Err(GraphError::EdgeIdConflict);
        }
        edge_state.rename_edge(old, new);
        self.next_id.observe(new);
        Ok(())
    }

    /// Membership test over the adjacency index. Unknown ids and empty strings
    /// both yield `false`; never errors.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        if from.is_empty() || to.is_empty() {
            return false;
        }
        self.edges
            .read()
            .adjacency
            .get(from)
            .and_then(|by_dest| by_dest.get(to))
            .is_some_and(|ids| !ids.is_empty())
    }

    /// Fetch the catalog entry for `id`.
    pub fn get_edge(&self, id: &str) -> GraphResult<Edge> {
        self.edges.read().catalog.get(id).cloned().ok_or(GraphError::EdgeNotFound)
    }

    /// All edges, freshly allocated and sorted by id ascending.
    pub fn edges(&self) -> Vec<Edge> {
        self.edges.read().catalog.values().cloned().sorted_by(|a, b| a.id().cmp(b.id())).collect()
    }

    /// Number of edges currently in the catalog.
    pub fn edge_count(&self) -> usize {
        self.edges.read().catalog.len()
    }

    /// Whether at least one edge in the catalog is directed.
    pub fn has_directed_edges(&self) -> bool {
        self.edges.read().catalog.values().any(Edge::directed)
    }

    /// Remove every edge for which `predicate` returns `false`. `predicate` must
    /// be pure and must not mutate the graph. Returns the number of edges
    /// removed. Adjacency buckets are pruned as part of each removal.
    pub fn filter_edges(&self, predicate: impl Fn(&Edge) -> bool) -> usize {
        let mut edge_state = self.edges.write();
        let doomed: Vec<String> = edge_state
            .catalog
            .values()
            .filter(|edge| !predicate(edge))
            .map(|edge| edge.id().to_string())
            .collect();
        for id in &doomed {
            edge_state.remove_edge(id);
        }
        doomed.len()
    }

    /// All edges whose id is not in canonical auto-generated form, sorted by id
    /// ascending.
    pub fn get_named_edges(&self) -> Vec<Edge> {
        self.edges
            .read()
            .catalog
            .values()
            .filter(|edge| parse_canonical(edge.id()).is_none())
            .cloned()
            .sorted_by(|a, b| a.id().cmp(b.id()))
            .collect()
    }

    /// Validate a candidate explicit edge id without mutating anything: empty
    /// ids and ids already present in the catalog are rejected.
    pub fn validate_edge_id(&self, id: &str) -> GraphResult<()> {
        if id.is_empty() {
            return Err(GraphError::EmptyEdgeId);
        }
        if self.edges.read().catalog.contains_key(id) {
            return Err(GraphError::EdgeIdConflict);
        }
        Ok(())
    }
}
