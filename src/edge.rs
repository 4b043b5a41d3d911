//! # Edge module
//!
//! ## Description
//! An [`Edge`] is a non-empty string identifier plus source/destination vertex
//! ids, a numeric weight, and an effective directedness. [`EdgeOption`] is the
//! tagged-variant list of per-edge overrides [`Graph::add_edge`][crate::Graph::add_edge]
//! applies in call order.

/// # Edge record
///
/// ## Description
/// Returned from query operations such as [`Graph::get_edge`][crate::Graph::get_edge]
/// and [`Graph::edges`][crate::Graph::edges]. Logically read-only.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    id: String,
    from: String,
    to: String,
    weight: f64,
    directed: bool,
}

impl Edge {
    pub(crate) fn new(id: impl Into<String>, from: impl Into<String>, to: impl Into<String>, weight: f64, directed: bool) -> Self {
        Self { id: id.into(), from: from.into(), to: to.into(), weight, directed }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn from(&self) -> &str {
        &self.from
    }

    #[inline]
    pub fn to(&self) -> &str {
        &self.to
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[inline]
    pub fn directed(&self) -> bool {
        self.directed
    }

    #[inline]
    pub(crate) fn is_loop(&self) -> bool {
        self.from == self.to
    }

    pub(crate) fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub(crate) fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }
}

// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * EDGE OPTIONS                                                                      *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *

/// # Per-edge construction option
///
/// ## Description
/// Applied in call order by [`Graph::add_edge`][crate::Graph::add_edge] after the
/// baseline edge (endpoints, weight, graph-default directedness) is built. The
/// first option returning an error aborts the operation with no catalog mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeOption {
    /// Override the edge's directedness. Requires the graph to have been
    /// constructed with `EnableMixedMode`.
    OverrideDirectedness(bool),
    /// Assign a specific edge id instead of letting the identity counter pick
    /// one. Empty, or colliding with an existing id, is rejected.
    AssignId(String),
}
