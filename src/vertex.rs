//! # Vertex module
//!
//! ## Description
//! A [`Vertex`] is a non-empty string identifier plus an opaque [`Metadata`]
//! handle. The core never interprets metadata contents; it only stores the
//! handle and hands out clones of it.
use crate::attributes::Metadata;

/// # Vertex record
///
/// ## Description
/// Returned from query operations such as [`Graph::vertices_map`][crate::Graph::vertices_map].
/// Logically read-only: callers must not mutate a returned record and expect the
/// change to be reflected in the graph.
#[derive(Clone, Debug)]
pub struct Vertex {
    id: String,
    metadata: Metadata,
}

impl Vertex {
    /// Construct a vertex with empty metadata, as `add_vertex` does.
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), metadata: Metadata::new() }
    }

    /// The vertex's stable string identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The vertex's opaque, caller-owned metadata handle.
    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vertex_has_empty_metadata() {
        let vertex = Vertex::new("A");
        assert_eq!(vertex.id(), "A");
        assert!(vertex.metadata().is_empty());
    }
}
