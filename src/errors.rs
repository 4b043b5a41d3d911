//! # Error module
//!
//! ## Description
//! This module contains [`GraphError`], the closed set of sentinel errors every
//! fallible operation on [`Graph`][crate::Graph] returns. Variants carry no payload
//! so callers match them by identity (`matches!(err, GraphError::EdgeNotFound)`),
//! not by formatted message.
use thiserror::Error;

// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * LIBRARY-SPECIFIC INSTANCE OF RESULT                                               *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *

pub type GraphResult<OkType> = Result<OkType, GraphError>;

// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * ERRORS                                                                            *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *

/// # Sentinel errors
///
/// ## Description
/// All fallible operations on [`Graph`][crate::Graph] return one of these variants
/// on failure. None of them wrap an inner cause: admission checks either pass or
/// they don't, and the reason is always one of the nine cases below.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex identifier was the empty string.
    #[error("vertex id must not be empty")]
    EmptyVertexId,
    /// The referenced vertex is absent from the vertex catalog.
    #[error("vertex not found")]
    VertexNotFound,
    /// The referenced edge id is absent from the edge catalog.
    #[error("edge not found")]
    EdgeNotFound,
    /// An explicit edge id was the empty string.
    #[error("edge id must not be empty")]
    EmptyEdgeId,
    /// An explicit edge id collides with an id already present in the edge catalog.
    #[error("edge id already exists")]
    EdgeIdConflict,
    /// A non-zero weight was supplied to a graph constructed without `EnableWeighted`.
    #[error("non-zero weight requires a weighted graph")]
    BadWeight,
    /// A self-loop was attempted on a graph constructed without `EnableLoops`.
    #[error("self-loops require loops to be enabled")]
    LoopNotAllowed,
    /// A parallel edge was attempted on a graph constructed without `EnableMultiEdges`.
    #[error("parallel edges require multi-edges to be enabled")]
    MultiEdgeNotAllowed,
    /// A per-edge directedness override was attempted on a graph constructed
    /// without `EnableMixedMode`.
    #[error("per-edge directedness overrides require mixed mode")]
    MixedEdgesNotAllowed,
}
