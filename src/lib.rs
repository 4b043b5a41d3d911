//! <h2 id="latticegraph" style="text-align: center; font-variant: small-caps"><a href="#latticegraph">latticegraph</a></h2>
//!
//! <div style="text-align: center"><b><i>An in-memory, deterministic, thread-safe labeled graph</i></b></div>
//!
//! ## Welcome!
//! `latticegraph` is a reusable substrate for graph algorithms: shortest paths,
//! traversal, flow, matrix conversion, and the like. It provides a single
//! composable [`Graph`] type over string-identified vertices and identified
//! edges, directed, undirected, or mixed, optionally weighted, optionally
//! multi-edge, optionally loop-admitting.
//!
//! ## What this crate guarantees
//! * **Deterministic enumeration** — [`Graph::vertices`], [`Graph::edges`],
//! [`Graph::neighbors`], [`Graph::neighbor_ids`], and [`Graph::get_named_edges`]
//! always return freshly allocated, sorted containers.
//! * **Sentinel errors** — every fallible operation returns one of the closed
//! set of [`GraphError`] variants, matched by identity rather than message.
//! * **Safe concurrent access** — two independent readers-writer locks guard
//! the vertex catalog and the edge/adjacency index respectively; see the
//! [`Graph`] documentation for the lock-ordering discipline.
//! * **Stable edge identities** — ids survive [`Clone`], [`Graph::clone_empty`],
//! [`Graph::unweighted_view`], and [`Graph::induced_subgraph`].
//!
//! ## Out of scope
//! Shortest-path algorithms, breadth-first traversal, adjacency-matrix
//! interchange, and example CLIs are external collaborators built on top of
//! this crate's query API; they are not part of it. Persistence, serialization,
//! distributed replication, dynamic graph-rewriting protocols, and metadata
//! schema validation are likewise out of scope — metadata is opaque caller
//! payload this crate never interprets.

pub mod attributes;
pub mod config;
pub mod edge;
pub mod errors;
pub mod graph;
pub mod identity;
pub mod vertex;

pub use config::{GraphFlags, GraphOption};
pub use edge::{Edge, EdgeOption};
pub use errors::{GraphError, GraphResult};
pub use graph::{stats::GraphStats, Degree, Graph};
pub use vertex::Vertex;
