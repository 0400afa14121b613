//! ugraph — in-memory undirected graph.
//!
//! Nodes are integer IDs with ordered neighbor lists. Every edge is recorded
//! in both endpoints' lists, and every mutation keeps that symmetric. On top
//! of the adjacency lists sit a breadth-first shortest-path search, a
//! reachability check, and cycle detection.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphBuilder};
pub use types::{Adjacency, GraphError, GraphResult, NodeId};
