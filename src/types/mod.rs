//! Shared data types for the ugraph library.

pub mod error;

pub use error::{GraphError, GraphResult};

/// Integer identifier of a node.
pub type NodeId = i64;

/// Adjacency mapping: node ID -> ordered neighbor IDs.
pub type Adjacency = std::collections::BTreeMap<NodeId, Vec<NodeId>>;
