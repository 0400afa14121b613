//! Error types for the ugraph library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the ugraph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Supplied adjacency is not mutual: `node` lists `neighbor`, but not vice versa.
    #[error("provided nodes are invalid, expected node {neighbor} to contain node {node}")]
    InvalidAdjacency { node: NodeId, neighbor: NodeId },

    /// Node being added is already present.
    #[error("node {0} already exists")]
    AlreadyExists(NodeId),

    /// A new node asked to connect to a node that is not in the graph.
    #[error("unable to connect new node to non-existent node {0}")]
    ConnectionTargetMissing(NodeId),

    /// Node being removed is not present.
    #[error("node {0} does not exist")]
    NodeNotFound(NodeId),

    /// One endpoint of an edge operation is not present.
    #[error("node {0} does not exist")]
    EndpointMissing(NodeId),

    /// No edge between the two nodes.
    #[error("connection between node {a} and node {b} does not exist")]
    EdgeMissing { a: NodeId, b: NodeId },

    /// Target of a path search is not present.
    #[error("end node {0} does not exist in the graph")]
    EndNodeMissing(NodeId),

    /// Both nodes exist but are not connected.
    #[error("a path between node {from} and node {to} does not exist")]
    NoPath { from: NodeId, to: NodeId },

    /// A node reached by the search has no adjacency entry.
    #[error("node {0} does not exist in the graph")]
    NodeMissingDuringTraversal(NodeId),

    /// Malformed adjacency text (CLI input).
    #[error("Invalid graph description: {0}")]
    Parse(String),
}

/// Convenience result type for ugraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
