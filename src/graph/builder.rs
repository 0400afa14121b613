//! Fluent API for building Graph instances.

use crate::types::{Adjacency, GraphResult, NodeId};

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Edges are recorded in declaration order, which fixes the order of every
/// neighbor list and therefore the tie-break between equal-length paths.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Adjacency,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node. Declaring it again is a no-op.
    pub fn node(&mut self, id: NodeId) -> &mut Self {
        self.nodes.entry(id).or_default();
        self
    }

    /// Declare an undirected edge, declaring both endpoints if needed.
    pub fn edge(&mut self, a: NodeId, b: NodeId) -> &mut Self {
        self.nodes.entry(a).or_default().push(b);
        self.nodes.entry(b).or_default().push(a);
        self
    }

    /// Declare a chain of edges: `ids[0] -- ids[1] -- ... -- ids[n-1]`.
    pub fn path(&mut self, ids: &[NodeId]) -> &mut Self {
        if let [single] = ids {
            self.node(*single);
        }
        for pair in ids.windows(2) {
            self.edge(pair[0], pair[1]);
        }
        self
    }

    /// Build the final Graph.
    pub fn build(&self) -> GraphResult<Graph> {
        Graph::from_adjacency(self.nodes.clone())
    }
}
