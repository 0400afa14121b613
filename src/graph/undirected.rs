//! Core graph structure — undirected adjacency lists with a mutual-adjacency invariant.

use log::debug;

use crate::types::{Adjacency, GraphError, GraphResult, NodeId};

/// An undirected, unweighted graph keyed by integer node IDs.
///
/// Every edge is stored twice, once in each endpoint's neighbor list. All
/// mutations keep that relation symmetric, and construction rejects input
/// where it is not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// Node ID -> neighbor IDs, in insertion order.
    nodes: Adjacency,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph from a caller-supplied adjacency mapping.
    ///
    /// Fails with [`GraphError::InvalidAdjacency`] if some node lists a
    /// neighbor whose own list does not contain it back. Self-loops and
    /// duplicate entries are accepted as-is.
    pub fn from_adjacency(nodes: Adjacency) -> GraphResult<Self> {
        if let Some((node, neighbor)) = first_asymmetry(&nodes) {
            return Err(GraphError::InvalidAdjacency { node, neighbor });
        }
        debug!("built graph with {} nodes", nodes.len());
        Ok(Self { nodes })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges, counting multi-edges separately.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Whether a node with this ID exists.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Neighbor list of a node, or `None` if it does not exist.
    pub fn neighbors(&self, id: NodeId) -> Option<&[NodeId]> {
        self.nodes.get(&id).map(Vec::as_slice)
    }

    /// All node IDs in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// The full adjacency mapping.
    pub fn adjacency(&self) -> &Adjacency {
        &self.nodes
    }

    /// Consume the graph, returning its adjacency mapping.
    pub fn into_adjacency(self) -> Adjacency {
        self.nodes
    }

    /// Whether every recorded neighbor relation is symmetric.
    pub fn is_consistent(&self) -> bool {
        first_asymmetry(&self.nodes).is_none()
    }

    /// Add a node connected to each of `connections`.
    ///
    /// Nothing is changed if the node already exists or any connection
    /// target is missing.
    pub fn add_node(&mut self, id: NodeId, connections: Vec<NodeId>) -> GraphResult<()> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::AlreadyExists(id));
        }
        if let Some(&missing) = connections.iter().find(|&&c| !self.nodes.contains_key(&c)) {
            return Err(GraphError::ConnectionTargetMissing(missing));
        }

        for connection in &connections {
            if let Some(list) = self.nodes.get_mut(connection) {
                list.push(id);
            }
        }
        debug!("added node {} with connections {:?}", id, connections);
        self.nodes.insert(id, connections);

        Ok(())
    }

    /// Remove a node and every edge touching it.
    ///
    /// Returns [`GraphError::NodeNotFound`] when there was nothing to remove.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<()> {
        if self.nodes.remove(&id).is_none() {
            return Err(GraphError::NodeNotFound(id));
        }

        for list in self.nodes.values_mut() {
            list.retain(|&neighbor| neighbor != id);
        }
        debug!("removed node {}", id);

        Ok(())
    }

    /// Add an undirected edge between `a` and `b`.
    ///
    /// Existing edges are not checked, so repeating the call creates a
    /// multi-edge.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> GraphResult<()> {
        self.require_endpoints(a, b)?;

        if let Some(list) = self.nodes.get_mut(&a) {
            list.push(b);
        }
        if let Some(list) = self.nodes.get_mut(&b) {
            list.push(a);
        }
        debug!("added edge {} -- {}", a, b);

        Ok(())
    }

    /// Remove every edge between `a` and `b`.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> GraphResult<()> {
        self.require_endpoints(a, b)?;

        let forward = self.nodes.get(&a).is_some_and(|list| list.contains(&b));
        let backward = self.nodes.get(&b).is_some_and(|list| list.contains(&a));
        if !forward || !backward {
            return Err(GraphError::EdgeMissing { a, b });
        }

        if let Some(list) = self.nodes.get_mut(&a) {
            list.retain(|&neighbor| neighbor != b);
        }
        if let Some(list) = self.nodes.get_mut(&b) {
            list.retain(|&neighbor| neighbor != a);
        }
        debug!("removed edge {} -- {}", a, b);

        Ok(())
    }

    fn require_endpoints(&self, a: NodeId, b: NodeId) -> GraphResult<()> {
        for id in [a, b] {
            if !self.nodes.contains_key(&id) {
                return Err(GraphError::EndpointMissing(id));
            }
        }
        Ok(())
    }
}

/// First `(node, neighbor)` pair where `neighbor` does not list `node` back.
fn first_asymmetry(nodes: &Adjacency) -> Option<(NodeId, NodeId)> {
    nodes.iter().find_map(|(&node, neighbors)| {
        neighbors
            .iter()
            .find(|&&neighbor| {
                !nodes
                    .get(&neighbor)
                    .is_some_and(|back| back.contains(&node))
            })
            .map(|&neighbor| (node, neighbor))
    })
}
