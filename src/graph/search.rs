//! Shortest-path search (BFS), reachability, and cycle detection.

use std::collections::HashSet;

use log::{debug, trace};

use crate::types::{GraphError, GraphResult, NodeId};

use super::Graph;

/// One record of the BFS frontier.
///
/// Records live in a single arena and point at the record that discovered
/// them by index, so growing the arena never invalidates a parent link.
#[derive(Debug, Clone, Copy)]
struct LookupNode {
    id: NodeId,
    parent: Option<usize>,
}

impl Graph {
    /// Find one shortest path from `a` to `b`, both ends included.
    ///
    /// The walk never steps straight back along the edge it arrived on and
    /// never re-enters `a` except as the target. When several shortest paths
    /// exist, which one is returned depends on neighbor-list order and is
    /// otherwise unspecified.
    ///
    /// With `a == b` this returns the shortest closed walk from `a` back to
    /// itself, which exists only if a cycle is reachable from `a`.
    ///
    /// Errors: [`GraphError::EndNodeMissing`] if `b` is not in the graph,
    /// [`GraphError::NodeMissingDuringTraversal`] if `a` is not,
    /// [`GraphError::NoPath`] if the frontier runs dry.
    pub fn find_shortest_path(&self, a: NodeId, b: NodeId) -> GraphResult<Vec<NodeId>> {
        if !self.contains_node(b) {
            return Err(GraphError::EndNodeMissing(b));
        }

        let mut frontier = vec![LookupNode { id: a, parent: None }];
        // (parent id, id) steps already enqueued; bounds the frontier by 2E + 1.
        let mut enqueued: HashSet<(NodeId, NodeId)> = HashSet::new();
        let mut cursor = 0;

        while let Some(&current) = frontier.get(cursor) {
            let neighbors = self
                .neighbors(current.id)
                .ok_or(GraphError::NodeMissingDuringTraversal(current.id))?;
            let came_from = current.parent.map(|index| frontier[index].id);
            trace!("expanding node {} (from {:?})", current.id, came_from);

            for &neighbor in neighbors {
                if Some(neighbor) == came_from || neighbor == current.id {
                    continue;
                }

                if neighbor == b {
                    let path = backtrack(&frontier, cursor, b);
                    debug!("path {} -> {} found: {:?}", a, b, path);
                    return Ok(path);
                }

                if neighbor == a {
                    continue;
                }

                if enqueued.insert((current.id, neighbor)) {
                    frontier.push(LookupNode {
                        id: neighbor,
                        parent: Some(cursor),
                    });
                }
            }

            cursor += 1;
        }

        debug!(
            "no path {} -> {} after {} frontier records",
            a,
            b,
            frontier.len()
        );
        Err(GraphError::NoPath { from: a, to: b })
    }

    /// Whether a path from `a` to `b` exists.
    ///
    /// Any error, including a missing node, reads as `false`.
    pub fn path_exists(&self, a: NodeId, b: NodeId) -> bool {
        self.find_shortest_path(a, b)
            .map(|path| !path.is_empty())
            .unwrap_or(false)
    }

    /// Whether the graph contains a cycle.
    ///
    /// Self-loops and repeated edges between the same pair do not count.
    pub fn cycle_exists(&self) -> bool {
        self.node_ids().any(|node| self.path_exists(node, node))
    }
}

/// Walk parent links from `tip` to the root, then return the path root-first,
/// ending at `target`.
fn backtrack(frontier: &[LookupNode], tip: usize, target: NodeId) -> Vec<NodeId> {
    let mut path = vec![target];
    let mut index = Some(tip);
    while let Some(i) = index {
        path.push(frontier[i].id);
        index = frontier[i].parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backtrack_orders_root_first() {
        let frontier = [
            LookupNode { id: 0, parent: None },
            LookupNode { id: 6, parent: Some(0) },
            LookupNode { id: 4, parent: Some(0) },
            LookupNode { id: 7, parent: Some(1) },
        ];
        assert_eq!(backtrack(&frontier, 3, 3), vec![0, 6, 7, 3]);
    }

    #[test]
    fn test_backtrack_from_root() {
        let frontier = [LookupNode { id: 5, parent: None }];
        assert_eq!(backtrack(&frontier, 0, 9), vec![5, 9]);
    }
}
