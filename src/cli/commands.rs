//! CLI command implementations.

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{Adjacency, GraphError, GraphResult, NodeId};

/// The nine-node sample graph used when no `--graph` is given.
pub const DEMO_GRAPH: &str = "0:4,6,8;1:2,5,8;2:1,3;3:2,7;4:0,5;5:1,4;6:0,7;7:3,6;8:0,1";

/// One adjacency entry as emitted in JSON output.
#[derive(Debug, Serialize)]
struct NodeEntry<'a> {
    id: NodeId,
    neighbors: &'a [NodeId],
}

/// Parse adjacency text of the form `id:n,n,...;id:...`.
///
/// An isolated node is written `id:`. Whitespace around tokens is ignored,
/// as are empty `;` segments. Declaring the same node twice is an error.
pub fn parse_adjacency(text: &str) -> GraphResult<Adjacency> {
    let mut nodes = Adjacency::new();

    for segment in text.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let (id, neighbors) = segment
            .split_once(':')
            .ok_or_else(|| GraphError::Parse(format!("missing ':' in {:?}", segment)))?;
        let id = parse_id(id)?;
        let neighbors = parse_id_list(neighbors)?;
        if nodes.insert(id, neighbors).is_some() {
            return Err(GraphError::Parse(format!("node {} declared twice", id)));
        }
    }

    Ok(nodes)
}

/// Parse a comma-separated list of node IDs. An empty string is an empty list.
pub fn parse_id_list(text: &str) -> GraphResult<Vec<NodeId>> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_id)
        .collect()
}

fn parse_id(text: &str) -> GraphResult<NodeId> {
    text.trim()
        .parse()
        .map_err(|_| GraphError::Parse(format!("invalid node ID {:?}", text.trim())))
}

/// Parse and validate a graph description.
pub fn load_graph(text: &str) -> GraphResult<Graph> {
    Graph::from_adjacency(parse_adjacency(text)?)
}

/// Render a graph back into the `id:n,n;...` form accepted by [`parse_adjacency`].
pub fn render_adjacency(graph: &Graph) -> String {
    graph
        .adjacency()
        .iter()
        .map(|(id, neighbors)| format!("{}:{}", id, join_ids(neighbors, ",")))
        .collect::<Vec<_>>()
        .join(";")
}

fn join_ids(ids: &[NodeId], separator: &str) -> String {
    ids.iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

fn print_graph(graph: &Graph, json: bool) {
    if json {
        let entries: Vec<NodeEntry<'_>> = graph
            .adjacency()
            .iter()
            .map(|(&id, neighbors)| NodeEntry {
                id,
                neighbors: neighbors.as_slice(),
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).unwrap_or_default()
        );
    } else {
        for (id, neighbors) in graph.adjacency() {
            println!("  {}: [{}]", id, join_ids(neighbors, ", "));
        }
    }
}

/// Display summary information about a graph.
pub fn cmd_info(graph: &Graph, json: bool) -> GraphResult<()> {
    let has_cycle = graph.cycle_exists();
    if json {
        let info = serde_json::json!({
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "cycle": has_cycle,
            "adjacency": render_adjacency(graph),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        println!("Cycle: {}", if has_cycle { "yes" } else { "no" });
        println!("Adjacency:");
        print_graph(graph, false);
    }
    Ok(())
}

/// Show the neighbors of one node.
pub fn cmd_neighbors(graph: &Graph, id: NodeId, json: bool) -> GraphResult<()> {
    let neighbors = graph.neighbors(id).ok_or(GraphError::NodeNotFound(id))?;
    if json {
        println!("{}", serde_json::json!({"id": id, "neighbors": neighbors}));
    } else {
        println!("Node {}: [{}]", id, join_ids(neighbors, ", "));
    }
    Ok(())
}

/// Print a shortest path between two nodes.
pub fn cmd_path(graph: &Graph, a: NodeId, b: NodeId, json: bool) -> GraphResult<()> {
    let path = graph.find_shortest_path(a, b)?;
    if json {
        println!(
            "{}",
            serde_json::json!({"from": a, "to": b, "hops": path.len() - 1, "path": path})
        );
    } else {
        println!("{} ({} hops)", join_ids(&path, " -> "), path.len() - 1);
    }
    Ok(())
}

/// Report whether two nodes are connected.
pub fn cmd_reachable(graph: &Graph, a: NodeId, b: NodeId, json: bool) -> GraphResult<()> {
    let reachable = graph.path_exists(a, b);
    if json {
        println!(
            "{}",
            serde_json::json!({"from": a, "to": b, "reachable": reachable})
        );
    } else if reachable {
        println!("Node {} can reach node {}", a, b);
    } else {
        println!("Node {} cannot reach node {}", a, b);
    }
    Ok(())
}

/// Report whether the graph contains a cycle.
pub fn cmd_cycle(graph: &Graph, json: bool) -> GraphResult<()> {
    let has_cycle = graph.cycle_exists();
    if json {
        println!("{}", serde_json::json!({"cycle": has_cycle}));
    } else if has_cycle {
        println!("Graph contains a cycle");
    } else {
        println!("Graph is acyclic");
    }
    Ok(())
}

/// Add a node, then print the resulting graph.
pub fn cmd_add_node(
    graph: &mut Graph,
    id: NodeId,
    connections: Vec<NodeId>,
    json: bool,
) -> GraphResult<()> {
    graph.add_node(id, connections)?;
    if !json {
        println!("Added node {}", id);
    }
    print_graph(graph, json);
    Ok(())
}

/// Remove a node, then print the resulting graph.
pub fn cmd_remove_node(graph: &mut Graph, id: NodeId, json: bool) -> GraphResult<()> {
    graph.remove_node(id)?;
    if !json {
        println!("Removed node {}", id);
    }
    print_graph(graph, json);
    Ok(())
}

/// Add an edge, then print the resulting graph.
pub fn cmd_add_edge(graph: &mut Graph, a: NodeId, b: NodeId, json: bool) -> GraphResult<()> {
    graph.add_edge(a, b)?;
    if !json {
        println!("Linked {} -- {}", a, b);
    }
    print_graph(graph, json);
    Ok(())
}

/// Remove an edge, then print the resulting graph.
pub fn cmd_remove_edge(graph: &mut Graph, a: NodeId, b: NodeId, json: bool) -> GraphResult<()> {
    graph.remove_edge(a, b)?;
    if !json {
        println!("Unlinked {} -- {}", a, b);
    }
    print_graph(graph, json);
    Ok(())
}
