//! Phase 3 tests: CLI adjacency parsing and command plumbing.

use ugraph::cli::commands::{
    self, load_graph, parse_adjacency, parse_id_list, render_adjacency, DEMO_GRAPH,
};
use ugraph::types::GraphError;

// ==================== Parsing ====================

#[test]
fn test_demo_graph_parses() {
    let graph = load_graph(DEMO_GRAPH).unwrap();
    assert_eq!(graph.node_count(), 9);
    assert_eq!(graph.edge_count(), 10);
    assert_eq!(graph.neighbors(1), Some(&[2, 5, 8][..]));
    assert_eq!(graph.find_shortest_path(0, 3).unwrap(), vec![0, 6, 7, 3]);
}

#[test]
fn test_parse_adjacency_whitespace_and_isolated_nodes() {
    let nodes = parse_adjacency(" 1 : 2 ; 2: 1 ;; 5: ;-3:").unwrap();
    assert_eq!(nodes.get(&1), Some(&vec![2]));
    assert_eq!(nodes.get(&2), Some(&vec![1]));
    assert_eq!(nodes.get(&5), Some(&vec![]));
    assert_eq!(nodes.get(&-3), Some(&vec![]));
    assert_eq!(nodes.len(), 4);
}

#[test]
fn test_parse_adjacency_empty_text_is_empty_graph() {
    assert!(parse_adjacency("").unwrap().is_empty());
    assert_eq!(load_graph("  ").unwrap().node_count(), 0);
}

#[test]
fn test_parse_adjacency_errors() {
    assert!(matches!(parse_adjacency("0-1"), Err(GraphError::Parse(_))));
    assert!(matches!(parse_adjacency("x:1"), Err(GraphError::Parse(_))));
    assert!(matches!(parse_adjacency("0:1,y"), Err(GraphError::Parse(_))));

    let err = parse_adjacency("0:1;1:0;0:").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid graph description: node 0 declared twice"
    );
}

#[test]
fn test_load_graph_validates_mutual_adjacency() {
    assert_eq!(
        load_graph("0:1;1:").unwrap_err(),
        GraphError::InvalidAdjacency {
            node: 0,
            neighbor: 1
        }
    );
}

#[test]
fn test_parse_id_list() {
    assert_eq!(parse_id_list("1, 5,9").unwrap(), vec![1, 5, 9]);
    assert!(parse_id_list("").unwrap().is_empty());
    assert!(parse_id_list("1,,2").is_ok());
    assert!(parse_id_list("1;2").is_err());
}

#[test]
fn test_render_adjacency_reads_back() {
    let mut graph = load_graph(DEMO_GRAPH).unwrap();
    graph.add_node(9, vec![1, 5]).unwrap();
    graph.add_node(10, vec![]).unwrap();

    let text = render_adjacency(&graph);
    assert!(text.starts_with("0:4,6,8;1:2,5,8,9;"));
    assert!(text.ends_with(";9:1,5;10:"));
    assert_eq!(load_graph(&text).unwrap(), graph);
}

// ==================== Commands ====================

#[test]
fn test_query_commands_succeed() {
    let graph = load_graph(DEMO_GRAPH).unwrap();
    for json in [false, true] {
        commands::cmd_info(&graph, json).unwrap();
        commands::cmd_neighbors(&graph, 0, json).unwrap();
        commands::cmd_path(&graph, 0, 3, json).unwrap();
        commands::cmd_reachable(&graph, 0, 3, json).unwrap();
        commands::cmd_cycle(&graph, json).unwrap();
    }
}

#[test]
fn test_query_commands_propagate_errors() {
    let graph = load_graph("0:1;1:0;2:").unwrap();
    assert_eq!(
        commands::cmd_path(&graph, 0, 2, false),
        Err(GraphError::NoPath { from: 0, to: 2 })
    );
    assert_eq!(
        commands::cmd_neighbors(&graph, 7, true),
        Err(GraphError::NodeNotFound(7))
    );
    // Unreachable is an answer, not an error
    assert!(commands::cmd_reachable(&graph, 0, 2, false).is_ok());
}

#[test]
fn test_mutation_commands_apply_changes() {
    let mut graph = load_graph(DEMO_GRAPH).unwrap();

    commands::cmd_add_node(&mut graph, 9, vec![1, 5], false).unwrap();
    assert_eq!(graph.neighbors(9), Some(&[1, 5][..]));

    commands::cmd_add_edge(&mut graph, 9, 0, true).unwrap();
    commands::cmd_remove_edge(&mut graph, 0, 6, false).unwrap();
    commands::cmd_remove_node(&mut graph, 5, true).unwrap();

    assert_eq!(graph.neighbors(9), Some(&[1, 0][..]));
    assert_eq!(graph.neighbors(0), Some(&[4, 8, 9][..]));
    assert!(graph.is_consistent());
}

#[test]
fn test_mutation_commands_propagate_errors() {
    let mut graph = load_graph(DEMO_GRAPH).unwrap();
    let before = graph.clone();

    assert_eq!(
        commands::cmd_remove_edge(&mut graph, 0, 2, false),
        Err(GraphError::EdgeMissing { a: 0, b: 2 })
    );
    assert_eq!(
        commands::cmd_add_node(&mut graph, 3, vec![], false),
        Err(GraphError::AlreadyExists(3))
    );
    assert_eq!(
        commands::cmd_add_edge(&mut graph, 0, 42, false),
        Err(GraphError::EndpointMissing(42))
    );
    assert_eq!(
        commands::cmd_remove_node(&mut graph, 42, false),
        Err(GraphError::NodeNotFound(42))
    );
    assert_eq!(graph, before);
}
