//! Basic build -> mutate -> query flow.

use ugraph::*;

fn main() -> GraphResult<()> {
    // Two rings sharing nodes 0, 1 and 8
    let mut builder = GraphBuilder::new();
    builder
        .path(&[0, 4, 5, 1])
        .path(&[0, 6, 7, 3, 2, 1])
        .path(&[0, 8, 1]);
    let mut graph = builder.build()?;

    println!(
        "Graph created with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let path = graph.find_shortest_path(0, 3)?;
    println!("Shortest path 0 -> 3: {:?}", path);
    println!("Cycle present: {}", graph.cycle_exists());

    // Attach a new node and cut the graph apart
    graph.add_node(9, vec![1, 5])?;
    graph.remove_node(0)?;
    graph.remove_edge(1, 2)?;
    println!("Path 9 -> 3 exists: {}", graph.path_exists(9, 3));

    match graph.find_shortest_path(4, 6) {
        Ok(path) => println!("Path 4 -> 6: {:?}", path),
        Err(e) => println!("Path 4 -> 6: {}", e),
    }

    Ok(())
}
