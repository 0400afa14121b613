//! CLI entry point for the `ugraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use ugraph::cli::commands::{self, DEMO_GRAPH};
use ugraph::types::NodeId;
use ugraph::GraphError;

#[derive(Parser)]
#[command(
    name = "ugraph",
    about = "ugraph CLI — query and edit an in-memory undirected graph"
)]
struct Cli {
    /// Adjacency as `id:n,n,...;id:...` (an isolated node is `id:`)
    #[arg(long, default_value = DEMO_GRAPH)]
    graph: String,

    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the graph
    Info,
    /// Show the neighbors of a node
    Neighbors {
        /// Node ID
        id: NodeId,
    },
    /// Find a shortest path between two nodes
    Path {
        /// Start node ID
        a: NodeId,
        /// End node ID
        b: NodeId,
    },
    /// Check whether two nodes are connected
    Reachable {
        /// Start node ID
        a: NodeId,
        /// End node ID
        b: NodeId,
    },
    /// Check whether the graph contains a cycle
    Cycle,
    /// Add a node and print the resulting graph
    AddNode {
        /// New node ID
        id: NodeId,
        /// Comma-separated IDs of nodes to connect to
        #[arg(long, default_value = "")]
        connect: String,
    },
    /// Remove a node and print the resulting graph
    RemoveNode {
        /// Node ID
        id: NodeId,
    },
    /// Add an edge and print the resulting graph
    AddEdge {
        /// First endpoint
        a: NodeId,
        /// Second endpoint
        b: NodeId,
    },
    /// Remove an edge and print the resulting graph
    RemoveEdge {
        /// First endpoint
        a: NodeId,
        /// Second endpoint
        b: NodeId,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(cli.command, &cli.graph, json) {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Parse(_) | GraphError::InvalidAdjacency { .. } => 2,
            GraphError::NoPath { .. } => 5,
            _ => 4,
        };
        process::exit(code);
    }
}

fn run(command: Commands, graph_text: &str, json: bool) -> ugraph::GraphResult<()> {
    let mut graph = commands::load_graph(graph_text)?;
    log::debug!(
        "loaded graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    match command {
        Commands::Info => commands::cmd_info(&graph, json),
        Commands::Neighbors { id } => commands::cmd_neighbors(&graph, id, json),
        Commands::Path { a, b } => commands::cmd_path(&graph, a, b, json),
        Commands::Reachable { a, b } => commands::cmd_reachable(&graph, a, b, json),
        Commands::Cycle => commands::cmd_cycle(&graph, json),
        Commands::AddNode { id, connect } => {
            let connections = commands::parse_id_list(&connect)?;
            commands::cmd_add_node(&mut graph, id, connections, json)
        }
        Commands::RemoveNode { id } => commands::cmd_remove_node(&mut graph, id, json),
        Commands::AddEdge { a, b } => commands::cmd_add_edge(&mut graph, a, b, json),
        Commands::RemoveEdge { a, b } => commands::cmd_remove_edge(&mut graph, a, b, json),
    }
}
