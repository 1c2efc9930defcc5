//! CLI entry point for the `sgraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use simple_graph::cli::commands;
use simple_graph::graph::TraversalOrder;
use simple_graph::types::DEFAULT_EDGE_LENGTH;
use simple_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "sgraph",
    about = "Build, traverse and measure undirected graphs",
    after_help = "GRAPH is family:args, joined with '*' for Cartesian products.\n\
                  Families: complete:N, bipartite:P,Q, cycle:N, empty:N, path:N, hypercube:N[,binary]\n\
                  Example: sgraph tree 'path:2*cycle:4' '(0,0)'"
)]
struct Cli {
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
    /// Print the adjacency listing of a graph
    Show {
        /// Graph spec
        graph: String,
    },
    /// List every edge once
    Edges {
        /// Graph spec
        graph: String,
    },
    /// List the edges incident to a vertex
    Incident {
        /// Graph spec
        graph: String,
        /// Vertex name, e.g. 3 or (0,1)
        vertex: String,
    },
    /// Breadth-first visit order
    Bfs {
        /// Graph spec
        graph: String,
        /// Starting vertex
        start: String,
    },
    /// Depth-first visit order
    Dfs {
        /// Graph spec
        graph: String,
        /// Starting vertex
        start: String,
    },
    /// Spanning forest of a traversal
    Tree {
        /// Graph spec
        graph: String,
        /// Starting vertex
        start: String,
        /// Traversal: bfs or dfs
        #[arg(long, default_value = "bfs")]
        kind: String,
    },
    /// All-pairs shortest distances (Floyd–Warshall)
    Distances {
        /// Graph spec
        graph: String,
        /// Length of a single edge
        #[arg(long, default_value_t = DEFAULT_EDGE_LENGTH)]
        length: f64,
    },
    /// Vertex, edge, component and degree counts
    Stats {
        /// Graph spec
        graph: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();

    let result = match cli.command {
        Commands::Show { graph } => commands::cmd_show(&graph, json),
        Commands::Edges { graph } => commands::cmd_edges(&graph, json),
        Commands::Incident { graph, vertex } => commands::cmd_incident(&graph, &vertex, json),
        Commands::Bfs { graph, start } => {
            commands::cmd_traverse(&graph, &start, TraversalOrder::Breadth, json)
        }
        Commands::Dfs { graph, start } => {
            commands::cmd_traverse(&graph, &start, TraversalOrder::Depth, json)
        }
        Commands::Tree { graph, start, kind } => {
            let order = match TraversalOrder::from_name(&kind) {
                Some(order) => order,
                None => {
                    eprintln!("Invalid traversal kind: {}", kind);
                    process::exit(3);
                }
            };
            commands::cmd_tree(&graph, &start, order, json)
        }
        Commands::Distances { graph, length } => commands::cmd_distances(&graph, length, json),
        Commands::Stats { graph } => commands::cmd_stats(&graph, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::InvalidGraphSpec(_) => 1,
            GraphError::MalformedName(_) | GraphError::InvalidEdgeLength(_) => 3,
            GraphError::VertexNotFound(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
