//! CLI command implementations.

use crate::graph::{Graph, GraphFamily, GraphGenerator, TraversalOrder};
use crate::types::{GraphError, GraphResult, Vertex};

/// Build a graph from a spec such as `cycle:4` or `path:2*cycle:3`.
///
/// `*` takes the Cartesian product, left to right.
pub fn parse_graph(spec: &str) -> GraphResult<Graph> {
    let mut factors = spec
        .split('*')
        .map(|part| GraphFamily::parse(part).map(GraphGenerator::build));
    let mut graph = factors
        .next()
        .ok_or_else(|| GraphError::InvalidGraphSpec(spec.to_string()))??;
    for factor in factors {
        graph = &graph * &factor?;
    }
    log::info!(
        "built {}: {} vertices, {} edges",
        spec,
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Find the vertex a command-line argument refers to.
///
/// The text is parsed as a vertex name first; relabelled vertices (such as
/// binary hypercube coordinates) are matched by their display form.
pub fn resolve_vertex(graph: &Graph, text: &str) -> GraphResult<Vertex> {
    let parsed = Vertex::parse(text)?;
    if graph.contains_vertex(&parsed) {
        return Ok(parsed);
    }
    graph
        .adjacency()
        .keys()
        .find(|v| v.to_string() == text)
        .cloned()
        .ok_or_else(|| GraphError::VertexNotFound(text.to_string()))
}

/// Print the adjacency listing.
pub fn cmd_show(spec: &str, json: bool) -> GraphResult<()> {
    let graph = parse_graph(spec)?;
    if json {
        let out = serde_json::json!({
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "adjacency": graph.name_map(),
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!("Graph: {}", spec);
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        for (vertex, neighbors) in graph.name_map() {
            println!("  {}: [{}]", vertex, neighbors.join(", "));
        }
    }
    Ok(())
}

/// Print every edge once.
pub fn cmd_edges(spec: &str, json: bool) -> GraphResult<()> {
    let graph = parse_graph(spec)?;
    let edges = graph.edges();
    if json {
        println!("{}", serde_json::to_string(&edges).unwrap_or_default());
    } else {
        for edge in &edges {
            println!("{}", edge);
        }
        println!("{} edges", edges.len());
    }
    Ok(())
}

/// Print the edges incident to a vertex.
pub fn cmd_incident(spec: &str, vertex: &str, json: bool) -> GraphResult<()> {
    let graph = parse_graph(spec)?;
    let v = resolve_vertex(&graph, vertex)?;
    let edges = graph.incident_edges(&v)?;
    if json {
        println!(
            "{}",
            serde_json::json!({"vertex": v, "degree": edges.len(), "edges": edges})
        );
    } else {
        println!("Vertex {} (degree {})", v, edges.len());
        for edge in &edges {
            println!("  {}", edge);
        }
    }
    Ok(())
}

/// Print the order in which a traversal visits the vertices.
pub fn cmd_traverse(
    spec: &str,
    start: &str,
    order: TraversalOrder,
    json: bool,
) -> GraphResult<()> {
    let graph = parse_graph(spec)?;
    let start = resolve_vertex(&graph, start)?;
    let mut visited = Vec::with_capacity(graph.vertex_count());
    match order {
        TraversalOrder::Breadth => graph.bfs(&start, |v| visited.push(v.clone()))?,
        TraversalOrder::Depth => graph.dfs(&start, |v| visited.push(v.clone()))?,
    }

    if json {
        println!(
            "{}",
            serde_json::json!({"order": order.name(), "start": start, "visited": visited})
        );
    } else {
        let names: Vec<String> = visited.iter().map(ToString::to_string).collect();
        println!(
            "{} from {}: {}",
            order.name().to_uppercase(),
            start,
            names.join(" ")
        );
    }
    Ok(())
}

/// Print the spanning forest of a traversal.
pub fn cmd_tree(spec: &str, start: &str, order: TraversalOrder, json: bool) -> GraphResult<()> {
    let graph = parse_graph(spec)?;
    let start = resolve_vertex(&graph, start)?;
    let forest = crate::graph::spanning_forest(&graph, &start, order)?;
    let trees = forest.tree_count();
    let predecessors: Vec<(String, String)> = forest
        .predecessors
        .iter()
        .map(|(v, p)| (v.to_string(), p.to_string()))
        .collect();
    let tree = forest.into_graph();

    if json {
        let out = serde_json::json!({
            "order": order.name(),
            "root": start,
            "trees": trees,
            "edges": tree.edge_count(),
            "predecessors": predecessors,
            "adjacency": tree.name_map(),
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!(
            "{} forest from {}: {} trees, {} edges",
            order.name().to_uppercase(),
            start,
            trees,
            tree.edge_count()
        );
        for (v, p) in &predecessors {
            println!("  predecessor({}) = {}", v, p);
        }
        for (vertex, neighbors) in tree.name_map() {
            println!("  {}: [{}]", vertex, neighbors.join(", "));
        }
    }
    Ok(())
}

/// Print the all-pairs distance matrix.
pub fn cmd_distances(spec: &str, edge_length: f64, json: bool) -> GraphResult<()> {
    let graph = parse_graph(spec)?;
    let matrix = graph.distance_matrix(edge_length)?;
    if json {
        println!("{}", serde_json::to_string(&matrix).unwrap_or_default());
        return Ok(());
    }

    let labels: Vec<String> = matrix.vertices().iter().map(ToString::to_string).collect();
    let width = labels
        .iter()
        .map(String::len)
        .chain(std::iter::once(format_distance(edge_length).len()))
        .max()
        .unwrap_or(1)
        .max(3);
    print!("{:>width$}", "", width = width);
    for label in &labels {
        print!(" {:>width$}", label, width = width);
    }
    println!();
    for (label, row) in labels.iter().zip(matrix.rows()) {
        print!("{:>width$}", label, width = width);
        for d in row {
            print!(" {:>width$}", format_distance(d), width = width);
        }
        println!();
    }
    Ok(())
}

/// Print summary statistics.
pub fn cmd_stats(spec: &str, json: bool) -> GraphResult<()> {
    let graph = parse_graph(spec)?;
    let degrees: Vec<usize> = graph.adjacency().values().map(Vec::len).collect();
    let min_degree = degrees.iter().copied().min().unwrap_or(0);
    let max_degree = degrees.iter().copied().max().unwrap_or(0);
    let components = graph.component_count();

    if json {
        let out = serde_json::json!({
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "components": components,
            "min_degree": min_degree,
            "max_degree": max_degree,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!("Graph: {}", spec);
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        println!("Components: {}", components);
        println!("Degree: min {}, max {}", min_degree, max_degree);
    }
    Ok(())
}

fn format_distance(d: f64) -> String {
    if d.is_infinite() {
        "inf".to_string()
    } else {
        format!("{}", d)
    }
}
