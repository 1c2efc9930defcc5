//! simple-graph: undirected graphs without loops or multiple edges.
//!
//! Graphs are built incrementally or generated from canonical families
//! (complete, bipartite, cycle, empty, path, hypercube), traversed breadth- or
//! depth-first into spanning forests, measured with all-pairs distances, and
//! composed with the Cartesian product.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    spanning_forest, traverse, Adjacency, DistanceMatrix, Graph, GraphFamily, GraphGenerator,
    SpanningForest, TraversalOrder,
};
pub use types::{
    split_composite_name, Edge, GraphError, GraphResult, Vertex, VertexName, DEFAULT_EDGE_LENGTH,
};
