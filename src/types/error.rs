//! Error types for the graph library.

use thiserror::Error;

/// All errors that can occur in the graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex is not part of the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    /// Composite vertex name with unbalanced parentheses or no top-level comma.
    #[error("Malformed composite vertex name: {0:?}")]
    MalformedName(String),

    /// Adjacency mapping lists a vertex as its own neighbor.
    #[error("Self-loop not allowed on vertex {0}")]
    SelfLoop(String),

    /// Adjacency mapping lists the same neighbor twice.
    #[error("Vertex {neighbor} listed twice as a neighbor of {vertex}")]
    DuplicateNeighbor { vertex: String, neighbor: String },

    /// Adjacency mapping names a neighbor that has no entry of its own.
    #[error("Neighbor {neighbor} of {vertex} is not a vertex of the graph")]
    UnknownNeighbor { vertex: String, neighbor: String },

    /// Adjacency mapping holds `to` in the list of `from` but not the reverse.
    #[error("Asymmetric adjacency: {to} is a neighbor of {from} but not vice versa")]
    AsymmetricAdjacency { from: String, to: String },

    /// Edge length must be finite and non-negative.
    #[error("Edge length must be finite and non-negative: {0}")]
    InvalidEdgeLength(f64),

    /// Graph description could not be understood.
    #[error("Invalid graph spec: {0}")]
    InvalidGraphSpec(String),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
