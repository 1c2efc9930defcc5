//! Vertex, edge and error types.

pub mod edge;
pub mod error;
pub mod vertex;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use vertex::{split_composite_name, Vertex, VertexName};

/// Default length of a single edge in distance computations.
pub const DEFAULT_EDGE_LENGTH: f64 = 100.0;
