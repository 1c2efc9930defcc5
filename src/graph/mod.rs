//! In-memory graph operations: the core data structure and its algorithms.

pub mod distance;
pub mod generator;
pub mod product;
pub mod traversal;
pub mod undirected;

pub use distance::DistanceMatrix;
pub use generator::{GraphFamily, GraphGenerator};
pub use traversal::{spanning_forest, traverse, SpanningForest, TraversalOrder};
pub use undirected::{Adjacency, Graph};
