//! The undirected edge struct.

use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::vertex::Vertex;

/// An undirected edge: `Edge::new(a, b) == Edge::new(b, a)`.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    /// First endpoint, as given at construction.
    pub a: Vertex,
    /// Second endpoint, as given at construction.
    pub b: Vertex,
}

impl Edge {
    /// Create an edge between two vertices.
    pub fn new(a: impl Into<Vertex>, b: impl Into<Vertex>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// Both endpoints, in construction order.
    pub fn endpoints(&self) -> (&Vertex, &Vertex) {
        (&self.a, &self.b)
    }

    /// A loop joins a vertex to itself. Graphs never store loops.
    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }

    /// Whether `v` is one of the endpoints.
    pub fn contains(&self, v: &Vertex) -> bool {
        self.a == *v || self.b == *v
    }

    /// The endpoint opposite `v`, if `v` is an endpoint.
    pub fn other(&self, v: &Vertex) -> Option<&Vertex> {
        if self.a == *v {
            Some(&self.b)
        } else if self.b == *v {
            Some(&self.a)
        } else {
            None
        }
    }

    /// Endpoints ordered by name, identical for both orientations.
    fn canonical(&self) -> (&Vertex, &Vertex) {
        if self.a <= self.b {
            (&self.a, &self.b)
        } else {
            (&self.b, &self.a)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {}", self.a, self.b)
    }
}
