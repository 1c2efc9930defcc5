//! Core graph structure: insertion-ordered adjacency lists.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::types::{Edge, GraphError, GraphResult, Vertex};

/// Adjacency mapping: vertex -> ordered neighbor list.
pub type Adjacency = IndexMap<Vertex, Vec<Vertex>>;

/// An undirected graph without loops or multiple edges.
///
/// Vertex insertion order is significant: it fixes the vertex indices used by
/// [`Graph::distance_matrix`] and [`Graph::incident_edges`], and the order in
/// which traversals restart on unvisited components.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Vertex -> neighbors. Always symmetric.
    adjacency: Adjacency,
    /// Traversal annotation: vertices flagged as tree roots.
    pub(crate) roots: HashSet<Vertex>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a caller-supplied adjacency mapping, checking every
    /// structural invariant.
    pub fn from_adjacency(adjacency: Adjacency) -> GraphResult<Self> {
        for (vertex, neighbors) in &adjacency {
            let mut seen = HashSet::with_capacity(neighbors.len());
            for neighbor in neighbors {
                if neighbor == vertex {
                    return Err(GraphError::SelfLoop(vertex.to_string()));
                }
                if !seen.insert(neighbor) {
                    return Err(GraphError::DuplicateNeighbor {
                        vertex: vertex.to_string(),
                        neighbor: neighbor.to_string(),
                    });
                }
                let back = adjacency
                    .get(neighbor)
                    .ok_or_else(|| GraphError::UnknownNeighbor {
                        vertex: vertex.to_string(),
                        neighbor: neighbor.to_string(),
                    })?;
                if !back.contains(vertex) {
                    return Err(GraphError::AsymmetricAdjacency {
                        from: vertex.to_string(),
                        to: neighbor.to_string(),
                    });
                }
            }
        }
        Ok(Self::from_adjacency_unchecked(adjacency))
    }

    /// Wrap a mapping already known to satisfy the invariants (generators,
    /// products, spanning forests).
    pub(crate) fn from_adjacency_unchecked(adjacency: Adjacency) -> Self {
        Self {
            adjacency,
            roots: HashSet::new(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// True when the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Read-only view of the adjacency mapping.
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.adjacency.keys().cloned().collect()
    }

    /// Whether `v` is a vertex of this graph.
    pub fn contains_vertex(&self, v: &Vertex) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Position of `v` in the vertex insertion order.
    pub fn index_of(&self, v: &Vertex) -> GraphResult<usize> {
        self.adjacency
            .get_index_of(v)
            .ok_or_else(|| GraphError::VertexNotFound(v.to_string()))
    }

    /// Neighbors of `v`, in the order they were attached.
    pub fn neighbors(&self, v: &Vertex) -> GraphResult<&[Vertex]> {
        self.adjacency
            .get(v)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::VertexNotFound(v.to_string()))
    }

    /// Number of neighbors of `v`.
    pub fn degree(&self, v: &Vertex) -> GraphResult<usize> {
        self.neighbors(v).map(<[Vertex]>::len)
    }

    /// Neighbor lists translated to vertex insertion indices.
    pub(crate) fn neighbor_indices(&self) -> Vec<Vec<usize>> {
        self.adjacency
            .values()
            .map(|neighbors| {
                neighbors
                    .iter()
                    .filter_map(|n| self.adjacency.get_index_of(n))
                    .collect()
            })
            .collect()
    }

    /// Whether `u` and `v` are adjacent.
    pub fn has_edge(&self, u: &Vertex, v: &Vertex) -> bool {
        self.adjacency
            .get(u)
            .map(|neighbors| neighbors.contains(v))
            .unwrap_or(false)
    }

    /// Add a vertex with no neighbors. No-op if already present.
    pub fn add_vertex(&mut self, v: Vertex) {
        self.adjacency.entry(v).or_default();
    }

    /// Add an undirected edge, inserting missing endpoints.
    ///
    /// Loops are silently dropped; adding an existing edge changes nothing.
    pub fn add_edge(&mut self, edge: Edge) {
        if edge.is_loop() {
            return;
        }
        let Edge { a, b } = edge;
        self.add_vertex(a.clone());
        self.add_vertex(b.clone());
        if let Some(list) = self.adjacency.get_mut(&a) {
            if !list.contains(&b) {
                list.push(b.clone());
            }
        }
        if let Some(list) = self.adjacency.get_mut(&b) {
            if !list.contains(&a) {
                list.push(a);
            }
        }
    }

    /// Every edge exactly once, in first-seen orientation.
    pub fn edges(&self) -> Vec<Edge> {
        let mut seen: HashSet<Edge> = HashSet::new();
        let mut edges = Vec::with_capacity(self.edge_count());
        for (vertex, neighbors) in &self.adjacency {
            for neighbor in neighbors {
                let edge = Edge::new(vertex.clone(), neighbor.clone());
                if seen.insert(edge.clone()) {
                    edges.push(edge);
                }
            }
        }
        edges
    }

    /// One edge per neighbor of `v`.
    ///
    /// The i-th neighbor yields `(neighbor, v)` when `i` is below the
    /// insertion index of `v`, `(v, neighbor)` otherwise.
    // NOTE: `i` is a neighbor-list position, `pos` a global vertex index.
    pub fn incident_edges(&self, v: &Vertex) -> GraphResult<Vec<Edge>> {
        let pos = self.index_of(v)?;
        let neighbors = self.neighbors(v)?;
        Ok(neighbors
            .iter()
            .enumerate()
            .map(|(i, u)| {
                if i < pos {
                    Edge::new(u.clone(), v.clone())
                } else {
                    Edge::new(v.clone(), u.clone())
                }
            })
            .collect())
    }

    /// Whether `v` carries the root flag.
    pub fn is_root(&self, v: &Vertex) -> bool {
        self.roots.contains(v)
    }

    /// Set or clear the root flag on `v`.
    pub fn set_root(&mut self, v: &Vertex, root: bool) -> GraphResult<()> {
        if !self.contains_vertex(v) {
            return Err(GraphError::VertexNotFound(v.to_string()));
        }
        if root {
            self.roots.insert(v.clone());
        } else {
            self.roots.remove(v);
        }
        Ok(())
    }

    /// Vertices carrying the root flag, in insertion order.
    pub fn roots(&self) -> Vec<Vertex> {
        self.adjacency
            .keys()
            .filter(|v| self.roots.contains(*v))
            .cloned()
            .collect()
    }

    /// String-keyed copy of the adjacency: vertex name -> neighbor names.
    pub fn name_map(&self) -> IndexMap<String, Vec<String>> {
        self.adjacency
            .iter()
            .map(|(v, neighbors)| {
                (
                    v.to_string(),
                    neighbors.iter().map(ToString::to_string).collect(),
                )
            })
            .collect()
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl Eq for Graph {}

impl FromIterator<Edge> for Graph {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        let mut graph = Graph::new();
        for edge in iter {
            graph.add_edge(edge);
        }
        graph
    }
}
