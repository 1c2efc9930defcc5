//! All-pairs shortest distances (Floyd–Warshall).

use serde::Serialize;

use crate::types::{GraphError, GraphResult, Vertex};

use super::Graph;

/// Square distance matrix over the vertex insertion order.
///
/// Unreachable pairs hold `f64::INFINITY` (serialized as `null`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceMatrix {
    /// Row/column labels.
    vertices: Vec<Vertex>,
    /// Row-major `n * n` distances.
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// Row/column labels, in graph insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Distance between the `i`-th and `j`-th vertex.
    ///
    /// # Panics
    /// If either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.size() + j]
    }

    /// Distance between two vertices.
    pub fn distance(&self, u: &Vertex, v: &Vertex) -> GraphResult<f64> {
        let i = self.position(u)?;
        let j = self.position(v)?;
        Ok(self.get(i, j))
    }

    /// The matrix row by row.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        let n = self.size();
        if n == 0 {
            return Vec::new();
        }
        self.data.chunks(n).map(<[f64]>::to_vec).collect()
    }

    fn position(&self, v: &Vertex) -> GraphResult<usize> {
        self.vertices
            .iter()
            .position(|u| u == v)
            .ok_or_else(|| GraphError::VertexNotFound(v.to_string()))
    }
}

impl Graph {
    /// Shortest-path distances between every pair of vertices, each edge
    /// counting `edge_length`.
    pub fn distance_matrix(&self, edge_length: f64) -> GraphResult<DistanceMatrix> {
        if !edge_length.is_finite() || edge_length < 0.0 {
            return Err(GraphError::InvalidEdgeLength(edge_length));
        }

        let vertices = self.vertices();
        let n = vertices.len();
        let mut d = vec![f64::INFINITY; n * n];
        for (i, neighbors) in self.adjacency().values().enumerate() {
            d[i * n + i] = 0.0;
            for neighbor in neighbors {
                if let Some(j) = self.adjacency().get_index_of(neighbor) {
                    d[i * n + j] = edge_length;
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let dik = d[i * n + k];
                if dik == f64::INFINITY {
                    continue;
                }
                for j in 0..n {
                    let dkj = d[k * n + j];
                    if dkj < f64::INFINITY && dik + dkj < d[i * n + j] {
                        d[i * n + j] = dik + dkj;
                    }
                }
            }
        }

        log::debug!("distance matrix over {} vertices", n);
        Ok(DistanceMatrix { vertices, data: d })
    }
}
