//! Canonical graph families.

use crate::types::{GraphError, GraphResult, Vertex};

use super::{Adjacency, Graph};

/// A named family member, as addressed from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFamily {
    /// `K_n`.
    Complete(usize),
    /// `K_{p,q}`.
    Bipartite(usize, usize),
    /// `C_n`.
    Cycle(usize),
    /// `O_n`, no edges.
    Empty(usize),
    /// `P_n`.
    Path(usize),
    /// `Q_n`, optionally relabelled with binary coordinates.
    Hypercube { dimension: usize, binary: bool },
}

impl GraphFamily {
    /// Return the family name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Complete(_) => "complete",
            Self::Bipartite(..) => "bipartite",
            Self::Cycle(_) => "cycle",
            Self::Empty(_) => "empty",
            Self::Path(_) => "path",
            Self::Hypercube { .. } => "hypercube",
        }
    }

    /// Parse `name:args`, e.g. `cycle:5`, `bipartite:2,3`, `hypercube:3,binary`.
    pub fn parse(spec: &str) -> GraphResult<Self> {
        let invalid = || GraphError::InvalidGraphSpec(spec.to_string());
        let (name, args) = spec.trim().split_once(':').ok_or_else(invalid)?;
        let args: Vec<&str> = args.split(',').map(str::trim).collect();
        let size = |i: usize| -> GraphResult<usize> {
            args.get(i)
                .and_then(|a| a.parse().ok())
                .ok_or_else(invalid)
        };

        let family = match (name.to_lowercase().as_str(), args.len()) {
            ("complete" | "k", 1) => Self::Complete(size(0)?),
            ("bipartite" | "kpq", 2) => Self::Bipartite(size(0)?, size(1)?),
            ("cycle" | "c", 1) => Self::Cycle(size(0)?),
            ("empty" | "o", 1) => Self::Empty(size(0)?),
            ("path" | "p", 1) => Self::Path(size(0)?),
            ("hypercube" | "q", 1) => Self::Hypercube {
                dimension: size(0)?,
                binary: false,
            },
            ("hypercube" | "q", 2) if args[1].eq_ignore_ascii_case("binary") => {
                Self::Hypercube {
                    dimension: size(0)?,
                    binary: true,
                }
            }
            _ => return Err(invalid()),
        };
        Ok(family)
    }
}

/// Stateless factory for the canonical families.
///
/// Vertices are named by integer index `0..n`, except hypercubes, whose
/// vertices carry product names (or binary strings once relabelled).
pub struct GraphGenerator;

impl GraphGenerator {
    /// Build any family member.
    pub fn build(family: GraphFamily) -> Graph {
        match family {
            GraphFamily::Complete(n) => Self::complete(n),
            GraphFamily::Bipartite(p, q) => Self::complete_bipartite(p, q),
            GraphFamily::Cycle(n) => Self::cycle(n),
            GraphFamily::Empty(n) => Self::empty(n),
            GraphFamily::Path(n) => Self::path(n),
            GraphFamily::Hypercube { dimension, binary } => Self::hypercube(dimension, binary),
        }
    }

    /// Complete graph on `n` vertices.
    pub fn complete(n: usize) -> Graph {
        let vertices = indexed(n);
        let adjacency: Adjacency = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let neighbors = vertices
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, u)| u.clone())
                    .collect();
                (v.clone(), neighbors)
            })
            .collect();
        Graph::from_adjacency_unchecked(adjacency)
    }

    /// Complete bipartite graph: `0..p` on one side, `p..p+q` on the other.
    pub fn complete_bipartite(p: usize, q: usize) -> Graph {
        let vertices = indexed(p + q);
        let (left, right) = vertices.split_at(p);
        let mut adjacency = Adjacency::with_capacity(p + q);
        for v in left {
            adjacency.insert(v.clone(), right.to_vec());
        }
        for v in right {
            adjacency.insert(v.clone(), left.to_vec());
        }
        Graph::from_adjacency_unchecked(adjacency)
    }

    /// Cycle on `n` vertices; empty for `n < 3`.
    pub fn cycle(n: usize) -> Graph {
        if n < 3 {
            return Graph::new();
        }
        let vertices = indexed(n);
        let mut adjacency = Adjacency::with_capacity(n);
        adjacency.insert(
            vertices[0].clone(),
            vec![vertices[1].clone(), vertices[n - 1].clone()],
        );
        for i in 1..n - 1 {
            adjacency.insert(
                vertices[i].clone(),
                vec![vertices[i - 1].clone(), vertices[i + 1].clone()],
            );
        }
        adjacency.insert(
            vertices[n - 1].clone(),
            vec![vertices[0].clone(), vertices[n - 2].clone()],
        );
        Graph::from_adjacency_unchecked(adjacency)
    }

    /// `n` isolated vertices.
    pub fn empty(n: usize) -> Graph {
        let adjacency = indexed(n).into_iter().map(|v| (v, Vec::new())).collect();
        Graph::from_adjacency_unchecked(adjacency)
    }

    /// Path `0 - 1 - ... - (n-1)`.
    pub fn path(n: usize) -> Graph {
        if n < 2 {
            return Self::empty(n);
        }
        let vertices = indexed(n);
        let mut adjacency = Adjacency::with_capacity(n);
        adjacency.insert(vertices[0].clone(), vec![vertices[1].clone()]);
        for i in 1..n - 1 {
            adjacency.insert(
                vertices[i].clone(),
                vec![vertices[i - 1].clone(), vertices[i + 1].clone()],
            );
        }
        adjacency.insert(vertices[n - 1].clone(), vec![vertices[n - 2].clone()]);
        Graph::from_adjacency_unchecked(adjacency)
    }

    /// `n`-dimensional hypercube, the product of `n` copies of `P_2`.
    ///
    /// With `binary`, each vertex is renamed to the `0`/`1` digits of its
    /// product name, giving its coordinate string (`"000"` .. `"111"` for
    /// `n = 3`).
    pub fn hypercube(n: usize, binary: bool) -> Graph {
        if n < 1 {
            return Graph::new();
        }
        let edge = Self::path(2);
        let mut cube = Self::path(2);
        for _ in 1..n {
            cube = &cube * &edge;
        }
        log::debug!(
            "hypercube Q{}: {} vertices, {} edges",
            n,
            cube.vertex_count(),
            cube.edge_count()
        );

        if binary {
            relabel_binary(&cube)
        } else {
            cube
        }
    }
}

fn indexed(n: usize) -> Vec<Vertex> {
    (0..n as u64).map(Vertex::new).collect()
}

/// Rename every vertex to its binary coordinate, keeping adjacency intact.
fn relabel_binary(graph: &Graph) -> Graph {
    let names: Vec<Vertex> = graph
        .adjacency()
        .keys()
        .map(|v| Vertex::new(v.name.binary_digits()))
        .collect();

    let adjacency: Adjacency = graph
        .neighbor_indices()
        .into_iter()
        .zip(&names)
        .map(|(list, v)| {
            let neighbors = list.into_iter().map(|j| names[j].clone()).collect();
            (v.clone(), neighbors)
        })
        .collect();
    Graph::from_adjacency_unchecked(adjacency)
}
