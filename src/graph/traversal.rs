//! Graph traversal (BFS/DFS) and spanning-forest extraction.
//!
//! Every traversal covers the whole graph: once the component of the start
//! vertex is exhausted it restarts on each still-unvisited vertex in
//! insertion order.

use std::collections::VecDeque;

use indexmap::IndexMap;

use crate::types::{GraphResult, Vertex};

use super::Graph;

/// Which traversal to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Queue-based, level order.
    Breadth,
    /// Stack-based, one unvisited neighbor at a time.
    Depth,
}

impl TraversalOrder {
    /// Return a human-readable name for this order.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Breadth => "bfs",
            Self::Depth => "dfs",
        }
    }

    /// Parse an order from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth" => Some(Self::Breadth),
            "dfs" | "depth" => Some(Self::Depth),
            _ => None,
        }
    }
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Predecessor table recorded while traversing.
#[derive(Debug, Clone)]
pub struct SpanningForest {
    /// Traversal that produced the forest.
    pub order: TraversalOrder,
    /// The start vertex. Its tree is the first one.
    pub root: Vertex,
    /// First vertex of every tree, in discovery order (includes `root`).
    pub component_roots: Vec<Vertex>,
    /// Vertex -> discovering vertex, in discovery order. Roots map to
    /// themselves.
    pub predecessors: IndexMap<Vertex, Vertex>,
}

impl SpanningForest {
    /// The vertex that discovered `v`. Roots are their own predecessor.
    pub fn predecessor(&self, v: &Vertex) -> Option<&Vertex> {
        self.predecessors.get(v)
    }

    /// Vertices in the order the traversal discovered them.
    pub fn discovery_order(&self) -> Vec<Vertex> {
        self.predecessors.keys().cloned().collect()
    }

    /// Number of trees (connected components of the traversed graph).
    pub fn tree_count(&self) -> usize {
        self.component_roots.len()
    }

    /// Number of tree edges: `|V| - trees`.
    pub fn edge_count(&self) -> usize {
        self.predecessors.len() - self.component_roots.len()
    }

    /// Turn the forest into a graph.
    ///
    /// Each vertex lists its predecessor first, then its children in discovery
    /// order. Roots have no predecessor entry. The start vertex carries the
    /// root flag.
    pub fn into_graph(self) -> Graph {
        let mut children: IndexMap<Vertex, Vec<Vertex>> = self
            .predecessors
            .keys()
            .map(|v| (v.clone(), Vec::new()))
            .collect();
        for (child, parent) in &self.predecessors {
            if child != parent {
                if let Some(list) = children.get_mut(parent) {
                    list.push(child.clone());
                }
            }
        }

        let mut adjacency = IndexMap::with_capacity(children.len());
        for (vertex, kids) in children {
            let mut neighbors = Vec::with_capacity(kids.len() + 1);
            if let Some(parent) = self.predecessors.get(&vertex) {
                if *parent != vertex {
                    neighbors.push(parent.clone());
                }
            }
            neighbors.extend(kids);
            adjacency.insert(vertex, neighbors);
        }

        let mut graph = Graph::from_adjacency_unchecked(adjacency);
        graph.roots.insert(self.root);
        graph
    }
}

/// Walk the whole graph from `start`, calling `discover(vertex, parent)` once
/// per vertex at discovery time. Component roots are reported as their own
/// parent.
fn walk<F>(graph: &Graph, start: usize, order: TraversalOrder, mut discover: F)
where
    F: FnMut(usize, usize),
{
    let lists = graph.neighbor_indices();
    let mut visited = vec![false; lists.len()];

    let mut component = |root: usize, visited: &mut [bool]| match order {
        TraversalOrder::Breadth => {
            let mut queue = VecDeque::new();
            visited[root] = true;
            discover(root, root);
            queue.push_back(root);
            while let Some(x) = queue.pop_front() {
                for &y in &lists[x] {
                    if !visited[y] {
                        visited[y] = true;
                        discover(y, x);
                        queue.push_back(y);
                    }
                }
            }
        }
        TraversalOrder::Depth => {
            let mut stack = vec![root];
            visited[root] = true;
            discover(root, root);
            // Rescan the top of the stack after every push; pop only when it
            // has no unvisited neighbor left.
            while let Some(&x) = stack.last() {
                match lists[x].iter().copied().find(|&y| !visited[y]) {
                    Some(y) => {
                        visited[y] = true;
                        discover(y, x);
                        stack.push(y);
                    }
                    None => {
                        stack.pop();
                    }
                }
            }
        }
    };

    component(start, &mut visited);
    for v in 0..lists.len() {
        if !visited[v] {
            component(v, &mut visited);
        }
    }
}

/// Visit every vertex of `graph` exactly once, starting from `start`.
pub fn traverse<F>(
    graph: &Graph,
    start: &Vertex,
    order: TraversalOrder,
    mut visit: F,
) -> GraphResult<()>
where
    F: FnMut(&Vertex),
{
    let start = graph.index_of(start)?;
    let adjacency = graph.adjacency();
    walk(graph, start, order, |v, _| {
        if let Some((vertex, _)) = adjacency.get_index(v) {
            visit(vertex);
        }
    });
    Ok(())
}

/// Record the discovering predecessor of every vertex.
pub fn spanning_forest(
    graph: &Graph,
    start: &Vertex,
    order: TraversalOrder,
) -> GraphResult<SpanningForest> {
    let start_idx = graph.index_of(start)?;
    let vertices = graph.vertices();
    let mut predecessors = IndexMap::with_capacity(vertices.len());
    let mut component_roots = Vec::new();

    walk(graph, start_idx, order, |v, parent| {
        if v == parent {
            component_roots.push(vertices[v].clone());
        }
        log::debug!("predecessor({}) = {}", vertices[v], vertices[parent]);
        predecessors.insert(vertices[v].clone(), vertices[parent].clone());
    });

    log::debug!(
        "{} forest from {}: {} vertices, {} trees",
        order,
        start,
        predecessors.len(),
        component_roots.len()
    );

    Ok(SpanningForest {
        order,
        root: start.clone(),
        component_roots,
        predecessors,
    })
}

impl Graph {
    /// Breadth-first traversal. `visit` runs once per vertex, when it is
    /// first discovered.
    pub fn bfs<F: FnMut(&Vertex)>(&self, start: &Vertex, visit: F) -> GraphResult<()> {
        traverse(self, start, TraversalOrder::Breadth, visit)
    }

    /// Depth-first traversal. `visit` runs once per vertex, when it is
    /// pushed.
    pub fn dfs<F: FnMut(&Vertex)>(&self, start: &Vertex, visit: F) -> GraphResult<()> {
        traverse(self, start, TraversalOrder::Depth, visit)
    }

    /// Predecessor table of a breadth-first traversal.
    pub fn bfs_forest(&self, start: &Vertex) -> GraphResult<SpanningForest> {
        spanning_forest(self, start, TraversalOrder::Breadth)
    }

    /// Predecessor table of a depth-first traversal.
    pub fn dfs_forest(&self, start: &Vertex) -> GraphResult<SpanningForest> {
        spanning_forest(self, start, TraversalOrder::Depth)
    }

    /// Breadth-first spanning forest as a graph.
    pub fn bfs_tree(&self, start: &Vertex) -> GraphResult<Graph> {
        self.bfs_forest(start).map(SpanningForest::into_graph)
    }

    /// Depth-first spanning forest as a graph.
    pub fn dfs_tree(&self, start: &Vertex) -> GraphResult<Graph> {
        self.dfs_forest(start).map(SpanningForest::into_graph)
    }

    /// Number of connected components.
    pub fn component_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let mut count = 0;
        walk(self, 0, TraversalOrder::Breadth, |v, parent| {
            if v == parent {
                count += 1;
            }
        });
        count
    }
}
