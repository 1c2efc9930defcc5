//! Cartesian graph product.

use std::ops::Mul;

use indexmap::IndexMap;

use crate::types::Vertex;

use super::Graph;

impl Graph {
    /// Cartesian product `self × other`.
    ///
    /// Vertices are the pairs `(g,h)`, ordered with `g` major. `(g1,h1)` and
    /// `(g2,h2)` are adjacent iff `g1 == g2` and `h1 ~ h2`, or `h1 == h2` and
    /// `g1 ~ g2`. Each neighbor list follows the product's vertex order.
    pub fn cartesian_product(&self, other: &Graph) -> Graph {
        let left = self.vertices();
        let right = other.vertices();
        let width = right.len();

        let left_lists = self.neighbor_indices();
        let right_lists = other.neighbor_indices();

        let mut adjacency = IndexMap::with_capacity(left.len() * width);
        for (gi, g) in left.iter().enumerate() {
            for (hi, h) in right.iter().enumerate() {
                let mut targets: Vec<usize> = left_lists[gi]
                    .iter()
                    .map(|&gj| gj * width + hi)
                    .chain(right_lists[hi].iter().map(|&hj| gi * width + hj))
                    .collect();
                targets.sort_unstable();

                let neighbors = targets
                    .into_iter()
                    .map(|t| Vertex::pair(&left[t / width], &right[t % width]))
                    .collect();
                adjacency.insert(Vertex::pair(g, h), neighbors);
            }
        }

        log::debug!(
            "product of {}x{} vertices: {} vertices",
            left.len(),
            right.len(),
            adjacency.len()
        );
        Graph::from_adjacency_unchecked(adjacency)
    }
}

impl Mul for &Graph {
    type Output = Graph;

    fn mul(self, rhs: &Graph) -> Graph {
        self.cartesian_product(rhs)
    }
}
