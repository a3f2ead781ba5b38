//! Output types: a tree decomposition is a tree of bags over external vertex
//! labels. `quality` is always `Exact` — this crate has no approximation
//! mode.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Quality {
    Exact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bag {
    pub vertices: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeDecomposition {
    pub width: usize,
    pub quality: Quality,
    /// Bags, indexed by position in this vector.
    pub bags: Vec<Bag>,
    /// Undirected tree edges as pairs of indices into `bags`.
    pub edges: Vec<(usize, usize)>,
}

impl TreeDecomposition {
    pub fn bag_count(&self) -> usize {
        self.bags.len()
    }
}
