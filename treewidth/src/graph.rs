//! Immutable bit-set graph: adjacency, exterior borders, and the
//! saturation/absorbability queries the decomposer prunes against.

use crate::bitset::BitSet;
use crate::error::Error;
use index_vec::IndexVec;
use itertools::Itertools;

index_vec::define_index_type! { pub struct VertexId = usize; }

pub type VertexVec<T> = IndexVec<VertexId, T>;

/// A simple, undirected graph over `[0, n)`, stored as one [`BitSet`] row of
/// adjacency per vertex. Built once per [`crate::decompose`] call and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct Graph {
    n: usize,
    adjacency: VertexVec<BitSet>,
    labels: Vec<String>,
}

impl Graph {
    /// Builds a graph from an edge list, labelling vertex `i` as `"i"`.
    pub fn new(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Result<Self, Error> {
        let labels = (0..n).map(|i| i.to_string()).collect();
        Self::with_labels(n, edges, labels)
    }

    /// Builds a graph from an edge list with caller-supplied external labels.
    pub fn with_labels(
        n: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
        labels: Vec<String>,
    ) -> Result<Self, Error> {
        if labels.len() != n {
            return Err(Error::LabelCountMismatch {
                given: labels.len(),
                expected: n,
            });
        }
        let mut adjacency: VertexVec<BitSet> =
            (0..n).map(|_| BitSet::empty(n)).collect_vec().into();
        for (u, v) in edges {
            if u >= n {
                return Err(Error::VertexOutOfRange(u, v, n));
            }
            if v >= n {
                return Err(Error::VertexOutOfRange(u, v, n));
            }
            if u == v {
                return Err(Error::SelfLoop(u));
            }
            adjacency[VertexId::from_usize(u)].insert(v);
            adjacency[VertexId::from_usize(v)].insert(u);
        }
        Ok(Self {
            n,
            adjacency,
            labels,
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn label(&self, v: usize) -> &str {
        &self.labels[v]
    }

    pub fn neighbourhood(&self, v: usize) -> &BitSet {
        &self.adjacency[VertexId::from_usize(v)]
    }

    /// Vertices in `V \ s` adjacent to some vertex in `s`.
    pub fn exterior_border(&self, s: &BitSet) -> BitSet {
        let mut border = BitSet::empty(self.n);
        for v in s.iter() {
            border.union_with(&self.adjacency[VertexId::from_usize(v)]);
        }
        border.subtract(s);
        border
    }

    /// Connected components of `G[vertices]`, each returned as a [`BitSet`]
    /// restricted to `vertices`.
    fn components_within(&self, vertices: &BitSet) -> Vec<BitSet> {
        let mut visited = BitSet::empty(self.n);
        let mut components = Vec::new();
        for start in vertices.iter() {
            if visited.contains(start) {
                continue;
            }
            let mut component = BitSet::empty(self.n);
            let mut stack = vec![start];
            visited.insert(start);
            component.insert(start);
            while let Some(v) = stack.pop() {
                for u in self.adjacency[VertexId::from_usize(v)].iter() {
                    if vertices.contains(u) && !visited.contains(u) {
                        visited.insert(u);
                        component.insert(u);
                        stack.push(u);
                    }
                }
            }
            components.push(component);
        }
        components
    }

    /// Saturates `s` in place: repeatedly absorbs every connected component
    /// of `G[V \ (s ∪ N(s))]` whose neighbourhood is a *proper* subset of
    /// `N(s)`, until none remain. Idempotent, and never enlarges `N(s)`.
    pub fn saturate(&self, s: &mut BitSet) {
        loop {
            let border = self.exterior_border(s);
            let mut outside = BitSet::full(self.n);
            outside.subtract(s);
            outside.subtract(&border);

            let mut changed = false;
            for component in self.components_within(&outside) {
                let component_border = self.exterior_border(&component);
                if component_border.is_subset(&border)
                    && component_border.cardinality() < border.cardinality()
                {
                    s.union_with(&component);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }
    }

    /// Returns the smallest vertex id belonging to some not-yet-absorbed
    /// ("partial") component of `G[V \ (t ∪ N(t))]`, or `None` if `t` is
    /// already saturated with respect to its border.
    pub fn absorbable(&self, t: &BitSet) -> Option<usize> {
        let border = self.exterior_border(t);
        let mut outside = BitSet::full(self.n);
        outside.subtract(t);
        outside.subtract(&border);

        let mut best = None;
        for component in self.components_within(&outside) {
            let component_border = self.exterior_border(&component);
            if component_border.is_subset(&border)
                && component_border.cardinality() < border.cardinality()
            {
                let candidate = component.min().expect("components are non-empty");
                best = Some(match best {
                    Some(current) if current <= candidate => current,
                    _ => candidate,
                });
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path4() -> Graph {
        // a-b-c-d
        Graph::new(4, [(0, 1), (1, 2), (2, 3)]).unwrap()
    }

    #[test]
    fn rejects_out_of_range_edge() {
        assert!(Graph::new(3, [(0, 5)]).is_err());
    }

    #[test]
    fn rejects_self_loop() {
        assert!(Graph::new(3, [(1, 1)]).is_err());
    }

    #[test]
    fn exterior_border_of_single_vertex() {
        let g = path4();
        let s = BitSet::singleton(4, 1);
        let border = g.exterior_border(&s);
        assert_eq!(border, BitSet::from_indices(4, [0, 2]));
    }

    #[test]
    fn saturate_absorbs_fully_enclosed_component() {
        // star: centre 0 connected to 1,2,3; s = {1} has border {0}.
        // the other leaves 2,3 are not reachable without crossing 0, and
        // each is its own component with border {0} == border(s), so they
        // are NOT absorbed (a "full" component, kept as an alternative).
        let g = Graph::new(4, [(0, 1), (0, 2), (0, 3)]).unwrap();
        let mut s = BitSet::singleton(4, 1);
        g.saturate(&mut s);
        assert_eq!(s, BitSet::singleton(4, 1));
    }

    #[test]
    fn saturate_is_idempotent() {
        let g = path4();
        let mut s = BitSet::from_indices(4, [1, 2]);
        g.saturate(&mut s);
        let once = s.clone();
        g.saturate(&mut s);
        assert_eq!(s, once);
    }

    #[test]
    fn absorbable_none_when_saturated() {
        let g = path4();
        let mut s = BitSet::singleton(4, 1);
        g.saturate(&mut s);
        assert_eq!(g.absorbable(&s), None);
    }

    fn petersen() -> Graph {
        let outer: Vec<(usize, usize)> = (0..5).map(|i| (i, (i + 1) % 5)).collect();
        let inner: Vec<(usize, usize)> = (0..5).map(|i| (5 + i, 5 + (i + 2) % 5)).collect();
        let spokes: Vec<(usize, usize)> = (0..5).map(|i| (i, i + 5)).collect();
        let edges: Vec<(usize, usize)> = outer.into_iter().chain(inner).chain(spokes).collect();
        Graph::new(10, edges).unwrap()
    }

    proptest::proptest! {
        #[test]
        fn saturate_is_idempotent_on_petersen(bits in proptest::collection::vec(proptest::bool::ANY, 10)) {
            let g = petersen();
            let mut s = BitSet::from_indices(10, (0..10).filter(|&i| bits[i]));
            g.saturate(&mut s);
            let once = s.clone();
            g.saturate(&mut s);
            proptest::prop_assert_eq!(s, once);
        }

        #[test]
        fn saturate_never_enlarges_the_border(bits in proptest::collection::vec(proptest::bool::ANY, 10)) {
            let g = petersen();
            let s = BitSet::from_indices(10, (0..10).filter(|&i| bits[i]));
            let border_before = g.exterior_border(&s);
            let mut saturated = s.clone();
            g.saturate(&mut saturated);
            let border_after = g.exterior_border(&saturated);
            proptest::prop_assert!(border_after.is_subset(&border_before));
        }
    }
}
