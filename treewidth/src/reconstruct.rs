//! Walks a successful trial's glue map into a [`TreeDecomposition`].

use crate::bitset::BitSet;
use crate::decomposition::{Bag, Quality, TreeDecomposition};
use crate::graph::Graph;
use crate::store::ConfigStore;

pub fn reconstruct(graph: &Graph, store: &ConfigStore, width: usize) -> TreeDecomposition {
    let whole = BitSet::full(graph.n());
    let mut bags = Vec::new();
    let mut edges = Vec::new();
    build(graph, store, &whole, &mut bags, &mut edges);
    TreeDecomposition {
        width,
        quality: Quality::Exact,
        bags,
        edges,
    }
}

/// Materialises `s` and its descendants, returning `s`'s own index in `bags`.
/// Plain recursion, not memoised: a configuration reachable as a parent of
/// more than one node is simply emitted more than once.
fn build(
    graph: &Graph,
    store: &ConfigStore,
    s: &BitSet,
    bags: &mut Vec<Bag>,
    edges: &mut Vec<(usize, usize)>,
) -> usize {
    let parents = store.parents(s).unwrap_or(&[]);

    let mut delta = s.clone();
    for parent in parents {
        delta.subtract(parent);
    }
    let mut bag_set = delta;
    bag_set.union_with(&graph.exterior_border(s));

    let vertices = bag_set.iter().map(|v| graph.label(v).to_string()).collect();
    let this_index = bags.len();
    bags.push(Bag { vertices });

    for parent in parents {
        let child_index = build(graph, store, parent, bags, edges);
        edges.push((this_index, child_index));
    }

    this_index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::NeverCancel;
    use crate::decomposer::Decomposer;

    #[test]
    fn path_reconstructs_to_three_bags_of_size_two() {
        let g = Graph::new(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        let mut d = Decomposer::new(&g, 1, None);
        assert!(matches!(
            d.run(&NeverCancel),
            crate::decomposer::SearchOutcome::Done
        ));
        let decomposition = reconstruct(&g, d.store(), 1);
        assert!(decomposition
            .bags
            .iter()
            .all(|bag| bag.vertices.len() <= 2));
        let covered: std::collections::HashSet<_> = decomposition
            .bags
            .iter()
            .flat_map(|bag| bag.vertices.iter().cloned())
            .collect();
        assert_eq!(covered.len(), 4);
    }
}
