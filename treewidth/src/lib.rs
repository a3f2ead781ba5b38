//! Exact tree-decomposition engine.
//!
//! Computes a minimum-width tree decomposition of an undirected graph via
//! the clean-and-glue reconstruction of a winning helicopter cops-and-robber
//! strategy: an increasing sequence of trial widths, each driven by
//! [`decomposer::Decomposer`] and, on success, materialised into a
//! [`TreeDecomposition`] by [`reconstruct::reconstruct`].
//!
//! Ingestion, logger wiring, and configuration-file parsing are left to the
//! embedder; see `treewidth-cli` for one such embedder.

pub mod bitset;
pub mod cancel;
pub mod decomposer;
pub mod decomposition;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod reconstruct;
pub mod store;
pub mod trie;

pub use bitset::BitSet;
pub use cancel::{Cancellation, NeverCancel};
pub use decomposition::{Bag, Quality, TreeDecomposition};
pub use error::Error;
pub use graph::Graph;

use decomposer::{Decomposer, SearchOutcome};

/// External guidance for the outer `k`-loop. Neither field changes the
/// decomposition that's returned, only how much search it takes to find it
/// (aside from `upper_bound`, which can make the search give up early).
#[derive(Debug, Clone, Copy, Default)]
pub struct Hints {
    /// Skip trial widths below this value.
    pub lower_bound: Option<usize>,
    /// Give up once the trial width would reach this value; the caller
    /// already holds a decomposition of at least this width.
    pub upper_bound: Option<usize>,
}

/// Safety knobs that don't change which decomposition is found, only how the
/// search is carried out.
#[derive(Debug, Clone)]
pub struct Config {
    /// Caps how many times a single pop's glue-expansion stack can be
    /// popped before the search moves on to the next frontier item. `None`
    /// allows unbounded transitive glueing within one pop.
    pub max_glue_iterations_per_pop: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_glue_iterations_per_pop: Some(100_000),
        }
    }
}

/// The three-and-a-bit outcomes `decompose` can report. Pruning decisions
/// and per-width failures are not represented here: they're expected
/// control flow internal to the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(TreeDecomposition),
    Interrupted,
    /// The trial width reached `hints.upper_bound` without success.
    BoundExhausted,
}

/// Computes a minimum-width tree decomposition of `graph`.
pub fn decompose(
    graph: &Graph,
    hints: Hints,
    config: &Config,
    cancel: &dyn Cancellation,
) -> Result<Outcome, Error> {
    if hints.upper_bound == Some(0) {
        return Err(Error::ZeroUpperBound);
    }

    // n <= 1 is trivially width 0 (a single bag covering whatever vertices
    // there are), and is handled directly rather than through a trial k
    // loop that never probes k = 0 (the driver starts at max(lower_bound,
    // 1) per the main algorithm's convention).
    if graph.n() <= 1 {
        let vertices = (0..graph.n()).map(|v| graph.label(v).to_string()).collect();
        return Ok(Outcome::Success(TreeDecomposition {
            width: 0,
            quality: Quality::Exact,
            bags: vec![Bag { vertices }],
            edges: vec![],
        }));
    }

    let mut k = hints.lower_bound.unwrap_or(1).max(1);
    loop {
        if let Some(upper) = hints.upper_bound {
            if k >= upper {
                return Ok(Outcome::BoundExhausted);
            }
        }
        if cancel.is_cancelled() {
            return Ok(Outcome::Interrupted);
        }

        log::info!("trying width {}", k);
        let mut decomposer = Decomposer::new(graph, k, config.max_glue_iterations_per_pop);
        match decomposer.run(cancel) {
            SearchOutcome::Done => {
                let decomposition = reconstruct::reconstruct(graph, decomposer.store(), k);
                log::info!(
                    "found tree decomposition of width {} ({} bags)",
                    k,
                    decomposition.bag_count()
                );
                return Ok(Outcome::Success(decomposition));
            }
            SearchOutcome::Failed => {
                log::debug!("width {} is infeasible", k);
                k += 1;
            }
            SearchOutcome::Interrupted => return Ok(Outcome::Interrupted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_is_trivially_width_zero() {
        let g = Graph::new(0, []).unwrap();
        let outcome = decompose(&g, Hints::default(), &Config::default(), &NeverCancel).unwrap();
        match outcome {
            Outcome::Success(decomposition) => {
                assert_eq!(decomposition.width, 0);
                assert_eq!(decomposition.bags.len(), 1);
            }
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn single_vertex_graph_is_trivially_width_zero() {
        let g = Graph::new(1, []).unwrap();
        let outcome = decompose(&g, Hints::default(), &Config::default(), &NeverCancel).unwrap();
        match outcome {
            Outcome::Success(decomposition) => {
                assert_eq!(decomposition.width, 0);
                assert_eq!(decomposition.bags, vec![Bag { vertices: vec!["0".to_string()] }]);
            }
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn zero_upper_bound_is_invalid() {
        let g = Graph::new(1, []).unwrap();
        let hints = Hints {
            lower_bound: None,
            upper_bound: Some(0),
        };
        assert_eq!(
            decompose(&g, hints, &Config::default(), &NeverCancel),
            Err(Error::ZeroUpperBound)
        );
    }

    #[test]
    fn upper_bound_exhaustion_is_reported() {
        let g = Graph::new(4, [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]).unwrap();
        let hints = Hints {
            lower_bound: None,
            upper_bound: Some(1),
        };
        let outcome = decompose(&g, hints, &Config::default(), &NeverCancel).unwrap();
        assert!(matches!(outcome, Outcome::BoundExhausted));
    }

    #[test]
    fn k4_has_width_three() {
        let g = Graph::new(4, [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]).unwrap();
        let outcome = decompose(&g, Hints::default(), &Config::default(), &NeverCancel).unwrap();
        match outcome {
            Outcome::Success(decomposition) => assert_eq!(decomposition.width, 3),
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn two_disjoint_triangles_have_width_two() {
        let g = Graph::new(6, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]).unwrap();
        let outcome = decompose(&g, Hints::default(), &Config::default(), &NeverCancel).unwrap();
        match outcome {
            Outcome::Success(decomposition) => assert_eq!(decomposition.width, 2),
            _ => panic!("expected success"),
        }
    }
}
