//! The clean-and-glue search for a single trial width `k`.

use crate::bitset::BitSet;
use crate::cancel::Cancellation;
use crate::frontier::Frontier;
use crate::graph::Graph;
use crate::store::ConfigStore;
use crate::trie::BitSetTrie;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A winning configuration covering the whole graph was found.
    Done,
    /// The frontier emptied without reaching a winning configuration.
    Failed,
    /// Cancellation was observed; the search was abandoned.
    Interrupted,
}

/// Owns the per-trial search state: the memory trie, the glue store, the
/// frontier, and one trie per vertex indexing configurations whose border
/// touches it. All four are rebuilt fresh by [`Decomposer::new`] for each
/// trial width.
pub struct Decomposer<'g> {
    graph: &'g Graph,
    k: usize,
    memory: BitSetTrie,
    store: ConfigStore,
    frontier: Frontier,
    tries: Vec<BitSetTrie>,
    max_glue_iterations_per_pop: Option<usize>,
}

impl<'g> Decomposer<'g> {
    pub fn new(graph: &'g Graph, k: usize, max_glue_iterations_per_pop: Option<usize>) -> Self {
        let n = graph.n();
        Self {
            graph,
            k,
            memory: BitSetTrie::new(n),
            store: ConfigStore::new(),
            frontier: Frontier::new(),
            tries: (0..n).map(|_| BitSetTrie::new(n)).collect(),
            max_glue_iterations_per_pop,
        }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn run(&mut self, cancel: &dyn Cancellation) -> SearchOutcome {
        let n = self.graph.n();

        for v in 0..n {
            let mut s = BitSet::singleton(n, v);
            self.graph.saturate(&mut s);
            if self.offer(s, &[]) {
                return SearchOutcome::Done;
            }
        }

        while !self.frontier.is_empty() {
            if cancel.is_cancelled() {
                return SearchOutcome::Interrupted;
            }

            let s = self.frontier.pop().expect("frontier checked non-empty");
            let border = self.graph.exterior_border(&s);

            for v in border.iter() {
                self.tries[v].insert(s.clone());

                let mut fly = s.clone();
                fly.insert(v);
                self.graph.saturate(&mut fly);
                if self.offer(fly, &[s.clone()]) {
                    return SearchOutcome::Done;
                }

                if self.glue_expand(v, s.clone()) {
                    return SearchOutcome::Done;
                }
            }
        }

        SearchOutcome::Failed
    }

    /// Transitive glueing for a single `v ∈ Δ`: repeatedly fuses pairs of
    /// disjoint configurations whose combined border fits the `k+1` budget,
    /// until no further fusion is possible. Returns `true` once a winning
    /// configuration is offered.
    fn glue_expand(&mut self, v: usize, seed: BitSet) -> bool {
        let n = self.graph.n();
        let mut stack = vec![seed];
        let mut iterations = 0usize;

        while let Some(c) = stack.pop() {
            if let Some(limit) = self.max_glue_iterations_per_pop {
                if iterations >= limit {
                    log::debug!(
                        "glue expansion for v={} stopped early after {} iterations",
                        v,
                        iterations
                    );
                    break;
                }
            }
            iterations += 1;

            let c_border = self.graph.exterior_border(&c);
            let mut mask = BitSet::full(n);
            mask.subtract(&c);
            mask.subtract(&c_border);

            for t in self.tries[v].subsets_of(&mask) {
                let t_border = self.graph.exterior_border(&t);
                let combined_border = c_border.union(&t_border);
                if combined_border.cardinality() > self.k + 1 {
                    continue;
                }

                let u = c.union(&t);
                match self.graph.absorbable(&u) {
                    None => {
                        if self.offer_glued(&c, &t, &u, v) {
                            return true;
                        }
                        self.store.record(u.clone(), vec![c.clone(), t.clone()]);
                        stack.push(u);
                    }
                    Some(a) if a == v => {
                        if self.offer_glued(&c, &t, &u, v) {
                            return true;
                        }
                    }
                    Some(_) => {}
                }
            }
        }
        false
    }

    fn offer_glued(&mut self, c: &BitSet, t: &BitSet, u: &BitSet, v: usize) -> bool {
        let mut u_plus = u.clone();
        u_plus.insert(v);
        self.graph.saturate(&mut u_plus);
        self.offer(u_plus, &[c.clone(), t.clone()])
    }

    /// Applies pruning rules P1-P5 to a freshly saturated configuration.
    /// Returns `true` iff `s` is a winning configuration for this trial.
    fn offer(&mut self, s: BitSet, parents: &[BitSet]) -> bool {
        // P1: already seen.
        if self.memory.contains(&s) {
            return false;
        }

        let border = self.graph.exterior_border(&s);

        // P2: bag-size budget. delta_out is what this step newly cleaned.
        let mut delta_out = s.clone();
        for p in parents {
            delta_out.subtract(p);
        }
        if border.cardinality() + delta_out.cardinality() > self.k + 1 {
            return false;
        }

        // P3: dominated by a memory entry covering the whole bag.
        let mut bag = s.clone();
        bag.union_with(&border);
        if !self.memory.supersets_of(&bag).is_empty() {
            self.memory.insert(s);
            return false;
        }

        // P4: dominated by a larger configuration with a no-worse border.
        let dominated = self
            .memory
            .supersets_of(&s)
            .into_iter()
            .any(|larger| self.graph.exterior_border(&larger).is_subset(&border));
        if dominated {
            self.memory.insert(s);
            return false;
        }

        self.store.record(s.clone(), parents.to_vec());

        let n = self.graph.n();
        if s.cardinality() + self.k + 1 >= n {
            // s already covers the whole graph (only possible when it was
            // seeded or glued there directly, e.g. n == 1): it's already
            // recorded under its own key above, no synthetic wrapper needed.
            if s.cardinality() < n {
                self.store.record(BitSet::full(n), vec![s]);
            }
            return true;
        }

        self.frontier.push(s.clone());
        self.memory.insert(s);
        false
    }
}
