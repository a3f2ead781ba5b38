//! Maps each offered configuration to the predecessor configurations it was
//! glued from. Read during reconstruction; written only by the decomposer's
//! `offer` and glue-expansion steps, and never overwritten once a
//! configuration has an entry.

use crate::bitset::BitSet;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct ConfigStore {
    glue: HashMap<BitSet, Vec<BitSet>>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.glue.clear();
    }

    /// Records `parents` for `s` unless `s` already has an entry.
    pub fn record(&mut self, s: BitSet, parents: Vec<BitSet>) {
        self.glue.entry(s).or_insert(parents);
    }

    pub fn parents(&self, s: &BitSet) -> Option<&[BitSet]> {
        self.glue.get(s).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_does_not_overwrite() {
        let mut store = ConfigStore::new();
        let s = BitSet::from_indices(4, [0]);
        store.record(s.clone(), vec![]);
        store.record(s.clone(), vec![BitSet::from_indices(4, [1])]);
        assert_eq!(store.parents(&s), Some(&[][..]));
    }
}
