//! Dense bit-set over a fixed universe `[0, n)`.
//!
//! Every [`BitSet`] produced by this crate is tied to a single universe size;
//! mixing bit-sets built against different universes is a logic error and
//! will panic rather than silently truncate or pad.

use bit_vec::BitVec;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone)]
pub struct BitSet {
    bits: BitVec,
}

impl BitSet {
    pub fn empty(universe: usize) -> Self {
        Self {
            bits: BitVec::from_elem(universe, false),
        }
    }

    pub fn singleton(universe: usize, v: usize) -> Self {
        let mut s = Self::empty(universe);
        s.insert(v);
        s
    }

    pub fn full(universe: usize) -> Self {
        Self {
            bits: BitVec::from_elem(universe, true),
        }
    }

    pub fn from_indices(universe: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut s = Self::empty(universe);
        for v in indices {
            s.insert(v);
        }
        s
    }

    pub fn universe(&self) -> usize {
        self.bits.len()
    }

    pub fn contains(&self, v: usize) -> bool {
        self.bits.get(v).unwrap_or(false)
    }

    pub fn insert(&mut self, v: usize) {
        self.bits.set(v, true);
    }

    pub fn remove(&mut self, v: usize) {
        self.bits.set(v, false);
    }

    pub fn is_empty(&self) -> bool {
        self.bits.none()
    }

    /// Number of set bits, computed a word at a time.
    pub fn cardinality(&self) -> usize {
        self.bits.blocks().map(|b| b.count_ones() as usize).sum()
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        debug_assert_eq!(self.universe(), other.universe());
        self.bits
            .blocks()
            .zip(other.bits.blocks())
            .all(|(a, b)| a & !b == 0)
    }

    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    pub fn is_disjoint(&self, other: &Self) -> bool {
        debug_assert_eq!(self.universe(), other.universe());
        self.bits
            .blocks()
            .zip(other.bits.blocks())
            .all(|(a, b)| a & b == 0)
    }

    pub fn union(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.union_with(other);
        out
    }

    pub fn union_with(&mut self, other: &Self) {
        debug_assert_eq!(self.universe(), other.universe());
        self.bits.or(&other.bits);
    }

    pub fn intersection(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.intersect_with(other);
        out
    }

    pub fn intersect_with(&mut self, other: &Self) {
        debug_assert_eq!(self.universe(), other.universe());
        self.bits.and(&other.bits);
    }

    /// `self \ other`.
    pub fn difference(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.subtract(other);
        out
    }

    pub fn subtract(&mut self, other: &Self) {
        debug_assert_eq!(self.universe(), other.universe());
        self.bits.difference(&other.bits);
    }

    /// Ascending iterator over set bit indices. Built from the underlying
    /// storage words so empty regions are skipped in `O(words)` rather than
    /// `O(bits)`.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        const BITS_PER_BLOCK: usize = 32;
        self.bits
            .blocks()
            .enumerate()
            .flat_map(move |(block_idx, word)| {
                let base = block_idx * BITS_PER_BLOCK;
                (0..BITS_PER_BLOCK)
                    .filter(move |bit| word & (1u32 << bit) != 0)
                    .map(move |bit| base + bit)
            })
            .take_while(move |&i| i < self.universe())
    }

    pub fn min(&self) -> Option<usize> {
        self.iter().next()
    }
}

impl PartialEq for BitSet {
    fn eq(&self, other: &Self) -> bool {
        self.universe() == other.universe() && self.bits.blocks().eq(other.bits.blocks())
    }
}

impl Eq for BitSet {}

impl Hash for BitSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.universe().hash(state);
        for block in self.bits.blocks() {
            block.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut s = BitSet::empty(10);
        s.insert(3);
        s.insert(7);
        assert!(s.contains(3));
        assert!(s.contains(7));
        assert!(!s.contains(4));
        assert_eq!(s.cardinality(), 2);
    }

    #[test]
    fn iter_is_ascending() {
        let s = BitSet::from_indices(40, [1, 33, 5, 17]);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 5, 17, 33]);
    }

    #[test]
    fn subset_superset() {
        let a = BitSet::from_indices(8, [1, 2]);
        let b = BitSet::from_indices(8, [1, 2, 3]);
        assert!(a.is_subset(&b));
        assert!(b.is_superset(&a));
        assert!(!b.is_subset(&a));
    }

    #[test]
    fn union_intersection_difference() {
        let a = BitSet::from_indices(8, [1, 2, 3]);
        let b = BitSet::from_indices(8, [2, 3, 4]);
        assert_eq!(a.union(&b), BitSet::from_indices(8, [1, 2, 3, 4]));
        assert_eq!(a.intersection(&b), BitSet::from_indices(8, [2, 3]));
        assert_eq!(a.difference(&b), BitSet::from_indices(8, [1]));
    }

    #[test]
    fn equality_and_hash_agree() {
        use std::collections::HashSet;
        let a = BitSet::from_indices(16, [1, 2, 9]);
        let b = BitSet::from_indices(16, [9, 2, 1]);
        assert_eq!(a, b);
        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }
}
