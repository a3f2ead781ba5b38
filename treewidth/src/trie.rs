//! Trie over ascending bit-index sequences, supporting subset/superset
//! queries against a stored collection of [`BitSet`]s.
//!
//! Each node's children are keyed by vertex index; following a root-to-node
//! path in increasing key order reconstructs the sorted sequence of that
//! node's ancestors. Terminal nodes additionally hold the original
//! [`BitSet`] so callers get it back without reconstructing from the path.

use crate::bitset::BitSet;
use std::cmp::Ordering;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct Node {
    // BTreeMap, not HashMap: traversal order must be ascending by vertex
    // index so that runs of the decomposer are reproducible.
    children: BTreeMap<usize, Node>,
    terminal: Option<BitSet>,
}

#[derive(Debug)]
pub struct BitSetTrie {
    root: Node,
    universe: usize,
}

impl BitSetTrie {
    pub fn new(universe: usize) -> Self {
        Self {
            root: Node::default(),
            universe,
        }
    }

    pub fn clear(&mut self) {
        self.root = Node::default();
    }

    pub fn insert(&mut self, s: BitSet) {
        debug_assert_eq!(s.universe(), self.universe);
        let mut node = &mut self.root;
        for v in s.iter() {
            node = node.children.entry(v).or_default();
        }
        node.terminal = Some(s);
    }

    pub fn contains(&self, s: &BitSet) -> bool {
        let mut node = &self.root;
        for v in s.iter() {
            match node.children.get(&v) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.terminal.is_some()
    }

    /// Every stored `s` with `s ⊆ mask`.
    pub fn subsets_of(&self, mask: &BitSet) -> Vec<BitSet> {
        let mut out = Vec::new();
        Self::collect_subsets(&self.root, mask, &mut out);
        out
    }

    fn collect_subsets(node: &Node, mask: &BitSet, out: &mut Vec<BitSet>) {
        if let Some(s) = &node.terminal {
            out.push(s.clone());
        }
        for (&label, child) in &node.children {
            if mask.contains(label) {
                Self::collect_subsets(child, mask, out);
            }
        }
    }

    /// Every stored `s` with `s ⊇ mask`.
    pub fn supersets_of(&self, mask: &BitSet) -> Vec<BitSet> {
        let required: Vec<usize> = mask.iter().collect();
        let mut out = Vec::new();
        Self::collect_supersets(&self.root, &required, &mut out);
        out
    }

    fn collect_supersets(node: &Node, remaining: &[usize], out: &mut Vec<BitSet>) {
        let Some((&required, rest)) = remaining.split_first() else {
            Self::collect_all(node, out);
            return;
        };
        for (&label, child) in &node.children {
            match label.cmp(&required) {
                Ordering::Equal => Self::collect_supersets(child, rest, out),
                Ordering::Less => Self::collect_supersets(child, remaining, out),
                Ordering::Greater => {}
            }
        }
    }

    fn collect_all(node: &Node, out: &mut Vec<BitSet>) {
        if let Some(s) = &node.terminal {
            out.push(s.clone());
        }
        for child in node.children.values() {
            Self::collect_all(child, out);
        }
    }
}
