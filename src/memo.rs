//! Transposition table for the backtracking search.
//!
//! A partial state is identified by the assignment of its edge prefix: bit `i`
//! tells which side edge `i` went to. Swapping the two side labels yields an
//! equivalent state, so keys are canonicalized to the lexicographically smaller
//! of the prefix and its complement. The table therefore never holds a key and
//! its complement as distinct entries.

use std::collections::HashMap;

use crate::bitset::BitString;

/// Label-symmetric key of an assignment prefix.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct CanonicalKey(BitString);

impl CanonicalKey {
    pub fn new(prefix: &BitString) -> Self {
        let complement = prefix.complement();
        if complement < *prefix {
            CanonicalKey(complement)
        } else {
            CanonicalKey(prefix.clone())
        }
    }

    pub fn bits(&self) -> &BitString {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Known outcome for the suffix search below a state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    Infeasible,
}

/// Memo table keyed by [`CanonicalKey`].
///
/// Owned by a single search run; never invalidated while it lasts.
#[derive(Debug, Default)]
pub struct MemoTable {
    map: HashMap<CanonicalKey, Outcome>,
    hits: usize,
    misses: usize,
}

impl MemoTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Looks up the canonical form of `prefix`.
    #[inline]
    pub fn get(&mut self, prefix: &BitString) -> Option<Outcome> {
        match self.map.get(&CanonicalKey::new(prefix)) {
            Some(&outcome) => {
                self.hits += 1;
                Some(outcome)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Records the outcome for the canonical form of `prefix`.
    #[inline]
    pub fn insert(&mut self, prefix: &BitString, outcome: Outcome) {
        self.map.insert(CanonicalKey::new(prefix), outcome);
    }
}
