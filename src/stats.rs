//! Search statistics.
//!
//! Counters are owned by a single search invocation and returned with its
//! verdict, so concurrent searches never share them.

use std::fmt;
use std::time::Duration;

use num_bigint::BigUint;

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SearchStats {
    /// Number of edges in the searched instance.
    pub edges: usize,

    // Backtracking
    pub nodes: u64,
    pub leaves: u64,
    pub bound_prunes: u64,
    pub planarity_prunes: u64,
    pub memo_hits: u64,
    pub memo_misses: u64,
    pub memo_entries: usize,

    // SAT / CEGAR
    pub iterations: u64,
    pub learned_clauses: u64,
    pub oracle_calls: u64,
    pub sat_vars: usize,
    pub sat_clauses: usize,

    pub elapsed: Duration,
}

impl SearchStats {
    pub fn new(edges: usize) -> Self {
        Self {
            edges,
            ..Default::default()
        }
    }

    /// Number of distinct edge 2-partitions up to swapping the sides: `2^(m-1)`.
    pub fn search_space(&self) -> BigUint {
        if self.edges == 0 {
            return BigUint::from(1u32);
        }
        BigUint::from(1u32) << (self.edges - 1)
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "edges:            {}", self.edges)?;
        writeln!(f, "search space:     {}", self.search_space())?;
        if self.nodes > 0 {
            writeln!(f, "nodes:            {}", self.nodes)?;
            writeln!(f, "leaves:           {}", self.leaves)?;
            writeln!(f, "bound prunes:     {}", self.bound_prunes)?;
            writeln!(f, "planarity prunes: {}", self.planarity_prunes)?;
            writeln!(f, "memo hits/misses: {}/{}", self.memo_hits, self.memo_misses)?;
            writeln!(f, "memo entries:     {}", self.memo_entries)?;
        }
        if self.iterations > 0 {
            writeln!(f, "iterations:       {}", self.iterations)?;
            writeln!(f, "learned clauses:  {}", self.learned_clauses)?;
            writeln!(f, "oracle calls:     {}", self.oracle_calls)?;
            writeln!(f, "sat vars/clauses: {}/{}", self.sat_vars, self.sat_clauses)?;
        }
        write!(f, "elapsed:          {:.3?}", self.elapsed)
    }
}
