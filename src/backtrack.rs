//! Backtracking partition search.
//!
//! Edges are assigned one at a time to one of two partial graphs. A branch is
//! cut as soon as a side exceeds the Euler bound or stops being planar (both
//! properties are monotone under edge addition), and prefixes already proven
//! infeasible are remembered in a [`MemoTable`] keyed up to side swapping.
//!
//! The search is exhaustive modulo these sound cuts, so it is a complete
//! decision procedure.
//!
//! # Example
//!
//! ```
//! use biplanar::backtrack::BacktrackingPartitioner;
//! use biplanar::generators;
//! use biplanar::planarity::DmpOracle;
//!
//! let k6 = generators::complete(6);
//! let (partition, stats) = BacktrackingPartitioner::new(&k6, 6, &DmpOracle).run();
//! assert!(partition.is_some());
//! assert!(stats.nodes > 0);
//! ```

use std::time::Instant;

use log::{debug, trace};

use crate::bitset::BitString;
use crate::bound::PartitionBound;
use crate::graph::Graph;
use crate::memo::{MemoTable, Outcome};
use crate::partition::Partition;
use crate::planarity::PlanarityOracle;
use crate::stats::SearchStats;
use crate::types::Edge;

/// One of the two sides of a partition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Side {
    First,
    Second,
}

impl Side {
    fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Bit recorded in the assignment prefix.
    fn bit(self) -> bool {
        self == Side::Second
    }
}

pub struct BacktrackingPartitioner<'a, O> {
    edges: &'a [Edge],
    n: usize,
    oracle: &'a O,
    memoize: bool,
    balance: bool,
}

impl<'a, O: PlanarityOracle> BacktrackingPartitioner<'a, O> {
    /// Creates a partitioner over `edges` (already in search order) on `n` vertices.
    pub fn new(edges: &'a [Edge], n: usize, oracle: &'a O) -> Self {
        Self {
            edges,
            n,
            oracle,
            memoize: true,
            balance: true,
        }
    }

    /// Enables or disables the transposition table.
    pub fn with_memo(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    /// Enables or disables trying the smaller side first.
    pub fn with_balance(mut self, balance: bool) -> Self {
        self.balance = balance;
        self
    }

    /// Runs the search. Returns a partition if one exists.
    pub fn run(&self) -> (Option<Partition>, SearchStats) {
        let start = Instant::now();
        let mut search = Search {
            edges: self.edges,
            oracle: self.oracle,
            bound: PartitionBound::for_vertices(self.n),
            memoize: self.memoize,
            balance: self.balance,
            g1: Graph::new(self.n),
            g2: Graph::new(self.n),
            prefix: BitString::with_capacity(self.edges.len()),
            memo: MemoTable::new(),
            stats: SearchStats::new(self.edges.len()),
        };

        debug!(
            "backtracking over {} edges on {} vertices (memo={}, balance={})",
            self.edges.len(),
            self.n,
            self.memoize,
            self.balance
        );
        let found = search.descend(0);

        let mut stats = search.stats;
        stats.memo_hits = search.memo.hits() as u64;
        stats.memo_misses = search.memo.misses() as u64;
        stats.memo_entries = search.memo.len();
        stats.elapsed = start.elapsed();
        debug!(
            "backtracking finished: found={}, nodes={}, memo entries={}",
            found, stats.nodes, stats.memo_entries
        );

        let partition = found.then(|| Partition::from_graphs(&search.g1, &search.g2));
        (partition, stats)
    }
}

/// Mutable state of one search run.
struct Search<'a, O> {
    edges: &'a [Edge],
    oracle: &'a O,
    bound: PartitionBound,
    memoize: bool,
    balance: bool,
    g1: Graph,
    g2: Graph,
    /// Side of each assigned edge, `edges[0..prefix.len()]`
    prefix: BitString,
    memo: MemoTable,
    stats: SearchStats,
}

impl<O: PlanarityOracle> Search<'_, O> {
    fn graph_mut(&mut self, side: Side) -> &mut Graph {
        match side {
            Side::First => &mut self.g1,
            Side::Second => &mut self.g2,
        }
    }

    fn assign(&mut self, e: Edge, side: Side) {
        self.graph_mut(side).add_edge(e);
        self.prefix.push(side.bit());
    }

    fn unassign(&mut self, e: Edge, side: Side) {
        self.prefix.pop();
        let removed = self.graph_mut(side).remove_edge(e);
        debug_assert!(removed);
    }

    fn both_planar(&self) -> bool {
        self.oracle.is_planar(&self.g1) && self.oracle.is_planar(&self.g2)
    }

    /// Explores all completions of the current prefix.
    ///
    /// On success the graphs are left holding the accepted partition; on
    /// failure they are restored to their state at entry.
    fn descend(&mut self, index: usize) -> bool {
        self.stats.nodes += 1;

        if !self.bound.allows(self.g1.num_edges()) || !self.bound.allows(self.g2.num_edges()) {
            self.stats.bound_prunes += 1;
            return false;
        }

        if index == self.edges.len() {
            self.stats.leaves += 1;
            return self.both_planar();
        }

        if self.memoize && self.memo.get(&self.prefix) == Some(Outcome::Infeasible) {
            trace!("memo hit at depth {}: {}", index, self.prefix);
            return false;
        }

        if !self.both_planar() {
            self.stats.planarity_prunes += 1;
            return false;
        }

        let e = self.edges[index];
        let first = if !self.balance || self.g1.num_edges() <= self.g2.num_edges() {
            Side::First
        } else {
            Side::Second
        };

        for side in [first, first.other()] {
            self.assign(e, side);
            if self.descend(index + 1) {
                return true;
            }
            self.unassign(e, side);
        }

        if self.memoize {
            self.memo.insert(&self.prefix, Outcome::Infeasible);
        }
        false
    }
}
