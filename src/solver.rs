//! Top-level biplanarity check.
//!
//! [`check_biplanarity`] validates the input, applies the counting fast path,
//! orders the edges and hands them to the configured strategy.
//!
//! ```
//! use biplanar::generators;
//! use biplanar::planarity::DmpOracle;
//! use biplanar::solver::{check_edges, SearchConfig, Strategy};
//!
//! let k7 = generators::complete(7);
//! let config = SearchConfig::default().with_strategy(Strategy::SatCegar);
//! let (verdict, _stats) = check_edges(&k7, 7, &config, &DmpOracle).unwrap();
//! assert!(verdict.is_biplanar());
//! ```

use std::fmt;
use std::time::Instant;

use log::{debug, info};

use crate::backtrack::BacktrackingPartitioner;
use crate::bound::PartitionBound;
use crate::cegar::SatCegarPartitioner;
use crate::error::{validate_edges, Error, Result};
use crate::ordering::{order_edges, DifficultyScore};
use crate::partition::Partition;
use crate::planarity::PlanarityOracle;
use crate::stats::SearchStats;
use crate::types::{Edge, Vertex};

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Strategy {
    /// Exhaustive backtracking with pruning and memoization.
    Backtracking,
    /// SAT solving with obstruction-driven refinement.
    #[default]
    SatCegar,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Backtracking => write!(f, "backtracking"),
            Strategy::SatCegar => write!(f, "sat"),
        }
    }
}

/// Search options.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SearchConfig {
    pub strategy: Strategy,
    pub score: DifficultyScore,
    /// Backtracking: remember infeasible prefixes.
    pub memoize: bool,
    /// Backtracking: assign each edge to the smaller side first.
    pub balance: bool,
    /// SAT: query the oracle on both sides concurrently.
    pub parallel_oracle: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            score: DifficultyScore::default(),
            memoize: true,
            balance: true,
            parallel_oracle: true,
        }
    }
}

impl SearchConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_score(mut self, score: DifficultyScore) -> Self {
        self.score = score;
        self
    }

    pub fn with_memo(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    pub fn with_balance(mut self, balance: bool) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_parallel_oracle(mut self, parallel: bool) -> Self {
        self.parallel_oracle = parallel;
        self
    }
}

/// Why a graph is not biplanar.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Reason {
    /// More edges than two planar sides can hold; decided without searching.
    ExceedsBound { edges: usize, bound: usize },
    /// The search space was exhausted.
    Exhausted,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Verdict {
    Biplanar(Partition),
    NotBiplanar(Reason),
}

impl Verdict {
    pub fn is_biplanar(&self) -> bool {
        matches!(self, Verdict::Biplanar(_))
    }

    pub fn partition(&self) -> Option<&Partition> {
        match self {
            Verdict::Biplanar(p) => Some(p),
            Verdict::NotBiplanar(_) => None,
        }
    }

    pub fn into_partition(self) -> Option<Partition> {
        match self {
            Verdict::Biplanar(p) => Some(p),
            Verdict::NotBiplanar(_) => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Biplanar(_) => write!(f, "biplanar"),
            Verdict::NotBiplanar(Reason::ExceedsBound { edges, bound }) => {
                write!(f, "not biplanar ({} edges exceed 2 x {})", edges, bound)
            }
            Verdict::NotBiplanar(Reason::Exhausted) => write!(f, "not biplanar"),
        }
    }
}

/// Decides whether the graph given by endpoint pairs on `n` vertices is biplanar.
///
/// Malformed input (no edges, endpoints outside `[0, n)`, self-loops) is
/// rejected before any search starts.
pub fn check_biplanarity<O: PlanarityOracle>(
    pairs: &[(Vertex, Vertex)],
    n: usize,
    config: &SearchConfig,
    oracle: &O,
) -> Result<(Verdict, SearchStats)> {
    let edges = validate_edges(pairs, n)?;
    check_edges(&edges, n, config, oracle)
}

/// Like [`check_biplanarity`], for edges that are already constructed.
pub fn check_edges<O: PlanarityOracle>(
    edges: &[Edge],
    n: usize,
    config: &SearchConfig,
    oracle: &O,
) -> Result<(Verdict, SearchStats)> {
    if edges.is_empty() {
        return Err(Error::EmptyGraph);
    }
    if let Some(e) = edges.iter().find(|e| e.v() >= n) {
        return Err(Error::VertexOutOfRange { edge: e.endpoints(), n });
    }

    let bound = PartitionBound::for_vertices(n);
    if bound.rejects_total(edges.len()) {
        info!(
            "{} edges exceed twice the per-side bound {}: not biplanar",
            edges.len(),
            bound.limit()
        );
        let stats = SearchStats::new(edges.len());
        let reason = Reason::ExceedsBound {
            edges: edges.len(),
            bound: bound.limit(),
        };
        return Ok((Verdict::NotBiplanar(reason), stats));
    }

    let start = Instant::now();
    let ordered = order_edges(edges, n, config.score);
    debug!("ordered {} edges by {:?} degree score", ordered.len(), config.score);

    info!("checking {} edges on {} vertices with {}", ordered.len(), n, config.strategy);
    let (partition, mut stats) = match config.strategy {
        Strategy::Backtracking => BacktrackingPartitioner::new(&ordered, n, oracle)
            .with_memo(config.memoize)
            .with_balance(config.balance)
            .run(),
        Strategy::SatCegar => SatCegarPartitioner::new(&ordered, n, oracle)
            .with_parallel_oracle(config.parallel_oracle)
            .run()?,
    };
    stats.elapsed = start.elapsed();

    let verdict = match partition {
        Some(p) => Verdict::Biplanar(p),
        None => Verdict::NotBiplanar(Reason::Exhausted),
    };
    info!("{} ({:.3?})", verdict, stats.elapsed);
    Ok((verdict, stats))
}
