//! # biplanar: Graph Thickness Two in Rust
//!
//! **`biplanar`** decides whether a graph is *biplanar*: whether its edges can be split into two
//! sets, each forming a planar graph on the same vertices. Equivalently, whether the graph has
//! thickness at most two. Deciding this is NP-complete, so the library offers two exact search
//! strategies built around an external planarity test.
//!
//! ## How it works
//!
//! A planar simple graph on `n >= 3` vertices has at most `3n - 6` edges. Any graph with more than
//! twice that many edges is rejected immediately, without a single planarity test. Otherwise the
//! edges are sorted so that those touching high-degree vertices come first, and one of two strategies
//! runs:
//!
//! - **Backtracking** ([`backtrack`]): assign edges to sides one by one, prune as soon as a side
//!   exceeds the bound or stops being planar, and remember infeasible prefixes up to side swapping.
//! - **SAT + CEGAR** ([`cegar`]): encode the side of each edge as a boolean variable with cardinality
//!   constraints ([`cardinality`]), then repeatedly solve, test both sides, and forbid every
//!   obstruction found from being monochromatic again.
//!
//! Both are complete: a `NotBiplanar` verdict means no partition exists.
//!
//! ## Basic Usage
//!
//! ```rust
//! use biplanar::planarity::DmpOracle;
//! use biplanar::solver::{check_biplanarity, SearchConfig, Strategy};
//!
//! // K5 plus a pendant vertex.
//! let mut pairs = Vec::new();
//! for u in 0..5 {
//!     for v in u + 1..5 {
//!         pairs.push((u, v));
//!     }
//! }
//! pairs.push((4, 5));
//!
//! let config = SearchConfig::default().with_strategy(Strategy::Backtracking);
//! let (verdict, stats) = check_biplanarity(&pairs, 6, &config, &DmpOracle).unwrap();
//!
//! let partition = verdict.partition().expect("K5 is biplanar");
//! assert_eq!(partition.len(), 11);
//! println!("{}", stats);
//! ```
//!
//! ## Core Components
//!
//! - **[`solver`]**: The entry point. [`check_biplanarity`][crate::solver::check_biplanarity], the
//!   [`SearchConfig`][crate::solver::SearchConfig] and the [`Verdict`][crate::solver::Verdict].
//! - **[`planarity`]**: The [`PlanarityOracle`][crate::planarity::PlanarityOracle] interface and a
//!   built-in implementation.
//! - **[`sat`]**: The incremental SAT engine interface, backed by `varisat`.
//! - **[`io`]**: Edge list and partition files.

pub mod backtrack;
pub mod bitset;
pub mod bound;
pub mod cardinality;
pub mod cegar;
pub mod error;
pub mod generators;
pub mod graph;
pub mod io;
pub mod memo;
pub mod ordering;
pub mod partition;
pub mod planarity;
pub mod sat;
pub mod solver;
pub mod stats;
pub mod types;
