//! Edge ordering heuristic.
//!
//! Edges touching high-degree vertices tend to trigger planarity violations
//! early, so placing them first prunes the backtracking tree sooner.

use std::cmp::Reverse;

use crate::graph::degrees;
use crate::types::Edge;

/// How the two endpoint degrees are combined into a difficulty score.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum DifficultyScore {
    /// `deg(u) + deg(v)`
    #[default]
    Sum,
    /// `max(deg(u), deg(v))`
    Max,
}

impl DifficultyScore {
    fn score(self, e: Edge, degree: &[usize]) -> usize {
        let (du, dv) = (degree[e.u()], degree[e.v()]);
        match self {
            DifficultyScore::Sum => du + dv,
            DifficultyScore::Max => du.max(dv),
        }
    }
}

/// Returns `edges` sorted by descending difficulty.
///
/// Degrees are taken in the full graph. The sort is stable, so ties keep their
/// original relative order.
pub fn order_edges(edges: &[Edge], n: usize, score: DifficultyScore) -> Vec<Edge> {
    let degree = degrees(edges, n);
    let mut ordered = edges.to_vec();
    ordered.sort_by_key(|&e| Reverse(score.score(e, &degree)));
    ordered
}
