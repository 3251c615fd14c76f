//! Euler bound on the size of each side of a partition.

/// Maximum number of edges a single planar side may hold.
///
/// A simple planar graph on `n >= 3` vertices has at most `3n - 6` edges.
/// Below three vertices there is no useful bound.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PartitionBound {
    max_edges: Option<usize>,
}

impl PartitionBound {
    pub fn for_vertices(n: usize) -> Self {
        let max_edges = if n >= 3 { Some(3 * n - 6) } else { None };
        Self { max_edges }
    }

    /// Per-side limit, or `None` when unbounded.
    pub fn max_edges(self) -> Option<usize> {
        self.max_edges
    }

    /// Per-side limit as a plain number (`usize::MAX` when unbounded).
    pub fn limit(self) -> usize {
        self.max_edges.unwrap_or(usize::MAX)
    }

    /// True if one side with `count` edges respects the bound.
    pub fn allows(self, count: usize) -> bool {
        count <= self.limit()
    }

    /// True if `total` edges cannot possibly be split into two bounded sides.
    ///
    /// This is the fast path: no oracle or SAT call is needed.
    pub fn rejects_total(self, total: usize) -> bool {
        match self.max_edges {
            Some(m) => total > 2 * m,
            None => false,
        }
    }
}
