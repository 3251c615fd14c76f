//! Graph constructors used by tests, benchmarks and the command line.
//!
//! All generators return plain edge lists over `0..n`.

use std::collections::BTreeSet;

use crate::types::{Edge, Vertex};

/// Path `0 - 1 - ... - (n-1)`.
pub fn path(n: usize) -> Vec<Edge> {
    (1..n).map(|i| Edge::new(i - 1, i)).collect()
}

/// Cycle on `n` vertices. Degenerates to a path for `n < 3`.
pub fn cycle(n: usize) -> Vec<Edge> {
    let mut edges = path(n);
    if n >= 3 {
        edges.push(Edge::new(n - 1, 0));
    }
    edges
}

/// Complete graph `K_n`, edges in lexicographic order.
pub fn complete(n: usize) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for u in 0..n {
        for v in u + 1..n {
            edges.push(Edge::new(u, v));
        }
    }
    edges
}

/// Complete bipartite graph `K_{a,b}` on parts `0..a` and `a..a+b`.
pub fn complete_bipartite(a: usize, b: usize) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(a * b);
    for u in 0..a {
        for v in a..a + b {
            edges.push(Edge::new(u, v));
        }
    }
    edges
}

/// `k`-wheel on `n` vertices: a cycle on the first `n - k` vertices, each of the
/// last `k` vertices joined to every cycle vertex.
pub fn wheel(n: usize, k: usize) -> Vec<Edge> {
    assert!(k <= n, "wheel needs k <= n");
    let rim = n - k;
    let mut edges = cycle(rim);
    for hub in rim..n {
        for v in 0..rim {
            edges.push(Edge::new(v, hub));
        }
    }
    edges
}

/// The Petersen graph.
pub fn petersen() -> Vec<Edge> {
    let mut edges = cycle(5);
    for i in 0..5 {
        edges.push(Edge::new(i, i + 5));
        edges.push(Edge::new(5 + i, 5 + (i + 2) % 5));
    }
    edges
}

/// Strong product `G1 ⊠ G2`.
///
/// Vertex `(a, b)` is numbered `a * n2 + b`. Two distinct vertices are adjacent
/// iff each coordinate is equal or adjacent. Parallel input edges are ignored.
pub fn strong_product(g1: &[Edge], n1: usize, g2: &[Edge], n2: usize) -> Vec<Edge> {
    let matrix = |edges: &[Edge], n: usize| {
        let mut adj = vec![vec![false; n]; n];
        for e in edges {
            adj[e.u()][e.v()] = true;
            adj[e.v()][e.u()] = true;
        }
        for (i, row) in adj.iter_mut().enumerate() {
            row[i] = true;
        }
        adj
    };
    let adj1 = matrix(g1, n1);
    let adj2 = matrix(g2, n2);

    let mut edges = BTreeSet::new();
    for a in 0..n1 {
        for b in 0..n2 {
            for c in 0..n1 {
                for d in 0..n2 {
                    let (x, y) = (a * n2 + b, c * n2 + d);
                    if x < y && adj1[a][c] && adj2[b][d] {
                        edges.insert(Edge::new(x, y));
                    }
                }
            }
        }
    }
    edges.into_iter().collect()
}

/// 2-blow-up: every vertex `v` gets a twin `v + n`, and each edge `uv` becomes
/// the four edges between `{u, u+n}` and `{v, v+n}`.
pub fn blowup(edges: &[Edge], n: usize) -> Vec<Edge> {
    let mut result = Vec::with_capacity(4 * edges.len());
    for e in edges {
        let (u, v) = e.endpoints();
        result.push(Edge::new(u, v));
        result.push(Edge::new(u + n, v + n));
        result.push(Edge::new(u + n, v));
        result.push(Edge::new(u, v + n));
    }
    result
}

/// Drops every edge incident to `vertex`. Vertex numbering is unchanged.
pub fn remove_vertex(edges: &[Edge], vertex: Vertex) -> Vec<Edge> {
    edges.iter().copied().filter(|e| e.u() != vertex && e.v() != vertex).collect()
}

/// Renames vertex `v` to `perm[v]`.
pub fn relabel(edges: &[Edge], perm: &[Vertex]) -> Vec<Edge> {
    edges.iter().map(|e| e.map(perm)).collect()
}
