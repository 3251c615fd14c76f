//! Mutable undirected graph used for partial partitions.
//!
//! The search engines add and remove single edges many times per second, so
//! the representation is plain adjacency lists with an edge counter. Parallel
//! edges are allowed (the input is not deduplicated); removing an edge removes
//! one copy.

use std::fmt;

use crate::types::{Edge, Vertex};

#[derive(Clone, Eq, PartialEq)]
pub struct Graph {
    adj: Vec<Vec<Vertex>>,
    num_edges: usize,
}

impl Graph {
    /// Creates an edgeless graph on `n` vertices.
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
            num_edges: 0,
        }
    }

    pub fn from_edges(n: usize, edges: &[Edge]) -> Self {
        let mut g = Self::new(n);
        for &e in edges {
            g.add_edge(e);
        }
        g
    }

    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn is_empty(&self) -> bool {
        self.num_edges == 0
    }

    pub fn degree(&self, v: Vertex) -> usize {
        self.adj[v].len()
    }

    pub fn neighbors(&self, v: Vertex) -> &[Vertex] {
        &self.adj[v]
    }

    pub fn has_edge(&self, e: Edge) -> bool {
        let (u, v) = e.endpoints();
        let (a, b) = if self.adj[u].len() <= self.adj[v].len() { (u, v) } else { (v, u) };
        self.adj[a].contains(&b)
    }

    pub fn add_edge(&mut self, e: Edge) {
        let (u, v) = e.endpoints();
        self.adj[u].push(v);
        self.adj[v].push(u);
        self.num_edges += 1;
    }

    /// Removes one copy of `e`. Returns false if the edge was not present.
    pub fn remove_edge(&mut self, e: Edge) -> bool {
        let (u, v) = e.endpoints();
        let Some(i) = self.adj[u].iter().position(|&w| w == v) else {
            return false;
        };
        self.adj[u].swap_remove(i);
        let j = self.adj[v]
            .iter()
            .position(|&w| w == u)
            .expect("adjacency lists must be symmetric");
        self.adj[v].swap_remove(j);
        self.num_edges -= 1;
        true
    }

    /// Iterates over all edges (each parallel copy once).
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, ns)| ns.iter().filter(move |&&v| u < v).map(move |&v| Edge::new(u, v)))
    }

    /// Sorted edge list, convenient for comparisons and output.
    pub fn sorted_edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self.edges().collect();
        edges.sort_unstable();
        edges
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.num_vertices())
            .field("edges", &self.num_edges)
            .finish()
    }
}

/// Vertex degrees of an edge list over `n` vertices.
pub fn degrees(edges: &[Edge], n: usize) -> Vec<usize> {
    let mut degree = vec![0; n];
    for e in edges {
        degree[e.u()] += 1;
        degree[e.v()] += 1;
    }
    degree
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_remove() {
        let mut g = Graph::new(4);
        g.add_edge(Edge::new(0, 1));
        g.add_edge(Edge::new(1, 2));
        assert_eq!(g.num_edges(), 2);
        assert_eq!(g.degree(1), 2);
        assert!(g.has_edge(Edge::new(2, 1)));

        assert!(g.remove_edge(Edge::new(1, 0)));
        assert!(!g.has_edge(Edge::new(0, 1)));
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.degree(0), 0);

        assert!(!g.remove_edge(Edge::new(0, 3)));
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn test_parallel_edges() {
        let mut g = Graph::new(2);
        g.add_edge(Edge::new(0, 1));
        g.add_edge(Edge::new(0, 1));
        assert_eq!(g.num_edges(), 2);
        assert_eq!(g.edges().count(), 2);
        assert!(g.remove_edge(Edge::new(0, 1)));
        assert!(g.has_edge(Edge::new(0, 1)));
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn test_edges_roundtrip() {
        let edges = vec![Edge::new(0, 2), Edge::new(1, 3), Edge::new(2, 3)];
        let g = Graph::from_edges(4, &edges);
        assert_eq!(g.sorted_edges(), edges);
    }

    #[test]
    fn test_degrees() {
        let edges = vec![Edge::new(0, 1), Edge::new(0, 2), Edge::new(0, 3)];
        assert_eq!(degrees(&edges, 4), vec![3, 1, 1, 1]);
    }
}
