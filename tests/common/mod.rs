//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use biplanar::graph::Graph;
use biplanar::planarity::{Obstruction, Planarity, PlanarityOracle};
use biplanar::types::Edge;

/// Treats a graph as "planar" iff it has no triangle.
///
/// Deciding biplanarity under this oracle is the Ramsey question of colouring
/// edges without a monochromatic triangle, which gives cheap negative instances
/// (any graph containing `K6`).
#[derive(Debug, Default, Copy, Clone)]
pub struct TriangleFree;

impl TriangleFree {
    fn triangle(g: &Graph) -> Option<[Edge; 3]> {
        for e in g.edges() {
            for &w in g.neighbors(e.u()) {
                if w != e.v() && g.has_edge(Edge::new(w, e.v())) {
                    return Some([e, Edge::new(e.u(), w), Edge::new(w, e.v())]);
                }
            }
        }
        None
    }
}

impl PlanarityOracle for TriangleFree {
    fn is_planar(&self, g: &Graph) -> bool {
        Self::triangle(g).is_none()
    }

    fn is_planar_with_witness(&self, g: &Graph) -> Planarity {
        match Self::triangle(g) {
            None => Planarity::Planar,
            Some(t) => Planarity::NonPlanar(Some(Obstruction::new(t.to_vec()))),
        }
    }
}

/// Accepts every graph.
#[derive(Debug, Default, Copy, Clone)]
pub struct AlwaysPlanar;

impl PlanarityOracle for AlwaysPlanar {
    fn is_planar(&self, _g: &Graph) -> bool {
        true
    }
}

pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Erdős–Rényi graph `G(n, p)`; never empty.
pub fn random_graph(rng: &mut ChaCha8Rng, n: usize, p: f64) -> Vec<Edge> {
    loop {
        let mut edges = Vec::new();
        for u in 0..n {
            for v in u + 1..n {
                if rng.random_bool(p) {
                    edges.push(Edge::new(u, v));
                }
            }
        }
        if !edges.is_empty() {
            return edges;
        }
    }
}
