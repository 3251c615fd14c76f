//! SAT-based partition search with counterexample-guided refinement.
//!
//! Each edge `i` gets a variable `x_i`: false puts the edge on the first side,
//! true on the second. The first edge is fixed to the first side, and both
//! sides are bounded by the Euler limit through [`at_most_k`]. Planarity is
//! not encoded up front. Instead the loop solves, splits the graph according to
//! the model, and asks the oracle about each side. For every non-planar side
//! the obstruction's edges are forbidden from being monochromatic again, and
//! the formula is solved once more. An unsatisfiable formula means the graph
//! is not biplanar.

use std::collections::HashMap;
use std::time::Instant;

use log::{debug, info, trace};

use crate::bound::PartitionBound;
use crate::cardinality::at_most_k;
use crate::error::Result;
use crate::graph::Graph;
use crate::partition::Partition;
use crate::planarity::{Planarity, PlanarityOracle};
use crate::sat::{ClauseSink, Model, SatEngine, SatResult, VarisatEngine};
use crate::stats::SearchStats;
use crate::types::{Edge, Lit, Var};

pub struct SatCegarPartitioner<'a, O, E = VarisatEngine> {
    edges: &'a [Edge],
    n: usize,
    oracle: &'a O,
    engine: E,
    parallel_oracle: bool,
}

impl<'a, O: PlanarityOracle> SatCegarPartitioner<'a, O> {
    /// Creates a partitioner backed by [`VarisatEngine`].
    pub fn new(edges: &'a [Edge], n: usize, oracle: &'a O) -> Self {
        Self::with_engine(edges, n, oracle, VarisatEngine::new())
    }
}

impl<'a, O: PlanarityOracle, E: SatEngine> SatCegarPartitioner<'a, O, E> {
    /// Creates a partitioner on a caller-supplied (fresh) SAT engine.
    pub fn with_engine(edges: &'a [Edge], n: usize, oracle: &'a O, engine: E) -> Self {
        Self {
            edges,
            n,
            oracle,
            engine,
            parallel_oracle: true,
        }
    }

    /// Query the oracle on both sides concurrently (default) or one after the other.
    pub fn with_parallel_oracle(mut self, parallel: bool) -> Self {
        self.parallel_oracle = parallel;
        self
    }

    /// Runs the refinement loop to completion.
    ///
    /// Returns `Ok((None, _))` when the graph is not biplanar. Errors come only
    /// from the SAT engine.
    pub fn run(mut self) -> Result<(Option<Partition>, SearchStats)> {
        let start = Instant::now();
        let mut stats = SearchStats::new(self.edges.len());

        if self.edges.is_empty() {
            stats.elapsed = start.elapsed();
            return Ok((Some(Partition::new(Vec::new(), Vec::new())), stats));
        }

        let vars = self.encode_base();
        debug!(
            "CEGAR over {} edges on {} vertices: {} vars, {} base clauses",
            self.edges.len(),
            self.n,
            self.engine.num_vars(),
            self.engine.num_clauses()
        );

        let result = loop {
            stats.iterations += 1;
            let model = match self.engine.solve()? {
                SatResult::Unsat => {
                    debug!("formula unsatisfiable after {} iterations", stats.iterations);
                    break None;
                }
                SatResult::Sat(model) => model,
            };

            let split = Split::from_model(self.edges, &vars, &model);
            let (g0, g1) = (split.graph(self.n, 0), split.graph(self.n, 1));
            let verdicts = self.query(&g0, &g1);
            stats.oracle_calls += 2;

            if verdicts.iter().all(Planarity::is_planar) {
                debug!("both sides planar after {} iterations", stats.iterations);
                break Some(split.into_partition());
            }

            for (side, verdict) in verdicts.into_iter().enumerate() {
                let Planarity::NonPlanar(witness) = verdict else {
                    continue;
                };
                let mut indices = match witness {
                    Some(obstruction) => split.indices_of(side, obstruction.edges()),
                    None => Vec::new(),
                };
                // An empty clause pair would make the formula UNSAT.
                if indices.is_empty() {
                    indices = split.sides[side].clone();
                }
                trace!(
                    "iteration {}: side {} obstructed by {} edges",
                    stats.iterations,
                    side + 1,
                    indices.len()
                );
                self.learn(&vars, &indices);
                stats.learned_clauses += 2;
            }
        };

        stats.sat_vars = self.engine.num_vars();
        stats.sat_clauses = self.engine.num_clauses();
        stats.elapsed = start.elapsed();
        info!(
            "CEGAR finished: biplanar={}, iterations={}, learned clauses={}",
            result.is_some(),
            stats.iterations,
            stats.learned_clauses
        );
        Ok((result, stats))
    }

    /// Allocates edge variables and adds the symmetry and size constraints.
    fn encode_base(&mut self) -> Vec<Var> {
        let vars: Vec<Var> = (0..self.edges.len()).map(|_| self.engine.new_var()).collect();
        self.engine.add_clause(&[vars[0].neg()]);

        if let Some(k) = PartitionBound::for_vertices(self.n).max_edges() {
            let second: Vec<Lit> = vars.iter().map(|v| v.pos()).collect();
            let first: Vec<Lit> = vars.iter().map(|v| v.neg()).collect();
            at_most_k(&mut self.engine, &second, k);
            at_most_k(&mut self.engine, &first, k);
        }
        vars
    }

    fn query(&self, g0: &Graph, g1: &Graph) -> [Planarity; 2] {
        if !self.parallel_oracle {
            return [self.oracle.is_planar_with_witness(g0), self.oracle.is_planar_with_witness(g1)];
        }
        let oracle = self.oracle;
        std::thread::scope(|s| {
            let other = s.spawn(move || oracle.is_planar_with_witness(g1));
            let first = oracle.is_planar_with_witness(g0);
            let second = match other.join() {
                Ok(p) => p,
                Err(panic) => std::panic::resume_unwind(panic),
            };
            [first, second]
        })
    }

    /// Forbids the given edges from all landing on one side together.
    fn learn(&mut self, vars: &[Var], indices: &[usize]) {
        let positive: Vec<Lit> = indices.iter().map(|&i| vars[i].pos()).collect();
        let negative: Vec<Lit> = indices.iter().map(|&i| vars[i].neg()).collect();
        self.engine.add_clause(&positive);
        self.engine.add_clause(&negative);
    }
}

/// Edge indices on each side of a candidate assignment.
struct Split<'a> {
    edges: &'a [Edge],
    sides: [Vec<usize>; 2],
}

impl<'a> Split<'a> {
    fn from_model(edges: &'a [Edge], vars: &[Var], model: &Model) -> Self {
        let mut sides = [Vec::new(), Vec::new()];
        for (i, &var) in vars.iter().enumerate() {
            sides[model.value(var) as usize].push(i);
        }
        Self { edges, sides }
    }

    fn graph(&self, n: usize, side: usize) -> Graph {
        let mut g = Graph::new(n);
        for &i in &self.sides[side] {
            g.add_edge(self.edges[i]);
        }
        g
    }

    /// Maps obstruction edges back to edge indices on `side`.
    ///
    /// With parallel input edges, one copy per obstruction edge is enough.
    fn indices_of(&self, side: usize, obstruction: &[Edge]) -> Vec<usize> {
        let mut index: HashMap<Edge, usize> = HashMap::new();
        for &i in &self.sides[side] {
            index.entry(self.edges[i]).or_insert(i);
        }
        obstruction.iter().filter_map(|e| index.get(e).copied()).collect()
    }

    fn into_partition(self) -> Partition {
        let [first, second] = self.sides;
        let edges = self.edges;
        let collect = |side: Vec<usize>| -> Vec<Edge> { side.into_iter().map(|i| edges[i]).collect() };
        Partition::new(collect(first), collect(second))
    }
}
