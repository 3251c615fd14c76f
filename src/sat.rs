//! SAT engine interface.
//!
//! The CEGAR partitioner only needs an incremental clause database: fresh
//! variables, clause addition, and repeated `solve` calls. Clauses are never
//! retracted. [`ClauseSink`] covers the first two and is all the encoders need;
//! [`SatEngine`] adds solving.
//!
//! Two implementations are provided:
//!
//! - [`VarisatEngine`]: the incremental CDCL solver from the `varisat` crate.
//! - [`Cnf`]: a plain clause collector, useful for inspecting encodings and
//!   for exporting DIMACS.

use std::fmt::Write as FmtWrite;

use crate::error::{Error, Result};
use crate::types::{Lit, Var};

pub trait ClauseSink {
    /// Allocates a fresh variable.
    fn new_var(&mut self) -> Var;

    /// Adds a disjunction of literals.
    fn add_clause(&mut self, clause: &[Lit]);

    fn num_vars(&self) -> usize;

    fn num_clauses(&self) -> usize;
}

/// A satisfying assignment, indexed by [`Var::index`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Model(Vec<bool>);

impl Model {
    pub fn new(values: Vec<bool>) -> Self {
        Self(values)
    }

    pub fn value(&self, var: Var) -> bool {
        self.0.get(var.index()).copied().unwrap_or(false)
    }

    pub fn lit_value(&self, lit: Lit) -> bool {
        self.value(lit.var()) == lit.is_positive()
    }

    pub fn values(&self) -> &[bool] {
        &self.0
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SatResult {
    Sat(Model),
    Unsat,
}

pub trait SatEngine: ClauseSink {
    /// Solves the current clause set.
    ///
    /// `Unsat` is a regular outcome; `Err` means the engine itself failed.
    fn solve(&mut self) -> Result<SatResult>;
}

/// In-memory CNF formula.
#[derive(Debug, Clone, Default)]
pub struct Cnf {
    num_vars: usize,
    clauses: Vec<Vec<Lit>>,
}

impl Cnf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clauses(&self) -> &[Vec<Lit>] {
        &self.clauses
    }

    /// Evaluates the formula under a full assignment indexed by [`Var::index`].
    pub fn eval(&self, assignment: &[bool]) -> bool {
        self.clauses.iter().all(|c| c.iter().any(|lit| lit.eval(assignment)))
    }

    /// Renders the formula in DIMACS CNF format.
    pub fn to_dimacs(&self) -> String {
        let mut output = String::new();
        writeln!(output, "p cnf {} {}", self.num_vars, self.clauses.len()).unwrap();
        for clause in &self.clauses {
            for lit in clause {
                write!(output, "{} ", lit.to_dimacs()).unwrap();
            }
            writeln!(output, "0").unwrap();
        }
        output
    }
}

impl ClauseSink for Cnf {
    fn new_var(&mut self) -> Var {
        self.num_vars += 1;
        Var::new(self.num_vars as u32)
    }

    fn add_clause(&mut self, clause: &[Lit]) {
        self.clauses.push(clause.to_vec());
    }

    fn num_vars(&self) -> usize {
        self.num_vars
    }

    fn num_clauses(&self) -> usize {
        self.clauses.len()
    }
}

/// Incremental CDCL backend (`varisat`).
pub struct VarisatEngine {
    solver: varisat::Solver<'static>,
    num_vars: usize,
    num_clauses: usize,
}

impl Default for VarisatEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl VarisatEngine {
    pub fn new() -> Self {
        Self {
            solver: varisat::Solver::new(),
            num_vars: 0,
            num_clauses: 0,
        }
    }

    fn to_varisat(lit: Lit) -> varisat::Lit {
        varisat::Lit::from_var(varisat::Var::from_index(lit.var().index()), lit.is_positive())
    }
}

impl std::fmt::Debug for VarisatEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VarisatEngine")
            .field("vars", &self.num_vars)
            .field("clauses", &self.num_clauses)
            .finish()
    }
}

impl ClauseSink for VarisatEngine {
    fn new_var(&mut self) -> Var {
        use varisat::ExtendFormula;

        let var = self.solver.new_var();
        debug_assert_eq!(var.index(), self.num_vars);
        self.num_vars += 1;
        Var::new(self.num_vars as u32)
    }

    fn add_clause(&mut self, clause: &[Lit]) {
        use varisat::ExtendFormula;

        let lits: Vec<varisat::Lit> = clause.iter().map(|&lit| Self::to_varisat(lit)).collect();
        self.solver.add_clause(&lits);
        self.num_clauses += 1;
    }

    fn num_vars(&self) -> usize {
        self.num_vars
    }

    fn num_clauses(&self) -> usize {
        self.num_clauses
    }
}

impl SatEngine for VarisatEngine {
    fn solve(&mut self) -> Result<SatResult> {
        let satisfiable = self.solver.solve().map_err(|e| Error::Backend(e.to_string()))?;
        if !satisfiable {
            return Ok(SatResult::Unsat);
        }
        let lits = self
            .solver
            .model()
            .ok_or_else(|| Error::Backend("solver reported SAT without a model".into()))?;
        let mut values = vec![false; self.num_vars];
        for lit in lits {
            let index = lit.var().index();
            if index < values.len() {
                values[index] = lit.is_positive();
            }
        }
        Ok(SatResult::Sat(Model::new(values)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cnf_collect() {
        let mut cnf = Cnf::new();
        let x = cnf.new_var();
        let y = cnf.new_var();
        cnf.add_clause(&[x.pos(), y.neg()]);
        cnf.add_clause(&[y.pos()]);
        assert_eq!(cnf.num_vars(), 2);
        assert_eq!(cnf.num_clauses(), 2);
        assert!(cnf.eval(&[true, true]));
        assert!(!cnf.eval(&[false, true]));
        assert_eq!(cnf.to_dimacs(), "p cnf 2 2\n1 -2 0\n2 0\n");
    }

    #[test]
    fn test_varisat_sat() {
        let mut engine = VarisatEngine::new();
        let x = engine.new_var();
        let y = engine.new_var();
        engine.add_clause(&[x.pos(), y.pos()]);
        engine.add_clause(&[x.neg()]);
        let SatResult::Sat(model) = engine.solve().unwrap() else {
            panic!("formula is satisfiable");
        };
        assert!(!model.value(x));
        assert!(model.value(y));
        assert!(model.lit_value(x.neg()));
    }

    #[test]
    fn test_varisat_incremental_unsat() {
        let mut engine = VarisatEngine::new();
        let x = engine.new_var();
        engine.add_clause(&[x.pos()]);
        assert!(matches!(engine.solve().unwrap(), SatResult::Sat(_)));
        engine.add_clause(&[x.neg()]);
        assert_eq!(engine.solve().unwrap(), SatResult::Unsat);
        assert_eq!(engine.num_clauses(), 2);
    }

    #[test]
    fn test_varisat_blocking_enumerates_all() {
        // Enumerate all models of (x | y) by blocking each one found.
        let mut engine = VarisatEngine::new();
        let x = engine.new_var();
        let y = engine.new_var();
        engine.add_clause(&[x.pos(), y.pos()]);
        let mut count = 0;
        while let SatResult::Sat(model) = engine.solve().unwrap() {
            count += 1;
            let block: Vec<Lit> = [x, y].iter().map(|&v| v.lit(!model.value(v))).collect();
            engine.add_clause(&block);
        }
        assert_eq!(count, 3);
    }
}
