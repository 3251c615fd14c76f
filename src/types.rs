//! Basic value types shared by both partitioning strategies.
//!
//! Graph-side types ([`Vertex`], [`Edge`]) and SAT-side types ([`Var`], [`Lit`])
//! are kept together here so that the search engines and the encoders agree on
//! a single representation.

use std::fmt;
use std::ops::Neg;

/// A vertex identifier in `[0, n)`.
pub type Vertex = usize;

/// An undirected edge between two distinct vertices.
///
/// Edges are stored normalized (`u < v`), so two edges compare equal
/// regardless of the order their endpoints were given in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Edge {
    u: Vertex,
    v: Vertex,
}

impl Edge {
    /// Creates a normalized edge.
    ///
    /// # Panics
    ///
    /// Panics if `a == b`. Self-loops are rejected during input validation,
    /// before any `Edge` is constructed from user data.
    pub fn new(a: Vertex, b: Vertex) -> Self {
        assert_ne!(a, b, "Edge endpoints must be distinct");
        if a < b {
            Edge { u: a, v: b }
        } else {
            Edge { u: b, v: a }
        }
    }

    /// Smaller endpoint.
    pub fn u(self) -> Vertex {
        self.u
    }

    /// Larger endpoint.
    pub fn v(self) -> Vertex {
        self.v
    }

    pub fn endpoints(self) -> (Vertex, Vertex) {
        (self.u, self.v)
    }

    /// Returns the endpoint opposite to `w`.
    pub fn other(self, w: Vertex) -> Vertex {
        debug_assert!(w == self.u || w == self.v);
        if w == self.u {
            self.v
        } else {
            self.u
        }
    }

    /// Applies a vertex relabelling.
    pub fn map(self, perm: &[Vertex]) -> Edge {
        Edge::new(perm[self.u], perm[self.v])
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.u, self.v)
    }
}

impl From<(Vertex, Vertex)> for Edge {
    fn from((a, b): (Vertex, Vertex)) -> Self {
        Edge::new(a, b)
    }
}

/// A SAT variable identifier (1-indexed, DIMACS style).
///
/// # Invariants
///
/// - Variable IDs must be >= 1 (0 is not a valid DIMACS variable)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u32);

impl Var {
    /// Creates a new variable with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if `id == 0`. Variables must be 1-indexed.
    pub fn new(id: u32) -> Self {
        assert_ne!(id, 0, "Variable IDs must be >= 1");
        Var(id)
    }

    /// Returns the raw variable ID as a `u32`.
    pub fn id(self) -> u32 {
        self.0
    }

    /// Zero-based index, handy for dense per-variable tables.
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    pub fn pos(self) -> Lit {
        Lit(self.0 as i32)
    }

    pub fn neg(self) -> Lit {
        Lit(-(self.0 as i32))
    }

    /// Literal that is true exactly when the variable has the given value.
    pub fn lit(self, value: bool) -> Lit {
        if value {
            self.pos()
        } else {
            self.neg()
        }
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// A signed literal in DIMACS convention: `+v` is the variable, `-v` its negation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Lit(i32);

impl Lit {
    pub fn to_dimacs(self) -> i32 {
        self.0
    }

    pub fn var(self) -> Var {
        Var(self.0.unsigned_abs())
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Evaluates the literal under a dense assignment indexed by [`Var::index`].
    pub fn eval(self, assignment: &[bool]) -> bool {
        assignment[self.var().index()] == self.is_positive()
    }
}

impl Neg for Lit {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Lit(-self.0)
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", if self.is_negative() { "~" } else { "" }, self.var())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_normalized() {
        let e1 = Edge::new(3, 1);
        let e2 = Edge::new(1, 3);
        assert_eq!(e1, e2);
        assert_eq!(e1.endpoints(), (1, 3));
        assert_eq!(e1.other(1), 3);
        assert_eq!(e1.other(3), 1);
        assert_eq!(e1.to_string(), "1 3");
    }

    #[test]
    #[should_panic(expected = "Edge endpoints must be distinct")]
    fn test_edge_self_loop_panics() {
        Edge::new(2, 2);
    }

    #[test]
    fn test_edge_map() {
        let perm = vec![2, 0, 1];
        assert_eq!(Edge::new(0, 1).map(&perm), Edge::new(0, 2));
    }

    #[test]
    #[should_panic(expected = "Variable IDs must be >= 1")]
    fn test_var_zero_panics() {
        Var::new(0);
    }

    #[test]
    fn test_lit_polarity() {
        let x = Var::new(3);
        assert!(x.pos().is_positive());
        assert!(x.neg().is_negative());
        assert_eq!(-x.pos(), x.neg());
        assert_eq!(x.lit(false), x.neg());
        assert_eq!(x.neg().var(), x);
        assert_eq!(x.neg().to_dimacs(), -3);
        assert_eq!(x.neg().to_string(), "~x3");
    }

    #[test]
    fn test_lit_eval() {
        let assignment = vec![true, false];
        assert!(Var::new(1).pos().eval(&assignment));
        assert!(!Var::new(1).neg().eval(&assignment));
        assert!(Var::new(2).neg().eval(&assignment));
    }
}
