//! Error type for input validation and backend faults.
//!
//! Decision outcomes ("biplanar", "not biplanar") are not errors; they are
//! reported through [`Verdict`][crate::solver::Verdict].

use std::io;

use crate::types::{Edge, Vertex};

#[derive(Debug)]
pub enum Error {
    /// File I/O error.
    Io(io::Error),
    /// Malformed line in an edge-list or partition file (1-based line number).
    Parse { line: usize, message: String },
    /// The input has no edges.
    EmptyGraph,
    /// An edge refers to a vertex outside `[0, n)`.
    VertexOutOfRange { edge: (Vertex, Vertex), n: usize },
    /// An edge joins a vertex to itself.
    SelfLoop { vertex: Vertex },
    /// Internal failure of the SAT engine or the planarity oracle.
    Backend(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Parse { line, message } => write!(f, "Parse error on line {}: {}", line, message),
            Error::EmptyGraph => write!(f, "Graph has no edges"),
            Error::VertexOutOfRange { edge: (a, b), n } => {
                write!(f, "Edge ({}, {}) has an endpoint outside [0, {})", a, b, n)
            }
            Error::SelfLoop { vertex } => write!(f, "Self-loop at vertex {}", vertex),
            Error::Backend(msg) => write!(f, "Backend failure: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Validates raw endpoint pairs and turns them into edges.
///
/// Duplicates are kept as-is: they count towards the edge bound.
pub fn validate_edges(pairs: &[(Vertex, Vertex)], n: usize) -> Result<Vec<Edge>> {
    if pairs.is_empty() {
        return Err(Error::EmptyGraph);
    }
    pairs
        .iter()
        .map(|&(a, b)| {
            if a >= n || b >= n {
                Err(Error::VertexOutOfRange { edge: (a, b), n })
            } else if a == b {
                Err(Error::SelfLoop { vertex: a })
            } else {
                Ok(Edge::new(a, b))
            }
        })
        .collect()
}
