//! Successful partitions and their serialization.
//!
//! A [`Partition`] holds the two edge lists of a biplanar split. The text form
//! is one `u v` pair per line, with a blank line separating the two sides.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::bound::PartitionBound;
use crate::error::Result;
use crate::graph::Graph;
use crate::planarity::PlanarityOracle;
use crate::types::Edge;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Partition {
    first: Vec<Edge>,
    second: Vec<Edge>,
}

/// Reason a partition fails validation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PartitionDefect {
    /// The two sides do not add up to the input edge multiset.
    EdgeMismatch,
    /// A side holds more edges than the Euler bound allows.
    OverBound { side: usize, edges: usize, bound: usize },
    /// A side is rejected by the oracle.
    NonPlanar { side: usize },
}

impl fmt::Display for PartitionDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionDefect::EdgeMismatch => write!(f, "sides do not partition the edge set"),
            PartitionDefect::OverBound { side, edges, bound } => {
                write!(f, "side {} has {} edges, bound is {}", side, edges, bound)
            }
            PartitionDefect::NonPlanar { side } => write!(f, "side {} is not planar", side),
        }
    }
}

impl Partition {
    pub fn new(first: Vec<Edge>, second: Vec<Edge>) -> Self {
        Self { first, second }
    }

    /// Collects the edges of two side graphs.
    pub fn from_graphs(g1: &Graph, g2: &Graph) -> Self {
        Self::new(g1.sorted_edges(), g2.sorted_edges())
    }

    pub fn first(&self) -> &[Edge] {
        &self.first
    }

    pub fn second(&self) -> &[Edge] {
        &self.second
    }

    pub fn sides(&self) -> [&[Edge]; 2] {
        [&self.first, &self.second]
    }

    /// Total number of edges over both sides.
    pub fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks that this is a valid biplanar split of `edges` on `n` vertices.
    pub fn validate<O: PlanarityOracle>(
        &self,
        edges: &[Edge],
        n: usize,
        oracle: &O,
    ) -> std::result::Result<(), PartitionDefect> {
        let mut expected = edges.to_vec();
        expected.sort_unstable();
        let mut actual: Vec<Edge> = self.first.iter().chain(&self.second).copied().collect();
        actual.sort_unstable();
        if expected != actual {
            return Err(PartitionDefect::EdgeMismatch);
        }

        let bound = PartitionBound::for_vertices(n);
        for (i, side) in self.sides().into_iter().enumerate() {
            if !bound.allows(side.len()) {
                return Err(PartitionDefect::OverBound {
                    side: i + 1,
                    edges: side.len(),
                    bound: bound.limit(),
                });
            }
            if !oracle.is_planar(&Graph::from_edges(n, side)) {
                return Err(PartitionDefect::NonPlanar { side: i + 1 });
            }
        }
        Ok(())
    }

    /// Writes one side as newline-separated `u v` pairs.
    pub fn write_side<W: Write>(side: &[Edge], mut writer: W) -> std::io::Result<()> {
        for e in side {
            writeln!(writer, "{} {}", e.u(), e.v())?;
        }
        Ok(())
    }

    /// Writes both sides, separated by a blank line.
    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        Self::write_side(&self.first, &mut writer)?;
        writeln!(writer)?;
        Self::write_side(&self.second, &mut writer)?;
        Ok(())
    }

    /// Saves the partition to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        self.write_to(&mut buf).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}
