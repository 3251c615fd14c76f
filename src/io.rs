//! Reading graphs and partitions from text files.
//!
//! # Edge list format
//!
//! ```text
//! # comment
//! 0 1
//! 1 2
//! ```
//!
//! One edge per line as two whitespace-separated vertex numbers. Blank lines
//! and lines starting with `#` or `c` are skipped. The vertex count is the
//! largest endpoint plus one.
//!
//! # Partition format
//!
//! Two edge lists in the format above, separated by the first blank line.
//! This is what [`Partition::write_to`] produces.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{validate_edges, Error, Result};
use crate::partition::Partition;
use crate::types::{Edge, Vertex};

/// Parsed edge list together with its vertex count.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EdgeList {
    pub n: usize,
    pub edges: Vec<Edge>,
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.starts_with('c')
}

fn parse_pair(line: &str, number: usize) -> Result<(Vertex, Vertex)> {
    let parse = |token: &str| {
        token.parse::<Vertex>().map_err(|e| Error::Parse {
            line: number,
            message: format!("invalid vertex '{}': {}", token, e),
        })
    };
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [a, b] => Ok((parse(*a)?, parse(*b)?)),
        _ => Err(Error::Parse {
            line: number,
            message: format!("expected two vertices, found {} tokens", tokens.len()),
        }),
    }
}

/// Reads an edge list. The result is validated: it is non-empty and has no self-loops.
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<EdgeList> {
    let mut pairs = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || is_comment(line) {
            continue;
        }
        pairs.push(parse_pair(line, i + 1)?);
    }
    let n = pairs.iter().map(|&(a, b)| a.max(b) + 1).max().unwrap_or(0);
    let edges = validate_edges(&pairs, n)?;
    Ok(EdgeList { n, edges })
}

/// Loads an edge list from a file.
pub fn load_edge_list<P: AsRef<Path>>(path: P) -> Result<EdgeList> {
    read_edge_list(BufReader::new(File::open(path)?))
}

/// Reads a partition written by [`Partition::write_to`].
///
/// A third blank-line-separated block is a parse error. Self-loops are rejected; vertex ranges are checked later by
/// [`Partition::validate`] against the graph.
pub fn read_partition<R: BufRead>(reader: R) -> Result<Partition> {
    let mut sides: [Vec<Edge>; 2] = [Vec::new(), Vec::new()];
    let mut current = 0;
    let mut closed = false;
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            if current == 0 {
                current = 1;
            } else if !sides[1].is_empty() {
                closed = true;
            }
            continue;
        }
        if is_comment(line) {
            continue;
        }
        if closed {
            return Err(Error::Parse {
                line: i + 1,
                message: "partition has more than two blocks".into(),
            });
        }
        let (a, b) = parse_pair(line, i + 1)?;
        if a == b {
            return Err(Error::SelfLoop { vertex: a });
        }
        sides[current].push(Edge::new(a, b));
    }
    let [first, second] = sides;
    Ok(Partition::new(first, second))
}

/// Loads a partition from a file.
pub fn load_partition<P: AsRef<Path>>(path: P) -> Result<Partition> {
    read_partition(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_edge_list() {
        let text = "# triangle plus pendant\n0 1\n1 2\n\n2 0\nc another comment\n  2   5 \n";
        let list = read_edge_list(text.as_bytes()).unwrap();
        assert_eq!(list.n, 6);
        assert_eq!(list.edges, vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(0, 2), Edge::new(2, 5)]);
    }

    #[test]
    fn test_parse_errors_carry_line() {
        match read_edge_list("0 1\n1 x\n".as_bytes()) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected: {:?}", other),
        }
        match read_edge_list("0 1\n\n1 2 3\n".as_bytes()) {
            Err(Error::Parse { line, message }) => {
                assert_eq!(line, 3);
                assert!(message.contains("3 tokens"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_graphs() {
        assert!(matches!(read_edge_list("# nothing\n".as_bytes()), Err(Error::EmptyGraph)));
        assert!(matches!(read_edge_list("0 1\n3 3\n".as_bytes()), Err(Error::SelfLoop { vertex: 3 })));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(load_edge_list("/nonexistent/graph.txt"), Err(Error::Io(_))));
    }

    #[test]
    fn test_partition_roundtrip() {
        let p = Partition::new(vec![Edge::new(0, 1), Edge::new(2, 3)], vec![Edge::new(1, 2)]);
        let mut buf = Vec::new();
        p.write_to(&mut buf).unwrap();
        assert_eq!(read_partition(buf.as_slice()).unwrap(), p);
    }

    #[test]
    fn test_partition_empty_first_side() {
        let p = Partition::new(vec![], vec![Edge::new(0, 2)]);
        let mut buf = Vec::new();
        p.write_to(&mut buf).unwrap();
        assert_eq!(read_partition(buf.as_slice()).unwrap(), p);
    }

    #[test]
    fn test_partition_third_block_rejected() {
        match read_partition("0 1\n\n1 2\n\n2 3\n".as_bytes()) {
            Err(Error::Parse { line, message }) => {
                assert_eq!(line, 5);
                assert!(message.contains("more than two blocks"));
            }
            other => panic!("unexpected: {:?}", other),
        }
        // Extra blank lines alone are fine.
        let p = read_partition("0 1\n\n\n1 2\n\n\n".as_bytes()).unwrap();
        assert_eq!(p.first(), &[Edge::new(0, 1)]);
        assert_eq!(p.second(), &[Edge::new(1, 2)]);
    }

    #[test]
    fn test_partition_empty_second_side() {
        let p = read_partition("0 1\n1 2\n\n".as_bytes()).unwrap();
        assert_eq!(p.first().len(), 2);
        assert!(p.second().is_empty());
    }
}
