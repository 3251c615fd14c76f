//! Reading graphs from disk and writing partitions back.

use std::fs;
use std::path::PathBuf;

use biplanar::error::Error;
use biplanar::generators;
use biplanar::io::{load_edge_list, load_partition};
use biplanar::partition::PartitionDefect;
use biplanar::planarity::DmpOracle;
use biplanar::solver::{check_edges, SearchConfig};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("biplanar-{}-{}", std::process::id(), name))
}

#[test]
fn check_and_save_partition() {
    let graph_path = temp_path("k7.txt");
    let partition_path = temp_path("k7.partition");

    let mut text = String::from("# K7\n");
    for e in generators::complete(7) {
        text.push_str(&format!("{}\n", e));
    }
    fs::write(&graph_path, text).unwrap();

    let graph = load_edge_list(&graph_path).unwrap();
    assert_eq!(graph.n, 7);
    assert_eq!(graph.edges.len(), 21);

    let (verdict, _) = check_edges(&graph.edges, graph.n, &SearchConfig::default(), &DmpOracle).unwrap();
    let partition = verdict.into_partition().expect("K7 is biplanar");
    partition.save(&partition_path).unwrap();

    let loaded = load_partition(&partition_path).unwrap();
    assert_eq!(loaded, partition);
    assert_eq!(loaded.validate(&graph.edges, graph.n, &DmpOracle), Ok(()));

    fs::remove_file(graph_path).ok();
    fs::remove_file(partition_path).ok();
}

#[test]
fn tampered_partition_is_rejected() {
    let k6 = generators::complete(6);
    let path = temp_path("k6-bad.partition");
    // Everything on one side: 15 edges against a bound of 12.
    let mut text = String::new();
    for e in &k6 {
        text.push_str(&format!("{}\n", e));
    }
    text.push('\n');
    fs::write(&path, text).unwrap();

    let partition = load_partition(&path).unwrap();
    assert_eq!(
        partition.validate(&k6, 6, &DmpOracle),
        Err(PartitionDefect::OverBound { side: 1, edges: 15, bound: 12 })
    );
    fs::remove_file(path).ok();
}

#[test]
fn malformed_file_reports_line() {
    let path = temp_path("broken.txt");
    fs::write(&path, "0 1\n1 2\n2 three\n").unwrap();
    match load_edge_list(&path) {
        Err(Error::Parse { line, .. }) => assert_eq!(line, 3),
        other => panic!("unexpected: {:?}", other),
    }
    fs::remove_file(path).ok();
}
