//! Known instances and the counting fast path.

mod common;

use biplanar::bound::PartitionBound;
use biplanar::generators;
use biplanar::planarity::{CountingOracle, DmpOracle};
use biplanar::solver::{check_biplanarity, check_edges, Reason, SearchConfig, Strategy, Verdict};
use biplanar::types::Vertex;

use common::AlwaysPlanar;

const STRATEGIES: [Strategy; 2] = [Strategy::Backtracking, Strategy::SatCegar];

fn assert_biplanar(edges: &[biplanar::types::Edge], n: usize) {
    for strategy in STRATEGIES {
        let config = SearchConfig::default().with_strategy(strategy);
        let (verdict, stats) = check_edges(edges, n, &config, &DmpOracle).unwrap();
        let partition = verdict
            .partition()
            .unwrap_or_else(|| panic!("{:?} found no partition", strategy));
        assert_eq!(partition.validate(edges, n, &DmpOracle), Ok(()));
        assert_eq!(stats.edges, edges.len());
    }
}

// ─── Known biplanar graphs ─────────────────────────────────────────────────────

#[test]
fn k5_is_biplanar() {
    assert_biplanar(&generators::complete(5), 5);
}

#[test]
fn k8_is_biplanar() {
    let k8 = generators::complete(8);
    assert_eq!(PartitionBound::for_vertices(8).max_edges(), Some(18));
    assert!(!PartitionBound::for_vertices(8).rejects_total(k8.len()));
    assert_biplanar(&k8, 8);
}

#[test]
fn strong_product_path3_k4_is_biplanar() {
    let g = generators::strong_product(&generators::path(3), 3, &generators::complete(4), 4);
    assert_eq!(g.len(), 50);
    assert_biplanar(&g, 12);
}

#[test]
fn wheels_are_biplanar() {
    assert_biplanar(&generators::wheel(9, 3), 9);
    assert_biplanar(&generators::blowup(&generators::cycle(5), 5), 10);
}

// ─── Fast path ─────────────────────────────────────────────────────────────────

#[test]
fn fast_path_rejects_without_oracle() {
    // All ten edges of K5 plus eleven parallel copies: 21 > 2 * 9.
    let k5 = generators::complete(5);
    let pairs: Vec<(Vertex, Vertex)> = k5.iter().chain(k5.iter().cycle().take(11)).map(|e| e.endpoints()).collect();
    assert_eq!(pairs.len(), 21);

    for strategy in STRATEGIES {
        let oracle = CountingOracle::new(DmpOracle);
        let config = SearchConfig::default().with_strategy(strategy);
        let (verdict, _) = check_biplanarity(&pairs, 5, &config, &oracle).unwrap();
        assert_eq!(verdict, Verdict::NotBiplanar(Reason::ExceedsBound { edges: 21, bound: 9 }));
        assert_eq!(oracle.total_calls(), 0);
    }
}

#[test]
fn k10_is_not_fast_rejected() {
    // 45 edges against 2 * 24 = 48: the search must actually run.
    let k10 = generators::complete(10);
    assert!(!PartitionBound::for_vertices(10).rejects_total(k10.len()));

    for strategy in STRATEGIES {
        let oracle = CountingOracle::new(AlwaysPlanar);
        let config = SearchConfig::default().with_strategy(strategy);
        let (verdict, _) = check_edges(&k10, 10, &config, &oracle).unwrap();
        assert!(oracle.total_calls() > 0);
        let partition = verdict.partition().expect("every split within the bound is accepted");
        assert!(partition.first().len() <= 24);
        assert!(partition.second().len() <= 24);
    }
}

#[test]
fn k11_is_fast_rejected() {
    // 55 edges against 2 * 27 = 54.
    let k11 = generators::complete(11);
    let oracle = CountingOracle::new(DmpOracle);
    let (verdict, stats) = check_edges(&k11, 11, &SearchConfig::default(), &oracle).unwrap();
    assert_eq!(verdict, Verdict::NotBiplanar(Reason::ExceedsBound { edges: 55, bound: 27 }));
    assert_eq!(oracle.total_calls(), 0);
    assert_eq!(stats.iterations, 0);
}
