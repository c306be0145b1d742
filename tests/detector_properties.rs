//! Behavioral properties of the cycle detector

use std::fmt;
use std::time::{Duration, Instant};

use cycle_sentinel::core::ProviderToken;
use cycle_sentinel::detector::CycleDetector;
use cycle_sentinel::graph::DependencyMap;
use pretty_assertions::assert_eq;

fn map(edges: Vec<(&'static str, Vec<&'static str>)>) -> DependencyMap<&'static str> {
    edges.into_iter().collect()
}

fn cycles_of(graph: &DependencyMap<&'static str>) -> Vec<Vec<&'static str>> {
    CycleDetector::new(graph)
        .detect()
        .into_cycles()
        .into_iter()
        .map(|cycle| cycle.into_nodes())
        .collect()
}

#[test]
fn test_acyclic_shapes_report_nothing() {
    let shapes = vec![
        map(vec![]),
        map(vec![("A", vec![]), ("B", vec![]), ("C", vec![])]),
        map(vec![("A", vec!["B"]), ("C", vec!["D"])]),
        map(vec![("root", vec!["left", "right"]), ("left", vec!["leaf"])]),
        map(vec![
            ("A", vec!["B", "C"]),
            ("B", vec!["D"]),
            ("C", vec!["D"]),
            ("D", vec![]),
        ]),
    ];

    for graph in &shapes {
        let result = CycleDetector::new(graph).detect();
        assert!(!result.has_cycles(), "false positive on {graph:?}");
        assert!(result.cycles().is_empty());
    }
}

#[test]
fn test_basic_cycles() {
    assert_eq!(cycles_of(&map(vec![("A", vec!["A"])])), vec![vec!["A", "A"]]);
    assert_eq!(
        cycles_of(&map(vec![("A", vec!["B"]), ("B", vec!["A"])])),
        vec![vec!["A", "B", "A"]]
    );
    assert_eq!(
        cycles_of(&map(vec![("A", vec!["B"]), ("B", vec!["C"]), ("C", vec!["A"])])),
        vec![vec!["A", "B", "C", "A"]]
    );
}

#[test]
fn test_indirect_cycle_excludes_entry_path() {
    let graph = map(vec![
        ("A", vec!["B"]),
        ("B", vec!["C"]),
        ("C", vec!["D"]),
        ("D", vec!["B"]),
    ]);
    assert_eq!(cycles_of(&graph), vec![vec!["B", "C", "D", "B"]]);
}

#[test]
fn test_independent_cycles_are_both_found() {
    let graph = map(vec![
        ("A", vec!["B"]),
        ("B", vec!["A"]),
        ("C", vec!["D"]),
        ("D", vec!["C"]),
    ]);
    assert_eq!(
        cycles_of(&graph),
        vec![vec!["A", "B", "A"], vec!["C", "D", "C"]]
    );
}

#[test]
fn test_repeated_detection_is_identical() {
    let graph = map(vec![
        ("A", vec!["B", "C"]),
        ("B", vec!["A"]),
        ("C", vec!["C"]),
    ]);
    let mut detector = CycleDetector::new(&graph);

    let first = detector.detect();
    let second = detector.detect();
    let third = detector.detect();

    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(first.cycle_count(), 2);
}

#[test]
fn test_format_cycle_helpers() {
    assert_eq!(CycleDetector::<&str>::format_cycle(&["A", "B", "A"]), "A → B → A");
    assert_eq!(CycleDetector::<&str>::format_cycle(&[]), "");
    assert_eq!(
        CycleDetector::<&str>::format_cycle_with(&["A", "B", "A"], |n| format!("[{n}]")),
        "[A] → [B] → [A]"
    );
}

#[derive(Debug)]
struct UnknownProvider;

impl fmt::Display for UnknownProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provider has no registered name")
    }
}

#[test]
fn test_fallible_formatter_propagates_error() {
    let result = CycleDetector::<&str>::try_format_cycle_with(&["A", "?", "A"], |n| {
        if *n == "?" {
            Err(UnknownProvider)
        } else {
            Ok(n.to_string())
        }
    });
    assert_eq!(
        result.unwrap_err().to_string(),
        "provider has no registered name"
    );
}

#[test]
fn test_reference_identity_nodes() {
    let service = ProviderToken::new("Service");
    let twin = ProviderToken::new("Service");

    let mut graph = DependencyMap::new();
    graph.add_dependency(service.clone(), twin.clone());
    graph.add_dependency(twin.clone(), service.clone());

    let result = CycleDetector::new(&graph).detect();
    assert_eq!(result.cycle_count(), 1);
    assert_eq!(
        result.cycles()[0].format_with(|token| token.name().to_string()),
        "Service → Service → Service"
    );

    // Same names but distinct tokens on one side only: no cycle
    let mut acyclic = DependencyMap::new();
    acyclic.add_dependency(service.clone(), twin.clone());
    acyclic.add_dependency(ProviderToken::new("Service"), service);
    assert!(!CycleDetector::new(&acyclic).detect().has_cycles());
}

#[test]
fn test_large_tree_is_fast_and_acyclic() {
    let mut graph = DependencyMap::new();
    // Binary tree with 255 nodes
    for parent in 0u32..127 {
        graph.insert(parent, vec![parent * 2 + 1, parent * 2 + 2]);
    }

    let start = Instant::now();
    let result = CycleDetector::new(&graph).detect();
    let elapsed = start.elapsed();

    assert!(!result.has_cycles());
    assert!(elapsed < Duration::from_millis(200), "took {elapsed:?}");
}

#[test]
fn test_long_chain_with_tail_cycle() {
    let mut graph = DependencyMap::new();
    for i in 0u32..60 {
        graph.insert(i, vec![i + 1]);
    }
    // 60 → 57 closes a cycle among the last four nodes only
    graph.insert(60, vec![57]);

    let result = CycleDetector::new(&graph).detect();
    assert_eq!(result.cycle_count(), 1);
    assert_eq!(result.cycles()[0].nodes().to_vec(), vec![57u32, 58, 59, 60, 57]);
}
