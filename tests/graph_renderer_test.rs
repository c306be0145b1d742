//! Tests for the graph renderer module

use std::io::Cursor;

use cycle_sentinel::detector::{CycleDetector, DetectionResult};
use cycle_sentinel::graph::{DependencyMap, GraphRenderer, GraphView};

fn string_map(edges: Vec<(&str, Vec<&str>)>) -> DependencyMap<String> {
    edges
        .into_iter()
        .map(|(node, deps)| {
            (
                node.to_string(),
                deps.into_iter().map(str::to_string).collect(),
            )
        })
        .collect()
}

/// Api declares Core twice, as a manifest merged from two sources would
fn create_graph_with_duplicates() -> DependencyMap<String> {
    string_map(vec![
        ("Api", vec!["Core", "Core", "Tools"]),
        ("Core", vec!["Storage"]),
        ("Tools", vec![]),
    ])
}

fn create_cyclic_graph() -> DependencyMap<String> {
    string_map(vec![
        ("OrderService", vec!["PaymentService"]),
        ("PaymentService", vec!["OrderService", "Logger"]),
        ("Logger", vec![]),
    ])
}

type RenderFn = fn(&GraphRenderer, &[GraphView<'_>], &mut dyn std::io::Write) -> miette::Result<()>;

fn render_one(
    graph: &DependencyMap<String>,
    highlight: bool,
    render: RenderFn,
) -> String {
    let result = CycleDetector::new(graph).detect();
    let views = [GraphView {
        name: "checkout",
        graph,
        cycles: result.cycles(),
    }];

    let mut output = Cursor::new(Vec::new());
    render(&GraphRenderer::new(highlight), &views, &mut output).unwrap();
    String::from_utf8(output.into_inner()).unwrap()
}

#[test]
fn test_ascii_aggregates_duplicate_edges() {
    let output = render_one(
        &create_graph_with_duplicates(),
        true,
        GraphRenderer::render_ascii,
    );

    assert!(output.contains("├── → Core (declared 2 times)"));
    assert!(output.contains("└── → Tools\n"));
    // Implicit leaves are drawn as nodes too
    assert!(output.contains("Storage\n  └── (no dependencies)"));
    assert!(!output.contains("IN CYCLE"));
}

#[test]
fn test_mermaid_duplicate_edges_and_cycle_styles() {
    let output = render_one(
        &create_graph_with_duplicates(),
        true,
        GraphRenderer::render_mermaid,
    );

    assert!(output.starts_with("graph TD\n"));
    assert!(output.contains("    subgraph g0[\"checkout\"]"));
    assert!(output.contains("    g0_n0 -->|×2| g0_n1"));
    assert!(output.contains("    g0_n0 --> g0_n2"));
    // One link per distinct edge: Api→Core, Api→Tools, Core→Storage
    assert!(output.contains("linkStyle 2 "));
    assert!(!output.contains("linkStyle 3 "));

    let cyclic = render_one(&create_cyclic_graph(), true, GraphRenderer::render_mermaid);
    assert!(cyclic.contains("g0_n0((\"OrderService\"))"));
    assert!(cyclic.contains("linkStyle 0 stroke:#FF6500,stroke-width:3px"));
    assert!(cyclic.contains("g0_n2[\"Logger\"]"));
}

#[test]
fn test_dot_output() {
    let output = render_one(&create_cyclic_graph(), true, GraphRenderer::render_dot);

    assert!(output.starts_with("digraph dependencies {\n"));
    assert!(output.contains("    subgraph cluster_0 {"));
    assert!(output.contains(r#"        label="checkout";"#));
    assert!(output.contains(r##""0:OrderService" -> "0:PaymentService" [color="#FF6500", penwidth=3];"##));
    assert!(output.contains(r##""0:PaymentService" -> "0:Logger" [color="#64B5F6", penwidth=2];"##));
    assert!(output.trim_end().ends_with('}'));

    let duplicates = render_one(
        &create_graph_with_duplicates(),
        true,
        GraphRenderer::render_dot,
    );
    assert!(duplicates.contains(r#"penwidth=2, label="×2"];"#));
}

#[test]
fn test_special_characters_are_escaped() {
    let graph = string_map(vec![(r#"Repo<"User">"#, vec!["Db Pool"])]);

    let mermaid = render_one(&graph, true, GraphRenderer::render_mermaid);
    assert!(mermaid.contains("g0_n0[\"Repo<#quot;User#quot;>\"]"));
    assert!(mermaid.contains("g0_n0 --> g0_n1"));

    let dot = render_one(&graph, true, GraphRenderer::render_dot);
    assert!(dot.contains(r#"label="Repo<\"User\">""#));
}

#[test]
fn test_names_differing_in_punctuation_stay_distinct() {
    let graph = string_map(vec![
        ("Repo.User", vec!["Repo-User"]),
        ("Repo-User", vec!["Repo_User"]),
    ]);

    let mermaid = render_one(&graph, true, GraphRenderer::render_mermaid);
    assert!(mermaid.contains("g0_n0[\"Repo.User\"]"));
    assert!(mermaid.contains("g0_n1[\"Repo-User\"]"));
    assert!(mermaid.contains("g0_n2[\"Repo_User\"]"));
    assert!(mermaid.contains("    g0_n0 --> g0_n1\n"));
    assert!(mermaid.contains("    g0_n1 --> g0_n2\n"));
    assert_eq!(mermaid.matches("style g0_n").count(), 3);
}

#[test]
fn test_multiple_views_are_kept_apart() {
    let checkout = create_cyclic_graph();
    let users = string_map(vec![("UserService", vec!["Logger"])]);
    let checkout_result = CycleDetector::new(&checkout).detect();
    let users_result = DetectionResult::default();

    let views = [
        GraphView {
            name: "checkout",
            graph: &checkout,
            cycles: checkout_result.cycles(),
        },
        GraphView {
            name: "users",
            graph: &users,
            cycles: users_result.cycles(),
        },
    ];

    let mut output = Cursor::new(Vec::new());
    GraphRenderer::new(true)
        .render_dot(&views, &mut output)
        .unwrap();
    let dot = String::from_utf8(output.into_inner()).unwrap();

    // Logger exists in both manifests but must not be merged
    assert!(dot.contains(r#""0:Logger""#));
    assert!(dot.contains(r#""1:Logger""#));
    assert!(dot.contains("subgraph cluster_1 {"));

    let mut output = Cursor::new(Vec::new());
    GraphRenderer::new(true)
        .render_mermaid(&views, &mut output)
        .unwrap();
    let mermaid = String::from_utf8(output.into_inner()).unwrap();
    // Link indices keep counting across subgraphs
    assert!(mermaid.contains("    g1_n0 --> g1_n1\n    linkStyle 3 "));
}

#[test]
fn test_highlighting_disabled() {
    let graph = create_cyclic_graph();

    let ascii = render_one(&graph, false, GraphRenderer::render_ascii);
    assert!(!ascii.contains("[CYCLE]"));
    assert!(!ascii.contains("Part of a dependency cycle"));

    let dot = render_one(&graph, false, GraphRenderer::render_dot);
    assert!(!dot.contains("#FF6500"));
}

#[test]
fn test_empty_graph_message() {
    let graph = DependencyMap::new();
    let output = render_one(&graph, true, GraphRenderer::render_ascii);
    assert_eq!(output, "No dependency graphs found to visualize\n");
}
