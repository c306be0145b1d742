use std::collections::HashSet;
use std::io::Write;

use indexmap::IndexMap;
use miette::Result;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::detector::Cycle;
use crate::error::CycleSentinelError;
use crate::graph::DependencyMap;

// Blue-Orange Accessible Palette - Soothing colors with excellent contrast
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(CycleSentinelError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(CycleSentinelError::from)
    };
}

/// One named dependency map together with the cycles found in it
#[derive(Debug, Clone, Copy)]
pub struct GraphView<'a> {
    pub name: &'a str,
    pub graph: &'a DependencyMap<String>,
    pub cycles: &'a [Cycle<String>],
}

/// Petgraph form of a view plus the cycle membership lookups
struct Prepared<'a> {
    graph: DiGraph<String, ()>,
    // (source, target) → number of declarations, in declaration order
    edges: IndexMap<(NodeIndex, NodeIndex), usize>,
    cycle_nodes: HashSet<&'a str>,
    cycle_edges: HashSet<(&'a str, &'a str)>,
}

impl<'a> Prepared<'a> {
    fn new(view: &GraphView<'a>, highlight: bool) -> Self {
        let (graph, _) = view.graph.to_digraph();

        let mut edges: IndexMap<(NodeIndex, NodeIndex), usize> = IndexMap::new();
        for edge in graph.edge_references() {
            *edges.entry((edge.source(), edge.target())).or_default() += 1;
        }

        let mut cycle_nodes = HashSet::new();
        let mut cycle_edges = HashSet::new();
        if highlight {
            for cycle in view.cycles {
                cycle_nodes.extend(cycle.nodes().iter().map(String::as_str));
                cycle_edges.extend(cycle.edges().map(|(a, b)| (a.as_str(), b.as_str())));
            }
        }

        Self {
            graph,
            edges,
            cycle_nodes,
            cycle_edges,
        }
    }

    fn name(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    fn node_in_cycle(&self, idx: NodeIndex) -> bool {
        self.cycle_nodes.contains(self.name(idx))
    }

    fn edge_in_cycle(&self, source: NodeIndex, target: NodeIndex) -> bool {
        self.cycle_edges
            .contains(&(self.name(source), self.name(target)))
    }
}

pub struct GraphRenderer {
    highlight_cycles: bool,
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool) -> Self {
        Self { highlight_cycles }
    }

    pub fn render_ascii(&self, views: &[GraphView<'_>], output: &mut dyn Write) -> Result<()> {
        if views.iter().all(|view| view.graph.is_empty()) {
            writeln_out!(output, "No dependency graphs found to visualize")?;
            return Ok(());
        }

        writeln_out!(output, "\n📊 Dependency Graph\n")?;

        let mut any_cycle = false;
        for view in views {
            let prepared = Prepared::new(view, self.highlight_cycles);
            any_cycle |= !prepared.cycle_nodes.is_empty();

            writeln_out!(output, "═══ {} ═══", view.name)?;
            writeln_out!(output)?;

            for node in prepared.graph.node_indices() {
                let name = prepared.name(node);

                if prepared.node_in_cycle(node) {
                    writeln_out!(output, "┌─────────────────────────────────────┐")?;
                    writeln_out!(output, "│ {} ⚠️  IN CYCLE", name)?;
                    writeln_out!(output, "└─────────────────────────────────────┘")?;
                } else {
                    writeln_out!(output, "{}", name)?;
                }

                let targets: Vec<_> = prepared
                    .edges
                    .iter()
                    .filter(|((source, _), _)| *source == node)
                    .collect();

                if targets.is_empty() {
                    writeln_out!(output, "  └── (no dependencies)")?;
                }

                for (i, ((_, target), count)) in targets.iter().enumerate() {
                    let prefix = if i == targets.len() - 1 {
                        "└──"
                    } else {
                        "├──"
                    };
                    let count_str = if **count > 1 {
                        format!(" (declared {count} times)")
                    } else {
                        String::new()
                    };
                    let cycle_marker = if prepared.edge_in_cycle(node, *target) {
                        " ⚠️  [CYCLE]"
                    } else {
                        ""
                    };

                    writeln_out!(
                        output,
                        "  {} → {}{}{}",
                        prefix,
                        prepared.name(*target),
                        count_str,
                        cycle_marker
                    )?;
                }

                writeln_out!(output)?; // Empty line between nodes
            }
        }

        // Add legend if there are cycles
        if any_cycle {
            writeln_out!(output, "⚠️  = Part of a dependency cycle")?;
        }

        Ok(())
    }

    pub fn render_mermaid(&self, views: &[GraphView<'_>], output: &mut dyn Write) -> Result<()> {
        writeln_out!(output, "graph TD")?;

        let mut link_index = 0;
        for (group, view) in views.iter().enumerate() {
            let prepared = Prepared::new(view, self.highlight_cycles);
            // Names are only labels; distinct names may share an identifier form
            let node_id = |idx: NodeIndex| format!("g{}_n{}", group, idx.index());

            writeln_out!(output)?;
            writeln_out!(
                output,
                "    subgraph g{}[\"{}\"]",
                group,
                mermaid_label(view.name)
            )?;

            for node in prepared.graph.node_indices() {
                let id = node_id(node);
                let label = mermaid_label(prepared.name(node));

                if prepared.node_in_cycle(node) {
                    writeln_out!(output, "        {}((\"{}\"))", id, label)?;
                    writeln_out!(
                        output,
                        "        style {} fill:{},stroke:{},stroke-width:3px",
                        id,
                        colors::CYCLE_NODE_FILL,
                        colors::CYCLE_NODE_STROKE
                    )?;
                } else {
                    writeln_out!(output, "        {}[\"{}\"]", id, label)?;
                    writeln_out!(
                        output,
                        "        style {} fill:{},stroke:{},stroke-width:2px",
                        id,
                        colors::NORMAL_NODE_FILL,
                        colors::NORMAL_NODE_STROKE
                    )?;
                }
            }

            writeln_out!(output, "    end")?;

            for (&(source, target), &count) in &prepared.edges {
                let arrow = if count > 1 {
                    format!("-->|×{count}|")
                } else {
                    "-->".to_string()
                };
                writeln_out!(output, "    {} {} {}", node_id(source), arrow, node_id(target))?;

                if prepared.edge_in_cycle(source, target) {
                    writeln_out!(
                        output,
                        "    linkStyle {} stroke:{},stroke-width:3px",
                        link_index,
                        colors::CYCLE_EDGE
                    )?;
                } else {
                    writeln_out!(
                        output,
                        "    linkStyle {} stroke:{},stroke-width:2px",
                        link_index,
                        colors::NORMAL_EDGE
                    )?;
                }
                link_index += 1;
            }
        }

        Ok(())
    }

    pub fn render_dot(&self, views: &[GraphView<'_>], output: &mut dyn Write) -> Result<()> {
        writeln_out!(output, "digraph dependencies {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=box, style=rounded];")?;

        for (group, view) in views.iter().enumerate() {
            let prepared = Prepared::new(view, self.highlight_cycles);
            let node_id = |idx: NodeIndex| format!("{}:{}", group, dot_escape(prepared.name(idx)));

            writeln_out!(output)?;
            writeln_out!(output, "    subgraph cluster_{} {{", group)?;
            writeln_out!(output, r#"        label="{}";"#, dot_escape(view.name))?;

            for node in prepared.graph.node_indices() {
                let (fill_color, stroke_color) = if prepared.node_in_cycle(node) {
                    (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
                } else {
                    (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
                };

                writeln_out!(
                    output,
                    r#"        "{}" [label="{}", style=filled, fillcolor="{}", color="{}", penwidth=2];"#,
                    node_id(node),
                    dot_escape(prepared.name(node)),
                    fill_color,
                    stroke_color
                )?;
            }

            for (&(source, target), &count) in &prepared.edges {
                let label = if count > 1 {
                    format!(r#", label="×{count}""#)
                } else {
                    String::new()
                };

                if prepared.edge_in_cycle(source, target) {
                    writeln_out!(
                        output,
                        r#"        "{}" -> "{}" [color="{}", penwidth=3{}];"#,
                        node_id(source),
                        node_id(target),
                        colors::CYCLE_EDGE,
                        label
                    )?;
                } else {
                    writeln_out!(
                        output,
                        r#"        "{}" -> "{}" [color="{}", penwidth=2{}];"#,
                        node_id(source),
                        node_id(target),
                        colors::NORMAL_EDGE,
                        label
                    )?;
                }
            }

            writeln_out!(output, "    }}")?;
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }
}

fn mermaid_label(name: &str) -> String {
    name.replace('"', "#quot;")
}

fn dot_escape(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}
