//! # Dependency Maps and Rendering
//!
//! [`DependencyMap`] is the input of the cycle detector: an
//! insertion-ordered mapping from each node to the nodes it depends on.
//! Nodes that only appear as dependencies are implicit leaves.
//!
//! [`GraphRenderer`] draws one or more maps as ASCII art, Mermaid or
//! Graphviz DOT, highlighting the edges and nodes of reported cycles.
//!
//! ## Example
//!
//! ```
//! use cycle_sentinel::detector::CycleDetector;
//! use cycle_sentinel::graph::{DependencyMap, GraphRenderer, GraphView};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = DependencyMap::new();
//! graph.add_dependency("app".to_string(), "core".to_string());
//! graph.add_dependency("core".to_string(), "app".to_string());
//!
//! let result = CycleDetector::new(&graph).detect();
//! let views = [GraphView {
//!     name: "example",
//!     graph: &graph,
//!     cycles: result.cycles(),
//! }];
//!
//! let mut output = Vec::new();
//! GraphRenderer::new(true).render_dot(&views, &mut output)?;
//!
//! let dot_output = String::from_utf8(output)?;
//! assert!(dot_output.contains("digraph"));
//! assert!(dot_output.contains("\"0:app\" -> \"0:core\""));
//! # Ok(())
//! # }
//! ```
//!
//! ## Output Formats
//!
//! - **ASCII**: Terminal-friendly tree per node
//! - **DOT**: Graphviz format for detailed visualization
//! - **Mermaid**: Markdown-compatible diagrams for documentation

mod map;
mod renderer;

pub use map::DependencyMap;
pub use renderer::{GraphRenderer, GraphView};
