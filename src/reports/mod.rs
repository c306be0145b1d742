//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - junit: JUnit XML format for CI/CD integration
//! - github: GitHub Actions workflow annotations

pub mod github;
pub mod human;
pub mod json;
pub mod junit;

use std::path::{Path, PathBuf};

use crate::detector::DetectionResult;
use crate::error::CycleSentinelError;
use crate::manifest::DependencyManifest;

/// Detection outcome for one manifest, as consumed by report generators
#[derive(Debug, Clone)]
pub struct GraphAnalysis {
    name: String,
    path: PathBuf,
    node_count: usize,
    edge_count: usize,
    result: DetectionResult<String>,
}

impl GraphAnalysis {
    pub fn new(manifest: &DependencyManifest, result: DetectionResult<String>) -> Self {
        Self {
            name: manifest.name().to_string(),
            path: manifest.path().to_path_buf(),
            node_count: manifest.graph().nodes().len(),
            edge_count: manifest.graph().edge_count(),
            result,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn result(&self) -> &DetectionResult<String> {
        &self.result
    }

    /// Keep only the cycles that pass through `node`
    pub fn focus_on(mut self, node: &str) -> Self {
        self.result.retain(|cycle| cycle.nodes().iter().any(|n| n == node));
        self
    }
}

/// Total number of cycles across all analyses
pub fn total_cycles(analyses: &[GraphAnalysis]) -> usize {
    analyses.iter().map(|a| a.result().cycle_count()).sum()
}

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from per-manifest detection results
    fn generate_report(&self, analyses: &[GraphAnalysis]) -> Result<String, CycleSentinelError>;
}

// Re-export for convenience
pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use junit::JunitReportGenerator;

#[cfg(test)]
pub(crate) mod test_support {
    use super::GraphAnalysis;
    use crate::detector::CycleDetector;
    use crate::graph::DependencyMap;
    use crate::manifest::DependencyManifest;

    pub fn analysis(name: &str, edges: Vec<(&str, Vec<&str>)>) -> GraphAnalysis {
        let graph: DependencyMap<String> = edges
            .into_iter()
            .map(|(node, deps)| {
                (
                    node.to_string(),
                    deps.iter().map(|d| d.to_string()).collect(),
                )
            })
            .collect();
        let result = CycleDetector::new(&graph).detect();
        let manifest = DependencyManifest::new(name, format!("{name}.deps.toml"), graph);
        GraphAnalysis::new(&manifest, result)
    }

    pub fn clean() -> GraphAnalysis {
        analysis("clean", vec![("api", vec!["db"]), ("db", vec![])])
    }

    pub fn cyclic() -> GraphAnalysis {
        analysis(
            "checkout",
            vec![
                ("OrderService", vec!["PaymentService"]),
                ("PaymentService", vec!["OrderService"]),
                ("Logger", vec!["Logger"]),
            ],
        )
    }
}
