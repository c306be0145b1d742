//! JSON format report generation

use serde_json::json;

use super::{GraphAnalysis, ReportGenerator, total_cycles};
use crate::error::CycleSentinelError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, analyses: &[GraphAnalysis]) -> Result<String, CycleSentinelError> {
        let graphs: Vec<_> = analyses
            .iter()
            .map(|analysis| {
                json!({
                    "name": analysis.name(),
                    "path": analysis.path().display().to_string(),
                    "nodes": analysis.node_count(),
                    "edges": analysis.edge_count(),
                    "has_cycles": analysis.result().has_cycles(),
                    "cycles": analysis.result().cycles(),
                })
            })
            .collect();

        let cycle_count = total_cycles(analyses);
        let report = json!({
            "has_cycles": cycle_count > 0,
            "cycle_count": cycle_count,
            "graphs": graphs,
        });

        serde_json::to_string_pretty(&report).map_err(CycleSentinelError::Json)
    }
}
