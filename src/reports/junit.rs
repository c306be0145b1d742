//! JUnit XML format report generation

use std::fmt::Write;

use super::{GraphAnalysis, ReportGenerator};
use crate::error::CycleSentinelError;
use crate::utils::string::escape_xml;

pub struct JunitReportGenerator;

impl Default for JunitReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JunitReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JunitReportGenerator {
    fn generate_report(&self, analyses: &[GraphAnalysis]) -> Result<String, CycleSentinelError> {
        let mut output = String::new();
        let tests = analyses.len();
        let failures = analyses.iter().filter(|a| a.result().has_cycles()).count();

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="cycle-sentinel" tests="{tests}" failures="{failures}">"#
        )?;
        writeln!(
            output,
            r#"  <testsuite name="dependency-cycles" tests="{tests}" failures="{failures}">"#
        )?;

        for analysis in analyses {
            let name = escape_xml(analysis.name());
            let classname = escape_xml(&analysis.path().display().to_string());

            if !analysis.result().has_cycles() {
                writeln!(
                    output,
                    r#"    <testcase name="{name}" classname="{classname}" />"#
                )?;
                continue;
            }

            writeln!(
                output,
                r#"    <testcase name="{name}" classname="{classname}">"#
            )?;
            writeln!(
                output,
                r#"      <failure message="Dependency cycles detected">"#
            )?;
            writeln!(
                output,
                "Found {} dependency cycles:",
                analysis.result().cycle_count()
            )?;
            for (i, cycle) in analysis.result().cycles().iter().enumerate() {
                writeln!(output, "Cycle {}: {}", i + 1, escape_xml(&cycle.to_string()))?;
            }
            writeln!(output, r#"      </failure>"#)?;
            writeln!(output, r#"    </testcase>"#)?;
        }

        writeln!(output, r#"  </testsuite>"#)?;
        writeln!(output, r#"</testsuites>"#)?;

        Ok(output)
    }
}
