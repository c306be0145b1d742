//! GitHub Actions format report generation

use std::fmt::Write;

use super::{GraphAnalysis, ReportGenerator, total_cycles};
use crate::error::CycleSentinelError;
use crate::utils::string::{escape_workflow_data, escape_workflow_property, pluralize};

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, analyses: &[GraphAnalysis]) -> Result<String, CycleSentinelError> {
        let mut output = String::new();
        let total = total_cycles(analyses);

        if total == 0 {
            writeln!(
                output,
                "::notice title=Dependency Check::No dependency cycles detected! ✅"
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "::error title=Dependency Cycles::Found {} dependency {}",
            total,
            pluralize("cycle", total)
        )?;

        for analysis in analyses.iter().filter(|a| a.result().has_cycles()) {
            let file = escape_workflow_property(&analysis.path().display().to_string());
            for (i, cycle) in analysis.result().cycles().iter().enumerate() {
                let title = format!("Cycle {} in {}", i + 1, analysis.name());
                writeln!(
                    output,
                    "::warning file={},title={}::{}",
                    file,
                    escape_workflow_property(&title),
                    escape_workflow_data(&cycle.to_string())
                )?;
            }
        }

        writeln!(
            output,
            "::notice title=Recommendation::To break these cycles, remove one dependency from \
             each cycle or extract the shared behavior into a separate provider."
        )?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::{analysis, clean, cyclic};

    #[test]
    fn test_github_report_no_cycles() {
        let report = GitHubReportGenerator::new().generate_report(&[clean()]).unwrap();
        assert!(report.starts_with("::notice title=Dependency Check::"));
    }

    #[test]
    fn test_github_report_annotations() {
        let report = GitHubReportGenerator::new()
            .generate_report(&[clean(), cyclic()])
            .unwrap();
        let lines: Vec<_> = report.lines().collect();

        assert_eq!(lines[0], "::error title=Dependency Cycles::Found 2 dependency cycles");
        assert_eq!(
            lines[1],
            "::warning file=checkout.deps.toml,title=Cycle 1 in checkout::OrderService → \
             PaymentService → OrderService"
        );
        assert_eq!(
            lines[2],
            "::warning file=checkout.deps.toml,title=Cycle 2 in checkout::Logger → Logger"
        );
        assert!(lines[3].starts_with("::notice title=Recommendation::"));
    }

    #[test]
    fn test_github_report_escapes_annotation_fields() {
        let hostile = analysis(
            "odd:name,v2",
            vec![("A\n::error::injected 100%", vec!["A\n::error::injected 100%"])],
        );
        let report = GitHubReportGenerator::new().generate_report(&[hostile]).unwrap();

        assert!(report.lines().all(|line| !line.starts_with("::error::injected")));
        assert!(report.contains(
            "::warning file=odd%3Aname%2Cv2.deps.toml,title=Cycle 1 in odd%3Aname%2Cv2::\
             A%0A::error::injected 100%25 → A%0A::error::injected 100%25"
        ));
    }
}
