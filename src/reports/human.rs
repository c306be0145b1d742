//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{GraphAnalysis, ReportGenerator, total_cycles};
use crate::error::CycleSentinelError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, analyses: &[GraphAnalysis]) -> Result<String, CycleSentinelError> {
        let mut output = String::new();
        let total = total_cycles(analyses);

        if total == 0 {
            write!(
                output,
                "\n{} No dependency cycles detected in {} {}! Every provider can be resolved.\n",
                style("✅").green().bold(),
                analyses.len(),
                pluralize("manifest", analyses.len())
            )?;
            return Ok(output);
        }

        write!(
            output,
            "\n{} Found {} dependency {}:\n\n",
            style("❌").red().bold(),
            style(total).red().bold(),
            pluralize("cycle", total)
        )?;

        // The limit applies across all manifests, in report order
        let mut remaining = self.max_cycles.unwrap_or(usize::MAX);
        let mut shown = 0;

        for analysis in analyses.iter().filter(|a| a.result().has_cycles()) {
            if remaining == 0 {
                break;
            }

            writeln!(
                output,
                "{} {} {}",
                style("📄").blue(),
                style(analysis.name()).bold(),
                style(format!("({})", analysis.path().display())).dim()
            )?;

            for (i, cycle) in analysis.result().cycles().iter().take(remaining).enumerate() {
                writeln!(output, "  {} Cycle #{}", style("🔄").yellow(), i + 1)?;
                if cycle.is_self_loop() {
                    writeln!(
                        output,
                        "    {} {} depends on itself",
                        style("→").dim(),
                        style(cycle.entry()).yellow()
                    )?;
                } else {
                    writeln!(
                        output,
                        "    {} {}",
                        style("→").dim(),
                        cycle.format_with(|node| style(node).yellow().to_string())
                    )?;
                }
                shown += 1;
                remaining -= 1;
            }
            writeln!(output)?;
        }

        if shown < total {
            writeln!(
                output,
                "{} Showing {} of {} cycles. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(shown).yellow(),
                style(total).yellow()
            )?;
        }

        writeln!(
            output,
            "\n{} To break these cycles, remove at least one dependency from each cycle.",
            style("💡").yellow()
        )?;
        writeln!(
            output,
            "{} Consider extracting the shared behavior into a provider that both sides can \
             depend on.",
            style("💡").yellow()
        )?;
        writeln!(
            output,
            "{} Nodes that appear in several cycles are the best places to start.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}
