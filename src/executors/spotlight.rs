//! Spotlight command executor

use console::style;
use miette::{Result, WrapErr};

use super::{analyze_node, generate_report, load_manifests};
use crate::cache::CycleCache;
use crate::config::SpotlightConfig;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::reports::total_cycles;
use crate::utils::string::pluralize;

pub struct SpotlightExecutor;

impl CommandExecutor for SpotlightExecutor {
    type Config = SpotlightConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Analyzing cycles involving '{}'...\n",
            style("🔍").cyan(),
            style(&config.node).bold()
        );

        let mut progress = ProgressReporter::for_terminal();

        let manifests = load_manifests(&config.paths, &config.patterns, progress.as_mut())?;

        let cache = CycleCache::new();
        let analyses = analyze_node(manifests, &config.node, &cache, progress.as_mut())?;
        let cycle_count = total_cycles(&analyses);

        if let Some(p) = progress.as_mut() {
            p.finish_detection(cycle_count);
        }

        if cycle_count == 0 {
            eprintln!(
                "{} No cycles found involving '{}'",
                style("✓").green(),
                style(&config.node).bold()
            );
        } else {
            eprintln!(
                "\n{} Found {} {} involving '{}':",
                style("⚠").yellow(),
                cycle_count,
                pluralize("cycle", cycle_count),
                style(&config.node).bold()
            );
        }

        let report = generate_report(config.format, config.max_cycles, &analyses)
            .wrap_err("Failed to generate report for node analysis")?;
        print!("{report}");

        Ok(())
    }
}
