//! Inspect command executor

use console::style;
use miette::{Result, WrapErr};

use super::{analyze_manifests, generate_report, load_manifests};
use crate::cache::CycleCache;
use crate::config::InspectConfig;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::reports::total_cycles;

pub struct InspectExecutor;

impl CommandExecutor for InspectExecutor {
    type Config = InspectConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Inspecting dependency manifests for cycles...\n",
            style("🔁").cyan()
        );

        // Create progress reporter if we're in an interactive terminal
        let mut progress = ProgressReporter::for_terminal();

        let manifests = load_manifests(&config.paths, &config.patterns, progress.as_mut())?;

        if manifests.is_empty() {
            eprintln!("{} No manifests found to analyze", style("ℹ").blue());
            return Ok(());
        }

        let cache = CycleCache::new();
        let analyses = analyze_manifests(&manifests, &cache, progress.as_mut());
        let cycle_count = total_cycles(&analyses);

        if let Some(p) = progress.as_mut() {
            p.finish_detection(cycle_count);
        }

        let report = generate_report(config.format, config.max_cycles, &analyses)
            .wrap_err("Failed to generate report")?;
        print!("{report}");

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && cycle_count > 0 {
            std::process::exit(1);
        }

        Ok(())
    }
}
