//! Spectacle command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::sync::Arc;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::load_manifests;
use crate::cache::CycleCache;
use crate::cli::GraphFormat;
use crate::config::GraphOptions;
use crate::detector::DetectionResult;
use crate::executors::CommandExecutor;
use crate::graph::{GraphRenderer, GraphView};

pub struct SpectacleExecutor;

impl CommandExecutor for SpectacleExecutor {
    type Config = GraphOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Generating {} dependency graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let manifests = load_manifests(&config.paths, &config.patterns, None)?;

        if manifests.is_empty() {
            eprintln!("{} No manifests found to visualize", style("ℹ").blue());
            return Ok(());
        }

        // Detect cycles only if highlighting is requested
        let cache = CycleCache::new();
        let results: Vec<Arc<DetectionResult<String>>> = manifests
            .iter()
            .map(|manifest| {
                if config.highlight_cycles {
                    cache.get_or_detect(manifest.graph())
                } else {
                    Arc::default()
                }
            })
            .collect();

        let views: Vec<GraphView<'_>> = manifests
            .iter()
            .zip(&results)
            .map(|(manifest, result)| GraphView {
                name: manifest.name(),
                graph: manifest.graph(),
                cycles: result.cycles(),
            })
            .collect();

        let renderer = GraphRenderer::new(config.highlight_cycles);

        // Determine output destination
        let mut output_writer: Box<dyn Write> = if let Some(output_path) = config.output.as_ref()
        {
            Box::new(BufWriter::new(
                File::create(output_path)
                    .into_diagnostic()
                    .wrap_err_with(|| {
                        format!("Failed to create output file '{}'", output_path.display())
                    })?,
            ))
        } else {
            Box::new(io::stdout())
        };

        // Render based on format
        match config.format {
            GraphFormat::Ascii => renderer
                .render_ascii(&views, output_writer.as_mut())
                .wrap_err("Failed to render ASCII graph")?,
            GraphFormat::Mermaid => renderer
                .render_mermaid(&views, output_writer.as_mut())
                .wrap_err("Failed to render Mermaid graph")?,
            GraphFormat::Dot => renderer
                .render_dot(&views, output_writer.as_mut())
                .wrap_err("Failed to render DOT graph")?,
        }

        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to write graph output")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
