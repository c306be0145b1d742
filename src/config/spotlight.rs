//! Spotlight command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Configuration for the spotlight command
///
/// Same inputs as [`InspectConfig`](super::InspectConfig) plus the node
/// whose cycles are reported.
#[derive(Debug, Clone)]
pub struct SpotlightConfig {
    pub node: String,
    pub paths: Vec<PathBuf>,
    pub patterns: Vec<String>,
    pub format: OutputFormat,
    pub max_cycles: Option<usize>,
}

crate::impl_builder!(SpotlightConfig, SpotlightConfigBuilder {
    node: String => with_node,
    paths: Vec<PathBuf> => with_paths,
    patterns: Vec<String> => with_patterns,
    format: OutputFormat => with_format,
    max_cycles: Option<usize> => with_max_cycles,
});
