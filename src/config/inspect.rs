//! Inspect command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Configuration for the inspect command
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Manifest files or directories to search
    pub paths: Vec<PathBuf>,
    /// File name globs matched while walking directories
    pub patterns: Vec<String>,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if cycles are found
    pub error_on_cycles: bool,
    /// Maximum number of cycles to report (None = all)
    pub max_cycles: Option<usize>,
}

crate::impl_builder!(InspectConfig, InspectConfigBuilder {
    paths: Vec<PathBuf> => with_paths,
    patterns: Vec<String> => with_patterns,
    format: OutputFormat => with_format,
    error_on_cycles: bool => with_error_on_cycles,
    max_cycles: Option<usize> => with_max_cycles,
});
