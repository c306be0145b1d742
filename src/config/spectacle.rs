//! Spectacle command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;

#[derive(Debug, Clone)]
pub struct GraphOptions {
    pub paths: Vec<PathBuf>,
    pub patterns: Vec<String>,
    pub format: GraphFormat,
    pub output: Option<PathBuf>,
    pub highlight_cycles: bool,
}

crate::impl_builder!(GraphOptions, GraphOptionsBuilder {
    paths: Vec<PathBuf> => with_paths,
    patterns: Vec<String> => with_patterns,
    format: GraphFormat => with_format,
    output: Option<PathBuf> => with_output,
    highlight_cycles: bool => with_highlight_cycles,
});
