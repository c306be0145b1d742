//! Configuration constants for cycle-sentinel
//!
//! Defaults shared by the CLI, the manifest loader and the report
//! generators.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while scanning and checking graphs
    pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

    /// Frame shown once a spinner finishes
    pub const DONE_FRAME: &str = "✓";
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default graph rendering format
    pub const DEFAULT_GRAPH_FORMAT: &str = "ascii";

    /// Separator placed between nodes of a formatted cycle
    pub const CYCLE_SEPARATOR: &str = " → ";
}

/// Manifest discovery configuration
pub mod manifest {
    /// File name patterns searched for when a directory is given
    pub const DEFAULT_PATTERNS: &[&str] = &["*.deps.toml", "*.deps.json"];

    /// Directory names never descended into
    pub const SKIPPED_DIRS: &[&str] = &["target", ".git", "node_modules"];
}

/// Result cache configuration
pub mod cache {
    /// Default maximum number of graph shapes kept by a cache
    pub const DEFAULT_MAX_ENTRIES: usize = 256;
}
