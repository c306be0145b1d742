//! Command implementations for the cycle-sentinel CLI
//!
//! This module contains the implementations for each CLI command:
//! - inspect: Detect cycles in every discovered manifest
//! - spotlight: Only report cycles that pass through one node
//! - spectacle: Render the dependency graphs with cycles highlighted

pub mod inspect;
pub mod spectacle;
pub mod spotlight;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Inspect { .. } => inspect::execute_inspect_command(command),
        Commands::Spotlight { .. } => spotlight::execute_spotlight_command(command),
        Commands::Spectacle { .. } => spectacle::execute_spectacle_command(command),
    }
}
