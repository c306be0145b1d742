//! Spectacle command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::GraphOptions;
use crate::error::CycleSentinelError;

impl FromCommand for GraphOptions {
    fn from_command(command: Commands) -> Result<Self, CycleSentinelError> {
        match command {
            Commands::Spectacle {
                common,
                format,
                output,
                highlight_cycles,
            } => GraphOptions::builder()
                .with_paths(common.get_paths())
                .with_patterns(common.get_patterns())
                .with_format(format)
                .with_output(output)
                .with_highlight_cycles(highlight_cycles)
                .build(),
            _ => Err(CycleSentinelError::ConfigurationError {
                message: "Invalid command type for GraphOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(GraphOptions);

/// Execute the spectacle command for generating visual dependency graphs
pub fn execute_spectacle_command(command: Commands) -> Result<()> {
    let config = GraphOptions::from_command(command)
        .wrap_err("Failed to parse spectacle command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::spectacle::SpectacleExecutor;
    SpectacleExecutor::execute(config)
}
