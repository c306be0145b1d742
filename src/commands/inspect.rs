//! Inspect command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::InspectConfig;
use crate::error::CycleSentinelError;

impl FromCommand for InspectConfig {
    fn from_command(command: Commands) -> Result<Self, CycleSentinelError> {
        match command {
            Commands::Inspect {
                common,
                format,
                cycle_display,
                error_on_cycles,
            } => InspectConfig::builder()
                .with_paths(common.get_paths())
                .with_patterns(common.get_patterns())
                .with_format(format.format)
                .with_error_on_cycles(error_on_cycles)
                .with_max_cycles(cycle_display.max_cycles)
                .build(),
            _ => Err(CycleSentinelError::ConfigurationError {
                message: "Invalid command type for InspectConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(InspectConfig);

/// Execute the inspect command for detecting dependency cycles
pub fn execute_inspect_command(command: Commands) -> Result<()> {
    let config = InspectConfig::from_command(command)
        .wrap_err("Failed to parse inspect command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::inspect::InspectExecutor;
    InspectExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, OutputFormat};

    #[test]
    fn test_inspect_config_from_cli() {
        let cli = Cli::try_parse_from([
            "cycle-sentinel",
            "inspect",
            "deps",
            "--pattern",
            "*.graph.toml",
            "-f",
            "junit",
        ])
        .unwrap();

        let config = InspectConfig::try_from(cli.command).unwrap();
        assert_eq!(config.paths, vec![PathBuf::from("deps")]);
        assert_eq!(config.patterns, vec!["*.graph.toml"]);
        assert_eq!(config.format, OutputFormat::Junit);
        assert!(!config.error_on_cycles);
    }

    #[test]
    fn test_wrong_command_is_rejected() {
        let cli = Cli::try_parse_from(["cycle-sentinel", "spectacle"]).unwrap();
        assert!(InspectConfig::from_command(cli.command).is_err());
    }
}
