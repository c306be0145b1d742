use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, CycleDisplayArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "cycle-sentinel",
    about = "🔁 Detect circular provider dependencies before resolution",
    long_about = "cycle-sentinel loads dependency manifests (TOML or JSON files mapping each \
                  provider to the providers it depends on) and reports every circular chain \
                  as an explicit path, so a resolver never has to wait for a timeout to \
                  notice one.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect dependency manifests for cycles
    ///
    /// Loads every manifest found under the given paths and runs cycle
    /// detection on each one independently.
    #[command(
        long_about = "Detect circular dependencies in every manifest found under the given \
                      paths. Each manifest is checked with a single depth-first traversal; \
                      every back edge found is reported as a path that starts and ends with \
                      the same node, in the order the manifest declares its nodes."
    )]
    Inspect {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Exit with error code if cycles found
        #[arg(long, env = "CYCLE_SENTINEL_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// Put a spotlight on cycles involving a specific node
    ///
    /// Runs the same detection as `inspect` but only reports the cycles
    /// that pass through the named node.
    #[command(
        long_about = "Show only the circular dependencies that include the given node. Fails \
                      if no analyzed manifest mentions the node at all, which usually means \
                      the name is misspelled."
    )]
    Spotlight {
        /// Name of the node to focus on
        #[arg(value_name = "NODE", env = "CYCLE_SENTINEL_NODE")]
        node: String,

        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,
    },

    /// Render dependency graphs with their cycles highlighted
    #[command(
        long_about = "Generate visual dependency graphs as ASCII art, Mermaid diagrams or \
                      Graphviz DOT files. Edges that close a cycle and the nodes on it are \
                      highlighted unless --highlight-cycles=false is given."
    )]
    Spectacle {
        #[command(flatten)]
        common: CommonArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "CYCLE_SENTINEL_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "CYCLE_SENTINEL_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight cycles in the graph
        #[arg(
            long,
            default_value = "true",
            action = clap::ArgAction::Set,
            env = "CYCLE_SENTINEL_HIGHLIGHT_CYCLES"
        )]
        highlight_cycles: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
    #[value(name = "github")]
    GitHub,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Mermaid,
    Dot,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_inspect() {
        let cli = Cli::try_parse_from([
            "cycle-sentinel",
            "inspect",
            "manifests",
            "--format",
            "json",
            "--max-cycles",
            "3",
            "--error-on-cycles",
        ])
        .unwrap();

        match cli.command {
            Commands::Inspect {
                common,
                format,
                cycle_display,
                error_on_cycles,
            } => {
                assert_eq!(common.paths, vec![PathBuf::from("manifests")]);
                assert_eq!(format.format, OutputFormat::Json);
                assert_eq!(cycle_display.max_cycles, Some(3));
                assert!(error_on_cycles);
            }
            _ => panic!("Expected Inspect command"),
        }
    }

    #[test]
    fn test_parse_spectacle_defaults() {
        let cli = Cli::try_parse_from(["cycle-sentinel", "spectacle"]).unwrap();

        match cli.command {
            Commands::Spectacle {
                format,
                output,
                highlight_cycles,
                ..
            } => {
                assert_eq!(format, GraphFormat::Ascii);
                assert!(output.is_none());
                assert!(highlight_cycles);
            }
            _ => panic!("Expected Spectacle command"),
        }
    }

    #[test]
    fn test_parse_spectacle_without_highlight() {
        let cli = Cli::try_parse_from([
            "cycle-sentinel",
            "spectacle",
            "--highlight-cycles",
            "false",
            "-f",
            "dot",
        ])
        .unwrap();

        match cli.command {
            Commands::Spectacle {
                format,
                highlight_cycles,
                ..
            } => {
                assert_eq!(format, GraphFormat::Dot);
                assert!(!highlight_cycles);
            }
            _ => panic!("Expected Spectacle command"),
        }
    }

    #[test]
    fn test_parse_spotlight_requires_node() {
        assert!(Cli::try_parse_from(["cycle-sentinel", "spotlight"]).is_err());

        let cli = Cli::try_parse_from(["cycle-sentinel", "spotlight", "OrderService", "a", "b"])
            .unwrap();
        match cli.command {
            Commands::Spotlight { node, common, .. } => {
                assert_eq!(node, "OrderService");
                assert_eq!(common.paths.len(), 2);
            }
            _ => panic!("Expected Spotlight command"),
        }
    }
}
