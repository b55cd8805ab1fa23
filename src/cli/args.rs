//! CLI argument definitions using clap
//!
//! Commands:
//! - shardplan run [--config <path>] [--seed <n>] [--data <path>] [--plan <name>]
//! - shardplan explain [--config <path>] [--seed <n>] [--data <path>]
//! - shardplan generate --output <path> [--config <path>] [--seed <n>]

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// shardplan - cost-based plan selection over partitioned users and orders
#[derive(Parser, Debug)]
#[command(name = "shardplan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Where the partition store comes from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Generator seed, overrides the config file
    #[arg(long)]
    pub seed: Option<u64>,

    /// Load the store from a JSON snapshot instead of generating it
    #[arg(long)]
    pub data: Option<PathBuf>,
}

/// Report format written to stdout
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Select the cheapest plan, execute it and print the result
    Run {
        #[command(flatten)]
        source: SourceArgs,

        /// Execute this plan instead of the selected one
        #[arg(long)]
        plan: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show every candidate cost and the selection without executing
    Explain {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Write a generated store to a JSON snapshot
    Generate {
        /// Snapshot file to write
        #[arg(long)]
        output: PathBuf,

        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Generator seed, overrides the config file
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_forced_plan() {
        let cli = Cli::try_parse_from(["shardplan", "run", "--seed", "7", "--plan", "plan2"]).unwrap();
        match cli.command {
            Command::Run {
                source,
                plan,
                format,
            } => {
                assert_eq!(source.seed, Some(7));
                assert!(source.config.is_none());
                assert_eq!(plan.as_deref(), Some("plan2"));
                assert_eq!(format, OutputFormat::Text);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_explain_json() {
        let cli = Cli::try_parse_from(["shardplan", "explain", "--format", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Explain {
                format: OutputFormat::Json,
                ..
            }
        ));
    }

    #[test]
    fn test_generate_requires_output() {
        assert!(Cli::try_parse_from(["shardplan", "generate"]).is_err());
    }
}
