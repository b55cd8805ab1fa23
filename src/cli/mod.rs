//! CLI module for shardplan
//!
//! Provides command-line interface for:
//! - run: select, execute and print the join result
//! - explain: print candidate costs and the selection
//! - generate: write a seeded store to a JSON snapshot

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, OutputFormat, SourceArgs};
pub use commands::{explain, generate, run, run_command, run_query};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_explain, write_run_report, RunReport};
