//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no filesystem side effects beyond reading argument files;
//! the assembly itself belongs in the [`crate::core`] module.

pub mod args;
pub mod commands;
pub mod output;

use anyhow::Result;
use clap::Parser;

use commands::Commands;
use output::OutputConfig;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built for ",
    env!("VERGEN_CARGO_TARGET_TRIPLE"),
    " with rustc ",
    env!("VERGEN_RUSTC_SEMVER"),
    ")"
);

/// bootstrap-sysroot - assemble compiler sysroots for bootstrap stages
///
/// Arguments may be read from a file with `@path`, one argument per line.
#[derive(Parser, Debug)]
#[command(name = "bootstrap-sysroot")]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print the assembly report as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new(self.quiet, self.json, self.verbose)
    }

    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let output = self.output_config();
        self.command.run(&output)
    }
}
