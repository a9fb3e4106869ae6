//! bootstrap-sysroot CLI
//!
//! Entry point for the bootstrap-sysroot command-line application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bootstrap_sysroot::cli::args::expand_argfiles;
use bootstrap_sysroot::cli::output::display_error;
use bootstrap_sysroot::cli::Cli;

fn main() -> Result<()> {
    let args = match expand_argfiles(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            display_error(&anyhow::Error::new(e));
            std::process::exit(1);
        }
    };
    let cli = Cli::parse_from(args);
    let output_config = cli.output_config();

    // Logs go to stderr so `--json` output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(output_config.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    // Run the command and handle errors
    match cli.run() {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
