//! CLI command for `bootstrap-sysroot assemble-driver`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::output::{print_report, OutputConfig};
use crate::core::driver::{assemble_driver, DriverOptions};
use crate::core::report::Operation;

/// Flags for `assemble-driver`
#[derive(Args, Debug)]
pub struct AssembleDriverArgs {
    /// Compiler driver binary, installed as bin/rustc
    #[arg(long, value_name = "PATH")]
    pub driver: PathBuf,

    /// Sysroot directory to write
    #[arg(long, value_name = "PATH")]
    pub out_dir: PathBuf,

    /// Target triple
    #[arg(long, value_name = "TRIPLE")]
    pub target: String,

    /// Shared runtime library loaded by the driver
    #[arg(long, value_name = "PATH")]
    pub runtime_lib: PathBuf,
}

impl From<AssembleDriverArgs> for DriverOptions {
    fn from(args: AssembleDriverArgs) -> Self {
        Self {
            driver: args.driver,
            out_dir: args.out_dir,
            target: args.target,
            runtime_lib: args.runtime_lib,
        }
    }
}

/// Execute the assemble-driver command
pub fn execute(args: AssembleDriverArgs, output: &OutputConfig) -> Result<()> {
    let options = DriverOptions::from(args);
    tracing::info!(
        "Assembling {} with driver {}",
        options.out_dir.display(),
        options.driver.display()
    );

    let report = assemble_driver(&options).with_context(|| {
        format!(
            "{} failed for {}",
            Operation::AssembleDriver,
            options.out_dir.display()
        )
    })?;
    print_report(output, &report)
}
