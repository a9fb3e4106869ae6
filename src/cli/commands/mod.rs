//! CLI command implementations
//!
//! Each command is implemented in its own submodule: it turns its parsed
//! flags into the typed options of one core operation and runs it.

pub mod assemble_compiler_and_stdlib;
pub mod assemble_driver;
pub mod setup_bootstrap_toolchain;

use anyhow::Result;
use clap::Subcommand;

use crate::cli::output::OutputConfig;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Place a compiler driver and its runtime library into a new sysroot
    AssembleDriver(assemble_driver::AssembleDriverArgs),

    /// Copy a compiler tree and add standard library artifacts for a target
    AssembleCompilerAndStdlib(assemble_compiler_and_stdlib::AssembleCompilerAndStdlibArgs),

    /// Build a bootstrap toolchain from rust-std and rustc dist tarballs
    SetupBootstrapToolchain(setup_bootstrap_toolchain::SetupBootstrapToolchainArgs),
}

impl Commands {
    /// Execute the command
    pub fn run(self, output: &OutputConfig) -> Result<()> {
        match self {
            Self::AssembleDriver(args) => assemble_driver::execute(args, output),
            Self::AssembleCompilerAndStdlib(args) => {
                assemble_compiler_and_stdlib::execute(args, output)
            }
            Self::SetupBootstrapToolchain(args) => setup_bootstrap_toolchain::execute(args, output),
        }
    }
}
