//! CLI command for `bootstrap-sysroot setup-bootstrap-toolchain`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::output::{create_spinner, print_report, OutputConfig};
use crate::config::defaults::HOST_TARGET;
use crate::core::bootstrap::{unpack_bootstrap, BootstrapOptions};
use crate::core::report::Operation;
use crate::error::SysrootError;

/// Flags for `setup-bootstrap-toolchain`
#[derive(Args, Debug)]
pub struct SetupBootstrapToolchainArgs {
    /// Sysroot directory to write
    #[arg(long, value_name = "PATH")]
    pub out_dir: PathBuf,

    /// Target triple of the standard library archive [default: the triple this tool was built for]
    #[arg(long, value_name = "TRIPLE")]
    pub target: Option<String>,

    /// rustc dist tarball
    #[arg(long, value_name = "PATH")]
    pub compiler_tar: Option<PathBuf>,

    /// rust-std dist tarball
    #[arg(long, value_name = "PATH")]
    pub stdlib_tar: Option<PathBuf>,

    /// Parent directory for temporary extraction [default: system temp dir]
    #[arg(long, value_name = "PATH")]
    pub scratch_dir: Option<PathBuf>,
}

impl TryFrom<SetupBootstrapToolchainArgs> for BootstrapOptions {
    type Error = SysrootError;

    fn try_from(args: SetupBootstrapToolchainArgs) -> Result<Self, Self::Error> {
        let stdlib_archive = args.stdlib_tar.ok_or(SysrootError::MissingArgument {
            flag: "--stdlib-tar",
        })?;
        let compiler_archive = args.compiler_tar.ok_or(SysrootError::MissingArgument {
            flag: "--compiler-tar",
        })?;

        Ok(Self {
            out_dir: args.out_dir,
            target: args.target.unwrap_or_else(|| HOST_TARGET.to_string()),
            stdlib_archive,
            compiler_archive,
            scratch_parent: args.scratch_dir,
        })
    }
}

/// Execute the setup-bootstrap-toolchain command
pub fn execute(args: SetupBootstrapToolchainArgs, output: &OutputConfig) -> Result<()> {
    let operation = Operation::SetupBootstrapToolchain;
    let options = BootstrapOptions::try_from(args).with_context(|| format!("{operation} failed"))?;
    tracing::info!(
        "Unpacking {} and {} for {}",
        options.stdlib_archive.display(),
        options.compiler_archive.display(),
        options.target
    );

    let spinner = create_spinner(output, "Unpacking bootstrap toolchain...");
    let result = unpack_bootstrap(&options);
    spinner.finish_and_clear();

    let report =
        result.with_context(|| format!("{operation} failed for {}", options.out_dir.display()))?;
    print_report(output, &report)
}
