//! CLI command for `bootstrap-sysroot assemble-compiler-and-stdlib`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::output::{print_report, OutputConfig};
use crate::config::defaults::HOST_TARGET;
use crate::core::report::Operation;
use crate::core::stdlib::{link_stdlib, StdlibOptions};
use crate::error::SysrootError;

/// Flags for `assemble-compiler-and-stdlib`
#[derive(Args, Debug)]
pub struct AssembleCompilerAndStdlibArgs {
    /// Standard library artifacts to place for the target
    #[arg(long, value_name = "PATH", num_args = 1.., required = true)]
    pub libs: Vec<PathBuf>,

    /// Sysroot directory to write
    #[arg(long, value_name = "PATH")]
    pub out_dir: PathBuf,

    /// Target triple [default: the triple this tool was built for]
    #[arg(long, value_name = "TRIPLE")]
    pub target: Option<String>,

    /// Existing sysroot providing bin/ and lib/
    #[arg(long, value_name = "PATH")]
    pub compiler_tree: Option<PathBuf>,
}

impl TryFrom<AssembleCompilerAndStdlibArgs> for StdlibOptions {
    type Error = SysrootError;

    fn try_from(args: AssembleCompilerAndStdlibArgs) -> Result<Self, Self::Error> {
        let compiler_tree = args.compiler_tree.ok_or(SysrootError::MissingArgument {
            flag: "--compiler-tree",
        })?;

        Ok(Self {
            compiler_tree,
            out_dir: args.out_dir,
            target: args.target.unwrap_or_else(|| HOST_TARGET.to_string()),
            libs: args.libs,
        })
    }
}

/// Execute the assemble-compiler-and-stdlib command
pub fn execute(args: AssembleCompilerAndStdlibArgs, output: &OutputConfig) -> Result<()> {
    let operation = Operation::AssembleCompilerAndStdlib;
    let options = StdlibOptions::try_from(args).with_context(|| format!("{operation} failed"))?;
    tracing::info!(
        "Linking {} libraries for {} onto {}",
        options.libs.len(),
        options.target,
        options.compiler_tree.display()
    );

    let report = link_stdlib(&options)
        .with_context(|| format!("{operation} failed for {}", options.out_dir.display()))?;
    print_report(output, &report)
}
